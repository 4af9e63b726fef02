//! Transient form state for the "add contact" flow.

use serde::{Deserialize, Serialize};

/// The draft a contact form accumulates before saving.
///
/// A draft is created empty when the form opens, mutated field by field as
/// the user types or picks values, and discarded on save or cancel. Saving
/// borrows the draft, so a failed save leaves every field intact for retry.
///
/// No field is validated here: all text fields may be empty, the tag list
/// may be empty, and the avatar may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDraft {
    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Middle name / patronymic
    pub middle_name: String,

    /// Free-text label of where/how the contact was met
    pub meeting_context: String,

    /// Purpose of keeping in touch
    pub aim: String,

    /// Free-form note
    pub note: String,

    /// Tag names picked on the tag-selection screen, in display order
    pub tag_names: Vec<String>,

    /// Raw image bytes from the picker/cropper, if any
    pub avatar: Option<Vec<u8>>,
}

impl ContactDraft {
    /// Create an empty draft, as when the form is first presented.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when nothing has been entered yet.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_empty()
            && self.last_name.is_empty()
            && self.middle_name.is_empty()
            && self.meeting_context.is_empty()
            && self.aim.is_empty()
            && self.note.is_empty()
            && self.tag_names.is_empty()
            && self.avatar.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_draft_is_empty() {
        let draft = ContactDraft::new();
        assert!(draft.is_empty());
    }

    #[test]
    fn test_draft_with_any_field_is_not_empty() {
        let mut draft = ContactDraft::new();
        draft.tag_names.push("friend".to_string());
        assert!(!draft.is_empty());

        let mut draft = ContactDraft::new();
        draft.avatar = Some(vec![0xFF]);
        assert!(!draft.is_empty());
    }
}
