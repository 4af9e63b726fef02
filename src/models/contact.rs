//! Contact model: the persisted aggregate written by a save.

use crate::domain::ContactId;
use crate::models::{ContactDraft, MeetingPlace, Tag};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A contact in the KeepLink personal CRM.
///
/// The contact is an aggregate root: it exclusively owns its [`Tag`] records
/// and its [`MeetingPlace`] for the lifetime of the aggregate. Deleting the
/// contact deletes the children (cascade).
///
/// Invariants on every persisted contact:
/// - a stable identity;
/// - a tag collection that is possibly empty but never absent;
/// - exactly one meeting place, even when the context text was empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Contact {
    /// Unique identifier for the contact
    pub id: ContactId,

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

    /// Avatar image bytes, stored inline on the aggregate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<Vec<u8>>,

    /// Owned tags, in the order they were picked
    pub tags: Vec<Tag>,

    /// Owned meeting place
    pub meeting_place: MeetingPlace,

    /// When the contact was created (UTC)
    pub created_at: DateTime<Utc>,
}

impl Contact {
    /// Assemble a contact from a draft.
    ///
    /// Each tag name maps to a freshly constructed [`Tag`] (no lookup or
    /// merge against existing tags), and one [`MeetingPlace`] is built from
    /// the meeting-context text even when that text is empty. The draft is
    /// only borrowed; it stays usable if the subsequent write fails.
    pub fn from_draft(draft: &ContactDraft) -> Self {
        let tags = draft
            .tag_names
            .iter()
            .map(Tag::with_name)
            .collect::<Vec<_>>();

        let meeting_place = MeetingPlace::with_name(&draft.meeting_context);

        Self {
            id: ContactId::generate(),
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
            middle_name: draft.middle_name.clone(),
            meeting_context: draft.meeting_context.clone(),
            aim: draft.aim.clone(),
            note: draft.note.clone(),
            avatar: draft.avatar.clone(),
            tags,
            meeting_place,
            created_at: Utc::now(),
        }
    }

    /// Full display name assembled from the name parts.
    pub fn full_name(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        for part in [&self.last_name, &self.first_name, &self.middle_name] {
            if !part.is_empty() {
                parts.push(part.as_str());
            }
        }
        parts.join(" ")
    }
}
