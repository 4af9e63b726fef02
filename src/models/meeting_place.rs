//! MeetingPlace model: where/how a contact was met.

use crate::domain::ContactId;
use serde::{Deserialize, Serialize};

/// The meeting place owned by a contact.
///
/// Every saved contact owns exactly one meeting place, built from the
/// draft's free-text meeting-context field. The record is created even when
/// the context text is empty, yielding an empty-name placeholder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MeetingPlace {
    /// Unique identifier for the meeting place
    pub id: ContactId,

    /// Display label, taken verbatim from the meeting-context text
    pub name: String,
}

impl MeetingPlace {
    /// Build a meeting place with a freshly assigned identity.
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            id: ContactId::generate(),
            name: name.into(),
        }
    }
}
