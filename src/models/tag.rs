//! Tag model: an owned child label on a contact.

use crate::domain::ContactId;
use serde::{Deserialize, Serialize};

/// A tag attached to a contact.
///
/// Tags are created fresh for each saved contact from the draft's tag-name
/// list. There is no deduplication against tags of other contacts: two
/// contacts tagged "friend" own two distinct tag records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    /// Unique identifier for the tag
    pub id: ContactId,

    /// Display name of the tag
    pub name: String,
}

impl Tag {
    /// Build a tag with a freshly assigned identity.
    ///
    /// The returned value is owned by the caller and is never mutated after
    /// it is attached to a contact.
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            id: ContactId::generate(),
            name: name.into(),
        }
    }
}
