use crate::domain::ContactId;
use crate::error::StoreResult;
use crate::models::Contact;
use async_trait::async_trait;

/// Repository for the contact aggregate.
///
/// Provides abstraction over aggregate storage and retrieval, enabling
/// different implementations (SQLite, mock). The aggregate is always written
/// and read as a whole: a contact travels with its tags and meeting place.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Insert a contact with its owned tags and meeting place.
    ///
    /// The whole aggregate commits in a single transaction: on any failure
    /// nothing is visible in the store (all-or-nothing).
    async fn insert(&self, contact: &Contact) -> StoreResult<()>;

    /// Retrieve a single contact aggregate by ID, tags in picking order.
    async fn get(&self, id: &ContactId) -> StoreResult<Contact>;

    /// Retrieve all contacts in insertion order.
    async fn list(&self) -> StoreResult<Vec<Contact>>;

    /// Delete a contact; its tags and meeting place go with it.
    async fn delete(&self, id: &ContactId) -> StoreResult<()>;

    /// Total number of tag records across all contacts.
    async fn count_tags(&self) -> StoreResult<u64>;

    /// Total number of meeting-place records across all contacts.
    async fn count_meeting_places(&self) -> StoreResult<u64>;
}
