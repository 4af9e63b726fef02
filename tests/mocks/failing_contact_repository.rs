use async_trait::async_trait;
use keeplink_core::domain::ContactId;
use keeplink_core::error::{StoreError, StoreResult};
use keeplink_core::models::Contact;
use keeplink_core::repositories::ContactRepository;

/// A repository whose every operation fails, simulating a store that cannot
/// commit. Used to verify that a failed save preserves the draft and leaves
/// nothing partial behind.
#[allow(dead_code)]
pub struct FailingContactRepository;

#[async_trait]
impl ContactRepository for FailingContactRepository {
    async fn insert(&self, _contact: &Contact) -> StoreResult<()> {
        Err(StoreError::WriteFailed(sqlx::Error::PoolClosed))
    }

    async fn get(&self, id: &ContactId) -> StoreResult<Contact> {
        Err(StoreError::NotFound(format!("Contact {}", id)))
    }

    async fn list(&self) -> StoreResult<Vec<Contact>> {
        Err(StoreError::WriteFailed(sqlx::Error::PoolClosed))
    }

    async fn delete(&self, _id: &ContactId) -> StoreResult<()> {
        Err(StoreError::WriteFailed(sqlx::Error::PoolClosed))
    }

    async fn count_tags(&self) -> StoreResult<u64> {
        Err(StoreError::WriteFailed(sqlx::Error::PoolClosed))
    }

    async fn count_meeting_places(&self) -> StoreResult<u64> {
        Err(StoreError::WriteFailed(sqlx::Error::PoolClosed))
    }
}
