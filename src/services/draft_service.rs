//! Draft assembly and persistence.
//!
//! This is the core of the add-contact flow: collect the transient form
//! state into a [`Contact`] aggregate and commit it in one transaction.

use crate::avatar;
use crate::error::StoreResult;
use crate::models::{Contact, ContactDraft};
use crate::repositories::ContactRepository;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

/// Draft service trait for the add-contact flow.
#[async_trait]
pub trait DraftService: Send + Sync {
    /// Assemble the draft into a contact aggregate and persist it.
    ///
    /// The draft is only borrowed: on failure every field is left intact so
    /// the form can present a retry without losing user input. On success
    /// the persisted aggregate is returned and the form may close.
    async fn save_draft(&self, draft: &ContactDraft) -> StoreResult<Contact>;

    /// Attach picked image bytes to the draft.
    ///
    /// This is the completion of the out-of-band image load: the picker
    /// hands bytes over after the form thread has moved on. Bytes are
    /// validated before the draft is touched, so a corrupt pick leaves any
    /// previously attached avatar in place.
    fn attach_avatar(&self, draft: &mut ContactDraft, bytes: Vec<u8>) -> StoreResult<()>;
}

/// Default implementation of [`DraftService`].
///
/// The repository is injected and scoped to this service; the store handle
/// is never global and never acquired lazily inside the save.
pub struct DraftServiceImpl {
    repo: Arc<dyn ContactRepository>,
    max_avatar_bytes: usize,
}

impl DraftServiceImpl {
    /// Create a new draft service.
    pub fn new(repo: Arc<dyn ContactRepository>, max_avatar_bytes: usize) -> Self {
        Self {
            repo,
            max_avatar_bytes,
        }
    }
}

#[async_trait]
impl DraftService for DraftServiceImpl {
    async fn save_draft(&self, draft: &ContactDraft) -> StoreResult<Contact> {
        if let Some(ref bytes) = draft.avatar {
            avatar::validate(bytes, self.max_avatar_bytes)?;
        }

        // Fresh tags and meeting place per save; no lookup or merge against
        // existing records.
        let contact = Contact::from_draft(draft);

        if let Err(e) = self.repo.insert(&contact).await {
            warn!(error = %e, "Contact save failed; draft preserved for retry");
            return Err(e);
        }

        info!(contact_id = %contact.id, tags = contact.tags.len(), "Contact saved");
        Ok(contact)
    }

    fn attach_avatar(&self, draft: &mut ContactDraft, bytes: Vec<u8>) -> StoreResult<()> {
        avatar::validate(&bytes, self.max_avatar_bytes)?;
        draft.avatar = Some(bytes);
        Ok(())
    }
}
