//! Form session state machine for the add-contact flow.
//!
//! `Editing → Saving → { ClosedSaved | ClosedCancelled | ErrorRetry }`
//!
//! `Editing` is the initial state. `ClosedSaved` and `ClosedCancelled` are
//! terminal. A failed save lands in `ErrorRetry`, which carries the error
//! message and drops back to `Editing` on acknowledgement with every draft
//! field preserved.

use crate::error::{StoreError, StoreResult};
use crate::models::{Contact, ContactDraft};
use crate::services::DraftService;
use std::sync::Arc;
use tracing::debug;

/// Where the form session currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// The user is editing the draft.
    Editing,
    /// A save is in flight.
    Saving,
    /// The save committed and the form closed.
    ClosedSaved,
    /// The user dismissed the form without saving.
    ClosedCancelled,
    /// The save failed; the draft is intact and the user may retry.
    ErrorRetry(String),
}

impl SessionState {
    /// Terminal states accept no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::ClosedSaved | Self::ClosedCancelled)
    }
}

/// One add-contact form session: a draft plus its lifecycle state.
pub struct FormSession {
    draft: ContactDraft,
    state: SessionState,
    service: Arc<dyn DraftService>,
}

impl FormSession {
    /// Open a fresh form session with an empty draft.
    pub fn new(service: Arc<dyn DraftService>) -> Self {
        Self {
            draft: ContactDraft::new(),
            state: SessionState::Editing,
            service,
        }
    }

    /// The draft under edit.
    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    /// Mutable access for form-field bindings.
    ///
    /// Only valid while editing; a closed session hands out nothing.
    pub fn draft_mut(&mut self) -> Option<&mut ContactDraft> {
        match self.state {
            SessionState::Editing | SessionState::ErrorRetry(_) => Some(&mut self.draft),
            _ => None,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Attach picked avatar bytes to the draft.
    pub fn attach_avatar(&mut self, bytes: Vec<u8>) -> StoreResult<()> {
        if self.state.is_terminal() {
            return Err(StoreError::Other("Session is closed".to_string()));
        }
        self.service.attach_avatar(&mut self.draft, bytes)
    }

    /// Save the draft and, on success, close the form.
    ///
    /// On failure the session moves to `ErrorRetry` with the draft intact;
    /// calling [`FormSession::acknowledge_error`] returns it to `Editing`.
    pub async fn save(&mut self) -> StoreResult<Contact> {
        if self.state.is_terminal() {
            return Err(StoreError::Other("Session is closed".to_string()));
        }

        self.state = SessionState::Saving;
        match self.service.save_draft(&self.draft).await {
            Ok(contact) => {
                debug!(contact_id = %contact.id, "Form session closed after save");
                self.state = SessionState::ClosedSaved;
                Ok(contact)
            }
            Err(e) => {
                self.state = SessionState::ErrorRetry(e.to_string());
                Err(e)
            }
        }
    }

    /// Dismiss the error prompt and resume editing.
    pub fn acknowledge_error(&mut self) {
        if let SessionState::ErrorRetry(_) = self.state {
            self.state = SessionState::Editing;
        }
    }

    /// Close the form without saving; the draft is discarded.
    pub fn cancel(&mut self) -> StoreResult<()> {
        if self.state.is_terminal() {
            return Err(StoreError::Other("Session is closed".to_string()));
        }
        self.state = SessionState::ClosedCancelled;
        Ok(())
    }
}
