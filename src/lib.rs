//! KeepLink Core - contact capture and persistence for the KeepLink personal CRM.
//!
//! This library implements the backend of the "add contact" flow: a transient
//! draft collects form state, an assembler turns it into a contact aggregate
//! with owned tag and meeting-place children, and a repository commits the
//! aggregate to a local SQLite store in a single transaction.
//!
//! # Architecture
//!
//! - **models**: Drafts, contacts, tags, and meeting places
//! - **domain**: Validated value objects (identities)
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **avatar**: Image byte validation for picked avatars
//! - **store**: SQLite pool setup and schema migrations
//! - **repositories**: Aggregate storage behind a trait seam
//! - **services**: Draft assembly and persistence
//! - **session**: The form lifecycle state machine
//!
//! Storage faults never abort the process: every fallible operation returns
//! a [`error::StoreError`] and leaves the caller's draft intact for retry.

pub mod avatar;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;
pub mod session;
pub mod store;

pub use config::Config;
pub use domain::ContactId;
pub use error::{ConfigError, StoreError, StoreResult};
pub use models::{Contact, ContactDraft, MeetingPlace, Tag};
pub use repositories::{ContactRepository, SqliteContactRepository};
pub use services::{DraftService, DraftServiceImpl};
pub use session::{FormSession, SessionState};
