//! Data models for KeepLink contact capture.
//!
//! This module contains the data structures representing contact drafts,
//! persisted contacts, and the owned tag and meeting-place child records.

pub mod contact;
pub mod draft;
pub mod meeting_place;
pub mod tag;

pub use contact::Contact;
pub use draft::ContactDraft;
pub use meeting_place::MeetingPlace;
pub use tag::Tag;
