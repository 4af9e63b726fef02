//! Application service layer.
//!
//! Services contain the save-flow business logic and orchestrate the
//! repository layer. They provide a clean boundary between the form session
//! and data access.

mod draft_service;

pub use draft_service::{DraftService, DraftServiceImpl};
