mod failing_contact_repository;
mod mock_contact_repository;

pub use failing_contact_repository::FailingContactRepository;
pub use mock_contact_repository::MockContactRepository;
