use async_trait::async_trait;
use keeplink_core::domain::ContactId;
use keeplink_core::error::{StoreError, StoreResult};
use keeplink_core::models::Contact;
use keeplink_core::repositories::ContactRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Provides an in-memory implementation of ContactRepository that can be
/// easily configured with test data and tracks method calls for verification.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactRepository {
    contacts: Arc<Mutex<Vec<Contact>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(Mutex::new(Vec::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Snapshot of everything inserted so far, in insertion order.
    pub fn stored(&self) -> Vec<Contact> {
        self.contacts.lock().unwrap().clone()
    }

    /// Clear all contacts from the repository.
    pub fn clear(&self) {
        let mut contacts = self.contacts.lock().unwrap();
        contacts.clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    async fn insert(&self, contact: &Contact) -> StoreResult<()> {
        self.track_call("insert");
        let mut contacts = self.contacts.lock().unwrap();
        contacts.push(contact.clone());
        Ok(())
    }

    async fn get(&self, id: &ContactId) -> StoreResult<Contact> {
        self.track_call("get");
        let contacts = self.contacts.lock().unwrap();
        contacts
            .iter()
            .find(|c| &c.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("Contact {}", id)))
    }

    async fn list(&self) -> StoreResult<Vec<Contact>> {
        self.track_call("list");
        Ok(self.contacts.lock().unwrap().clone())
    }

    async fn delete(&self, id: &ContactId) -> StoreResult<()> {
        self.track_call("delete");
        let mut contacts = self.contacts.lock().unwrap();
        let before = contacts.len();
        contacts.retain(|c| &c.id != id);
        if contacts.len() == before {
            return Err(StoreError::NotFound(format!("Contact {}", id)));
        }
        Ok(())
    }

    async fn count_tags(&self) -> StoreResult<u64> {
        self.track_call("count_tags");
        let contacts = self.contacts.lock().unwrap();
        Ok(contacts.iter().map(|c| c.tags.len() as u64).sum())
    }

    async fn count_meeting_places(&self) -> StoreResult<u64> {
        self.track_call("count_meeting_places");
        Ok(self.contacts.lock().unwrap().len() as u64)
    }
}
