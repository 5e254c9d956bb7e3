use async_trait::async_trait;
use rand::Rng;
use std::collections::HashSet;
use std::sync::RwLock;

use super::store::{ContactStore, StoreError};
use crate::contact::{validate, Contact};

/// In-memory contact store: a single owned list behind one lock.
///
/// Operations are O(n) scans, which is fine at phonebook scale. All state
/// lives inside this struct; nothing is shared globally. The uniqueness
/// check and the insert happen under the same write lock, so two concurrent
/// creates with the same name cannot both succeed.
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

struct Inner {
    contacts: Vec<Contact>,
    /// Every id this store has ever handed out. Ids stay in the set after
    /// deletion so they are never reused.
    issued_ids: HashSet<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                contacts: Vec::new(),
                issued_ids: HashSet::new(),
            }),
        }
    }

    /// Generates a random numeric id unused by any record past or present.
    fn fresh_id(inner: &mut Inner) -> String {
        let mut rng = rand::thread_rng();
        loop {
            let candidate = rng.gen_range(0..1_000_000u32).to_string();
            if inner.issued_ids.insert(candidate.clone()) {
                return candidate;
            }
        }
    }

    fn lock_poisoned() -> StoreError {
        StoreError::Backend(anyhow::anyhow!("contact list lock poisoned"))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactStore for MemoryStore {
    async fn list_all(&self) -> Result<Vec<Contact>, StoreError> {
        let inner = self.inner.read().map_err(|_| Self::lock_poisoned())?;
        Ok(inner.contacts.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Contact, StoreError> {
        let inner = self.inner.read().map_err(|_| Self::lock_poisoned())?;
        inner
            .contacts
            .iter()
            .find(|contact| contact.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn create(&self, name: &str, number: &str) -> Result<Contact, StoreError> {
        validate(name, number)?;

        let mut inner = self.inner.write().map_err(|_| Self::lock_poisoned())?;
        if inner.contacts.iter().any(|contact| contact.name == name) {
            return Err(StoreError::DuplicateName);
        }

        let contact = Contact {
            id: Self::fresh_id(&mut inner),
            name: name.to_string(),
            number: number.to_string(),
        };
        inner.contacts.push(contact.clone());
        tracing::debug!("created contact {} ({})", contact.id, contact.name);
        Ok(contact)
    }

    async fn update_by_id(
        &self,
        id: &str,
        name: &str,
        number: &str,
    ) -> Result<Contact, StoreError> {
        validate(name, number)?;

        let mut inner = self.inner.write().map_err(|_| Self::lock_poisoned())?;
        // Existence first, then uniqueness: a missing id is a 404 even when
        // the requested name belongs to another record, matching the MongoDB
        // backend (no document matches, so its unique index never fires).
        let position = inner
            .contacts
            .iter()
            .position(|contact| contact.id == id)
            .ok_or(StoreError::NotFound)?;
        if inner
            .contacts
            .iter()
            .any(|contact| contact.name == name && contact.id != id)
        {
            return Err(StoreError::DuplicateName);
        }

        let contact = &mut inner.contacts[position];
        contact.name = name.to_string();
        contact.number = number.to_string();
        Ok(contact.clone())
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.write().map_err(|_| Self::lock_poisoned())?;
        let before = inner.contacts.len();
        inner.contacts.retain(|contact| contact.id != id);
        if inner.contacts.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn count(&self) -> Result<usize, StoreError> {
        let inner = self.inner.read().map_err(|_| Self::lock_poisoned())?;
        Ok(inner.contacts.len())
    }
}
