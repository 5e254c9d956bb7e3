use async_trait::async_trait;
use thiserror::Error;

use crate::contact::{Contact, ValidationError};

/// Failure kinds a store operation can produce.
///
/// `Backend` wraps anything the translator does not recognize (driver
/// failures, broken connections); it is reported once and logged, with no
/// recovery attempted.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The id fails the backend's identifier-format check. Distinct from an
    /// id that is well-formed but absent.
    #[error("Malformed id")]
    MalformedId,
    /// The candidate record broke one or more validation rules.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    /// Another record already holds this name.
    #[error("name must be unique")]
    DuplicateName,
    /// No record with the given id exists.
    #[error("contact not found")]
    NotFound,
    /// Any other backend failure.
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

/// Data access operations over contact records, independent of backend.
///
/// Both implementations run the same pure validation (`contact::validate`)
/// before any write, so a record that violates the length or pattern rules
/// is rejected identically whether the backend is a list or a database.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Returns every current record. Never fails under normal operation.
    async fn list_all(&self) -> Result<Vec<Contact>, StoreError>;

    /// Returns the record with the given id.
    ///
    /// `Err(NotFound)` if absent; `Err(MalformedId)` if the id fails the
    /// backend's format check (MongoDB backend only — the in-memory backend
    /// treats every unknown id as absent).
    async fn find_by_id(&self, id: &str) -> Result<Contact, StoreError>;

    /// Validates the candidate pair, assigns a fresh unique id, persists the
    /// record, and returns it as stored.
    ///
    /// `Err(Invalid)` on broken rules, `Err(DuplicateName)` if the name is
    /// already taken — including when the collision is only detected by the
    /// backend at write time.
    async fn create(&self, name: &str, number: &str) -> Result<Contact, StoreError>;

    /// Replaces `name` and `number` of an existing record, re-running
    /// validation. The id never changes.
    async fn update_by_id(&self, id: &str, name: &str, number: &str)
        -> Result<Contact, StoreError>;

    /// Removes the record with the given id.
    ///
    /// `Err(NotFound)` when nothing was removed, for both backends.
    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError>;

    /// Current number of records, for the info page.
    async fn count(&self) -> Result<usize, StoreError>;
}
