use serde::{Deserialize, Serialize};

/// A single phonebook entry.
///
/// The `id` is assigned by whichever store persisted the record: a random
/// numeric string for the in-memory backend, the hex form of a MongoDB
/// ObjectId for the persistent one. It is immutable once assigned and is
/// never reused after the record is deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub number: String,
}
