use serde::{Deserialize, Serialize};

/// Request body for creating or updating a contact.
///
/// Both fields are optional at the deserialization level so that a missing
/// field is reported as a 400 with a message, not a generic body-rejection.
/// Any client-supplied id in the body is ignored; ids are assigned by the
/// store.
#[derive(Debug, Deserialize)]
pub struct ContactPayload {
    pub name: Option<String>,
    pub number: Option<String>,
}

/// Error response body: `{"error": "..."}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
