use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::Html;
use axum::{Extension, Json};
use std::sync::Arc;

use super::error::ApiError;
use super::types::{ContactPayload, ErrorBody};
use crate::contact::Contact;
use crate::storage::ContactStore;

/// GET `/` — liveness text.
pub async fn handle_root() -> &'static str {
    "hello"
}

/// GET `/api/persons` — the full contact list.
pub async fn handle_list(
    Extension(store): Extension<Arc<dyn ContactStore>>,
) -> Result<Json<Vec<Contact>>, ApiError> {
    let contacts = store.list_all().await?;
    Ok(Json(contacts))
}

/// GET `/info` — record count and current server time as an HTML fragment.
pub async fn handle_info(
    Extension(store): Extension<Arc<dyn ContactStore>>,
) -> Result<Html<String>, ApiError> {
    let count = store.count().await?;
    let now = chrono::Local::now();
    Ok(Html(format!(
        "<p>Phonebook has info for {} people</p>\n<p>{}</p>",
        count,
        now.to_rfc2822()
    )))
}

/// GET `/api/persons/:id` — a single contact.
pub async fn handle_get_one(
    Path(id): Path<String>,
    Extension(store): Extension<Arc<dyn ContactStore>>,
) -> Result<Json<Contact>, ApiError> {
    let contact = store.find_by_id(&id).await?;
    Ok(Json(contact))
}

/// POST `/api/persons` — create a contact from `{name, number}`.
pub async fn handle_create(
    Extension(store): Extension<Arc<dyn ContactStore>>,
    Json(payload): Json<ContactPayload>,
) -> Result<Json<Contact>, ApiError> {
    let (name, number) = require_fields(&payload)?;
    let contact = store.create(name, number).await?;
    Ok(Json(contact))
}

/// PUT `/api/persons/:id` — replace an existing contact's name and number.
pub async fn handle_update(
    Path(id): Path<String>,
    Extension(store): Extension<Arc<dyn ContactStore>>,
    Json(payload): Json<ContactPayload>,
) -> Result<Json<Contact>, ApiError> {
    let (name, number) = require_fields(&payload)?;
    let contact = store.update_by_id(&id, name, number).await?;
    Ok(Json(contact))
}

/// DELETE `/api/persons/:id` — remove a contact.
pub async fn handle_delete(
    Path(id): Path<String>,
    Extension(store): Extension<Arc<dyn ContactStore>>,
) -> Result<StatusCode, ApiError> {
    store.delete_by_id(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Fallback for every unmatched (verb, path) pair.
pub async fn handle_unknown_endpoint() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: "unknown endpoint".to_string(),
        }),
    )
}

/// Request-shape check shared by create and update: both fields must be
/// present in the body. Content rules (length, pattern) belong to validation.
fn require_fields(payload: &ContactPayload) -> Result<(&str, &str), ApiError> {
    match (payload.name.as_deref(), payload.number.as_deref()) {
        (Some(name), Some(number)) => Ok((name, number)),
        _ => Err(ApiError::MissingFields),
    }
}
