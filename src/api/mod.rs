//! HTTP API Module
//!
//! Maps the REST surface onto the storage layer.
//!
//! ## Overview
//! One handler per (verb, path) pair. Each handler extracts path and body
//! parameters, performs request-shape checks (both `name` and `number`
//! present) before touching storage, invokes the `ContactStore`, and hands
//! any failure to the error translator.
//!
//! ## Submodules
//! - **`handlers`**: Axum request handlers for every endpoint.
//! - **`types`**: Request/response DTOs.
//! - **`error`**: The single failure-to-HTTP mapping policy.

pub mod error;
pub mod handlers;
pub mod types;


use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::{Extension, Router};
use std::sync::Arc;
use std::time::Instant;

use crate::storage::ContactStore;
use self::handlers::{
    handle_create, handle_delete, handle_get_one, handle_info, handle_list, handle_root,
    handle_unknown_endpoint, handle_update,
};

/// Builds the full application router over the given store.
pub fn router(store: Arc<dyn ContactStore>) -> Router {
    Router::new()
        .route("/", get(handle_root))
        .route("/api/persons", get(handle_list).post(handle_create))
        .route(
            "/api/persons/:id",
            get(handle_get_one).put(handle_update).delete(handle_delete),
        )
        .route("/info", get(handle_info))
        .fallback(handle_unknown_endpoint)
        .layer(Extension(store))
        .layer(middleware::from_fn(log_request))
}

/// Logs one line per request: method, path, status, and elapsed time.
async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(req).await;

    tracing::info!(
        "{} {} {} - {} ms",
        method,
        path,
        response.status().as_u16(),
        start.elapsed().as_millis()
    );
    response
}
