pub mod health;
pub mod tasks;

use axum::{http::StatusCode, Json};
use serde_json::{json, Value};

/// Map a store-level failure to a 500 response.
///
/// Store calls must never crash the service; every handler funnels its
/// errors through here instead of propagating them to the runtime.
pub(crate) fn internal_error(e: anyhow::Error) -> (StatusCode, Json<Value>) {
    tracing::error!(err = %e, "store operation failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": e.to_string() })),
    )
}
