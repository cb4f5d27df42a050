use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};
use std::sync::Arc;

use super::internal_error;
use crate::AppContext;

pub async fn health(
    State(ctx): State<Arc<AppContext>>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let uptime = ctx.started_at.elapsed().as_secs();
    let tasks = ctx.store.count().await.map_err(internal_error)?;
    Ok(Json(json!({
        "status": "ok",
        "uptime_secs": uptime,
        "version": env!("CARGO_PKG_VERSION"),
        "tasks": tasks,
    })))
}
