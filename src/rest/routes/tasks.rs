// rest/routes/tasks.rs — Task CRUD routes.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use super::internal_error;
use crate::AppContext;

pub async fn list_tasks(
    State(ctx): State<Arc<AppContext>>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    match ctx.store.list_all().await {
        Ok(rows) => Ok(Json(json!(rows))),
        Err(e) => Err(internal_error(e)),
    }
}

#[derive(Deserialize)]
pub struct CreateTaskRequest {
    /// Wire name `task`, matching what existing clients send. Required; a
    /// body without it is rejected by the JSON extractor before we get here.
    #[serde(rename = "task")]
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

pub async fn create_task(
    State(ctx): State<Arc<AppContext>>,
    Json(body): Json<CreateTaskRequest>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    match ctx.store.insert(&body.text, body.completed).await {
        Ok(row) => Ok(Json(json!(row))),
        Err(e) => Err(internal_error(e)),
    }
}

/// Delete is idempotent: the response is the same whether or not a task
/// with this id existed.
pub async fn delete_task(
    State(ctx): State<Arc<AppContext>>,
    Path(id): Path<String>,
) -> Result<&'static str, (StatusCode, Json<Value>)> {
    match ctx.store.delete_by_id(&id).await {
        Ok(()) => Ok("Task deleted"),
        Err(e) => Err(internal_error(e)),
    }
}
