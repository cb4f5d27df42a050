// rest/mod.rs — HTTP/JSON task API server.
//
// Endpoints:
//   GET    /tasks
//   POST   /tasks
//   DELETE /tasks/{id}
//   GET    /health

pub mod routes;

use anyhow::Result;
use axum::{
    routing::{delete, get},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::AppContext;

pub async fn start_rest_server(ctx: Arc<AppContext>) -> Result<()> {
    let bind = format!("{}:{}", ctx.config.bind_address, ctx.config.port);
    let addr: SocketAddr = bind.parse()?;

    let router = build_router(ctx);

    info!("task API listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}

pub fn build_router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/health", get(routes::health::health))
        .route(
            "/tasks",
            get(routes::tasks::list_tasks).post(routes::tasks::create_task),
        )
        .route("/tasks/{id}", delete(routes::tasks::delete_task))
        // Browser clients are served from another origin, so the API stays
        // wide open to cross-origin requests.
        .layer(CorsLayer::permissive())
        .with_state(ctx)
}
