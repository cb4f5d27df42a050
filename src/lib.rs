pub mod client;
pub mod config;
pub mod rest;
pub mod storage;

use std::sync::Arc;

use config::Config;
use storage::TaskStore;

/// Shared application state passed to every REST handler.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<Config>,
    pub store: Arc<TaskStore>,
    pub started_at: std::time::Instant,
}
