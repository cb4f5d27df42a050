//! HTTP client for the task API.
//!
//! CLI subcommands (`tickd list`, `tickd add`, `tickd rm`) use this to talk
//! to a running server. The [`TaskApi`] trait is the seam the view-model is
//! tested against.

pub mod view;

use anyhow::{Context as _, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A task as seen by the client: the server's wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "task")]
    pub text: String,
    pub completed: bool,
}

/// The three operations the task API exposes.
#[async_trait]
pub trait TaskApi: Send + Sync {
    async fn list(&self) -> Result<Vec<Task>>;
    async fn create(&self, text: &str, completed: bool) -> Result<Task>;
    async fn delete(&self, id: &str) -> Result<()>;
}

/// `TaskApi` over HTTP with a bounded per-request timeout.
pub struct HttpTaskApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpTaskApi {
    /// Create a client targeting the API at `base_url` (no trailing slash needed).
    pub fn new(base_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl TaskApi for HttpTaskApi {
    async fn list(&self) -> Result<Vec<Task>> {
        let resp = self
            .http
            .get(format!("{}/tasks", self.base_url))
            .send()
            .await
            .context("failed to reach task API")?
            .error_for_status()
            .context("task list request rejected")?;
        resp.json().await.context("invalid task list response")
    }

    async fn create(&self, text: &str, completed: bool) -> Result<Task> {
        let resp = self
            .http
            .post(format!("{}/tasks", self.base_url))
            .json(&serde_json::json!({ "task": text, "completed": completed }))
            .send()
            .await
            .context("failed to reach task API")?
            .error_for_status()
            .context("task create request rejected")?;
        resp.json().await.context("invalid task create response")
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.http
            .delete(format!("{}/tasks/{}", self.base_url, id))
            .send()
            .await
            .context("failed to reach task API")?
            .error_for_status()
            .context("task delete request rejected")?;
        Ok(())
    }
}
