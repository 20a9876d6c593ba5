//! HTTP workflow engine client
//!
//! Reaches a generation engine running as its own service: the canonical
//! state is posted as JSON and the enriched state comes back in the reply
//! body.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::result::EngineResult;
use super::state::WorkflowState;
use super::WorkflowEngine;
use crate::error::EngineError;

/// Workflow engine reached over HTTP.
pub struct HttpWorkflowEngine {
    endpoint: String,
    client: Client,
}

impl HttpWorkflowEngine {
    /// Client for the engine at `endpoint`. No request timeout is set:
    /// generation legitimately runs for minutes.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }
}

#[async_trait]
impl WorkflowEngine for HttpWorkflowEngine {
    async fn invoke(&self, state: WorkflowState) -> Result<EngineResult, EngineError> {
        debug!(endpoint = %self.endpoint, topic = %state.topic, "Invoking workflow engine");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&state)
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let result: EngineResult = serde_json::from_str(&body)?;
        Ok(result)
    }

    fn name(&self) -> &str {
        "http-workflow-engine"
    }
}
