//! Workflow engine boundary
//!
//! The engine is an external collaborator that turns a topic into a plan,
//! evidence, and final article text through its own multi-stage pipeline.
//! This module owns the state bag exchanged with it, the tolerant result
//! payload types, and the trait that isolates the rest of the system from
//! how the engine is reached.

pub mod remote;
pub mod result;
pub mod state;

pub use remote::HttpWorkflowEngine;
pub use result::{EngineResult, EvidencePayload, PlanPayload};
pub use state::WorkflowState;

use async_trait::async_trait;

use crate::error::EngineError;

/// External collaborator boundary for the generation engine.
///
/// `invoke` is the single blocking point in the request path: it may run
/// arbitrarily long and no timeout or cancellation is imposed here. Callers
/// must absorb any failure into a structured response rather than let it
/// escape as a transport-level error.
#[async_trait]
pub trait WorkflowEngine: Send + Sync {
    /// Run the full generation pipeline over one canonical state.
    async fn invoke(&self, state: WorkflowState) -> Result<EngineResult, EngineError>;

    /// Engine name for logging.
    fn name(&self) -> &str;
}
