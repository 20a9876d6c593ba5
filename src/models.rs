//! API record types
//!
//! Request and response shapes for the REST surface, plus the typed
//! Plan/Task/Evidence records produced by result extraction. Plan and
//! evidence records are immutable once extracted from an engine result.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Request Types
// ============================================================================

/// Body of `POST /api/generate`. Ephemeral, one per call.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    pub topic: String,
    /// ISO calendar date; defaults to the current date when absent or blank.
    pub as_of: Option<String>,
}

// ============================================================================
// Plan / Evidence Records
// ============================================================================

/// One unit of work within a plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub goal: String,
    pub target_words: i64,
    pub requires_research: bool,
    pub requires_citations: bool,
    pub requires_code: bool,
    pub tags: Vec<String>,
    pub bullets: Vec<String>,
}

/// The engine's article plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub blog_title: String,
    pub audience: String,
    pub tone: String,
    pub blog_kind: String,
    pub constraints: Vec<String>,
    pub tasks: Vec<Task>,
}

/// One piece of supporting evidence gathered during research.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceItem {
    pub title: String,
    pub url: String,
    pub published_at: Option<String>,
    pub snippet: Option<String>,
    pub source: Option<String>,
}

// ============================================================================
// Response Types
// ============================================================================

/// Response of `POST /api/generate`. Always returned with HTTP 200;
/// failure is carried in `success`/`error`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponse {
    pub success: bool,
    pub plan: Option<Plan>,
    pub evidence: Vec<EvidenceItem>,
    pub final_markdown: String,
    pub image_specs: Vec<Value>,
    pub mode: String,
    pub error: Option<String>,
}

impl GenerateResponse {
    /// Structured failure response carrying the engine's message verbatim.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            plan: None,
            evidence: Vec::new(),
            final_markdown: String::new(),
            image_specs: Vec::new(),
            mode: String::new(),
            error: Some(error.into()),
        }
    }
}

/// One entry of `GET /api/blogs`. Title and timestamp are derived on read,
/// never stored as metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogSummary {
    pub filename: String,
    pub title: String,
    pub modified_at: DateTime<Utc>,
}

/// Response of `GET /api/blogs/:filename`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogContent {
    pub filename: String,
    pub content: String,
}

/// Short detail body for read-path HTTP errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Generic success envelope used by utility endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}
