//! Blog API routes
//!
//! Routes:
//! - POST /api/generate        - Run the workflow engine, persist the article
//! - GET  /api/blogs           - List saved articles, newest first
//! - GET  /api/blogs/:filename - Fetch one article's content
//! - GET  /api/health          - Liveness check
//! - GET  /                    - Static frontend, with a plain fallback

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;
use tracing::{error, info, warn};

use crate::engine::{WorkflowEngine, WorkflowState};
use crate::error::StoreError;
use crate::extract;
use crate::models::{
    ApiResponse, BlogContent, BlogSummary, ErrorBody, GenerateRequest, GenerateResponse,
};
use crate::slug::slug;
use crate::store::ArtifactStore;

// ============================================================================
// State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<dyn WorkflowEngine>,
    pub store: Arc<ArtifactStore>,
    pub frontend_dir: PathBuf,
}

// ============================================================================
// Router
// ============================================================================

pub fn create_blog_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/", get(serve_frontend))
        .route("/api/health", get(health_check))
        .route("/api/generate", post(generate_blog))
        .route("/api/blogs", get(list_blogs))
        .route("/api/blogs/:filename", get(get_blog));

    if state.frontend_dir.is_dir() {
        router = router.nest_service("/static", ServeDir::new(&state.frontend_dir));
    }

    router.with_state(state)
}

// ============================================================================
// Handlers
// ============================================================================

/// GET / - serve the frontend index, or a plain notice when absent.
async fn serve_frontend(State(state): State<AppState>) -> Response {
    let index = state.frontend_dir.join("index.html");
    match tokio::fs::read_to_string(&index).await {
        Ok(page) => Html(page).into_response(),
        Err(_) => Html("<h1>Frontend not found</h1>".to_string()).into_response(),
    }
}

/// GET /api/health
async fn health_check() -> Json<ApiResponse<String>> {
    Json(ApiResponse {
        success: true,
        data: Some("OK".to_string()),
        error: None,
    })
}

/// POST /api/generate - run the full pipeline for one topic.
///
/// Always answers HTTP 200: any failure along
/// normalize -> invoke -> extract -> persist is absorbed into a
/// `success=false` response with the failure message in `error`.
async fn generate_blog(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Json<GenerateResponse> {
    let inputs = WorkflowState::canonical(&request);
    info!(topic = %inputs.topic, engine = state.engine.name(), "Generating blog");

    let result = match state.engine.invoke(inputs).await {
        Ok(result) => result,
        Err(err) => {
            warn!("Workflow engine invocation failed: {err}");
            return Json(GenerateResponse::failure(err.to_string()));
        }
    };

    let plan = result.plan.as_ref().map(extract::extract_plan);
    let evidence = extract::extract_evidence(&result.evidence);
    let final_markdown = extract::select_final_text(&result.final_text, &result.merged_md);

    if let Some(plan) = &plan {
        if !final_markdown.is_empty() {
            let filename = format!("{}.md", slug(&plan.blog_title));
            if let Err(err) = state.store.persist(&filename, &final_markdown) {
                warn!(%filename, "Failed to persist generated blog: {err}");
                return Json(GenerateResponse::failure(err.to_string()));
            }
            info!(%filename, "Persisted generated blog");
        }
    }

    Json(GenerateResponse {
        success: true,
        plan,
        evidence,
        final_markdown,
        image_specs: result.image_specs,
        mode: result.mode,
        error: None,
    })
}

/// GET /api/blogs - list saved articles, newest first.
async fn list_blogs(
    State(state): State<AppState>,
) -> Result<Json<Vec<BlogSummary>>, StatusCode> {
    match state.store.list() {
        Ok(blogs) => Ok(Json(blogs)),
        Err(err) => {
            error!("Failed to list blogs: {err}");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/blogs/:filename - fetch one article's content.
async fn get_blog(
    Path(filename): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<BlogContent>, (StatusCode, Json<ErrorBody>)> {
    match state.store.get(&filename) {
        Ok(content) => Ok(Json(BlogContent { filename, content })),
        Err(err) => {
            let status = match err {
                StoreError::InvalidFilename(_) => StatusCode::BAD_REQUEST,
                StoreError::NotFound(_) => StatusCode::NOT_FOUND,
                StoreError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            Err((
                status,
                Json(ErrorBody {
                    error: err.to_string(),
                }),
            ))
        }
    }
}
