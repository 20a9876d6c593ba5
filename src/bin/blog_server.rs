//! Blog generation REST API server
//!
//! Bridges the HTML/JS frontend to the workflow engine and the markdown
//! artifact store.
//!
//! ## Usage
//!
//! ```bash
//! # Start the server (engine endpoint from BLOG_ENGINE_URL)
//! BLOG_ENGINE_URL=http://127.0.0.1:2024/invoke cargo run --bin blog_server
//!
//! # Generate an article
//! curl -X POST http://localhost:8000/api/generate \
//!   -H "Content-Type: application/json" \
//!   -d '{"topic": "Async Rust in practice"}'
//!
//! curl http://localhost:8000/api/blogs
//! curl http://localhost:8000/api/blogs/async_rust_in_practice.md
//! ```

use std::sync::Arc;

use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use blogsmith::api::{create_blog_router, AppState};
use blogsmith::config::ServerConfig;
use blogsmith::engine::HttpWorkflowEngine;
use blogsmith::store::ArtifactStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before anything reads them
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "blogsmith=info,tower_http=debug".to_string()),
        )
        .init();

    let config = ServerConfig::from_env();
    info!(engine_url = %config.engine_url, "Using workflow engine");

    let state = AppState {
        engine: Arc::new(HttpWorkflowEngine::new(&config.engine_url)),
        store: Arc::new(ArtifactStore::new(&config.artifacts_dir)),
        frontend_dir: config.frontend_dir.clone(),
    };

    let app = create_blog_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
    );

    info!("Starting blog server on http://{}", config.bind_addr);
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
