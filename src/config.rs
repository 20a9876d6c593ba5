//! Server configuration
//!
//! Process-wide configuration is an explicit value constructed once at
//! startup from the environment and passed into the HTTP layer; nothing
//! reads the environment after boot.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Startup configuration for the blog server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,
    /// Directory articles are persisted into.
    pub artifacts_dir: PathBuf,
    /// Directory holding the static frontend, if any.
    pub frontend_dir: PathBuf,
    /// Endpoint of the workflow engine service.
    pub engine_url: String,
}

impl ServerConfig {
    /// Read configuration from the environment, with code defaults for
    /// every value. `dotenvy` is loaded by the binary before this runs.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()
            .unwrap_or(8000);

        let artifacts_dir = std::env::var("BLOG_ARTIFACTS_DIR").unwrap_or_else(|_| ".".to_string());

        let frontend_dir =
            std::env::var("BLOG_FRONTEND_DIR").unwrap_or_else(|_| "frontend".to_string());

        let engine_url = std::env::var("BLOG_ENGINE_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:2024/invoke".to_string());

        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], port)),
            artifacts_dir: PathBuf::from(artifacts_dir),
            frontend_dir: PathBuf::from(frontend_dir),
            engine_url,
        }
    }
}
