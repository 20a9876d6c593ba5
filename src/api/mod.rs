//! REST API module
//!
//! HTTP routes in front of the workflow engine and the artifact store.

pub mod blog_routes;

pub use blog_routes::{create_blog_router, AppState};
