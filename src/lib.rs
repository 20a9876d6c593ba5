//! Blogsmith - HTTP bridge for a multi-stage blog generation engine
//!
//! This crate exposes a REST API in front of an external workflow engine
//! that turns a topic into a structured plan, supporting evidence, and a
//! finished article. Generated articles are persisted as markdown files
//! and served back through read-only routes.
//!
//! Request path: normalize the HTTP request into a [`engine::WorkflowState`],
//! invoke the engine, normalize its heterogeneous result into typed records,
//! derive a filesystem-safe slug, and persist the article.

// Core error handling
pub mod error;

// Server configuration, built once at startup
pub mod config;

// API-facing record types
pub mod models;

// Workflow engine boundary: state, result payloads, collaborator trait
pub mod engine;

// Defensive extraction of engine results into typed records
pub mod extract;

// Title -> filesystem-safe stem
pub mod slug;

// Markdown artifact store
pub mod store;

// REST API routes
pub mod api;

pub use error::{EngineError, StoreError};
