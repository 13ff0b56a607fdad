//! HTTP API server for the sortviz teaching tool.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **`POST /api/sort`** -- runs the step recorder over the submitted
//!   array and returns the full trace
//! - **`GET /api/generate`** -- deterministic demo arrays
//! - **`GET /api/algorithms`** -- the supported algorithm set
//! - **Static front end** -- the visualization build (`frontend/out` or
//!   `frontend/dist`), or a placeholder page when none is built
//!
//! # Architecture
//!
//! The server holds no mutable state. Each request decodes its body, calls
//! into `sortviz-core`, and serializes the result. CORS is permissive so a
//! front-end dev server on another origin can call the API.

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use error::ApiError;
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::AppState;
