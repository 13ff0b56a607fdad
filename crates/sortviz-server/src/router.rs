//! Axum router construction for the sort API.
//!
//! Assembles the API routes and the front-end asset service into a single
//! [`Router`] with CORS middleware enabled for cross-origin front-end
//! development.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the sort server.
///
/// The router includes:
/// - `GET /health` -- liveness probe
/// - `POST /api/sort` -- sort step trace
/// - `GET /api/generate` -- demo array
/// - `GET /api/algorithms` -- supported algorithms
/// - everything else -- files from the front-end build directory, or the
///   placeholder page at `/` when no build exists
///
/// CORS allows any origin, method, and header. Every `OPTIONS` request
/// is answered by the CORS layer with an empty body.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/health", get(handlers::health))
        .route("/api/sort", post(handlers::sort))
        .route("/api/generate", get(handlers::generate))
        .route("/api/algorithms", get(handlers::list_algorithms));

    let app = match &state.static_dir {
        Some(dir) => api.fallback_service(ServeDir::new(dir)),
        None => api.route("/", get(handlers::index)),
    };

    app.layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
