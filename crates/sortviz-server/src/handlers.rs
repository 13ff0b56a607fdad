//! REST API endpoint handlers for the sort server.
//!
//! Handlers are stateless apart from the read-only [`AppState`]. Each
//! sort request runs the core on its own copy of the submitted array.
//! CORS preflight (`OPTIONS`) is answered by the router's CORS layer and
//! never reaches a handler.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Placeholder page when no front-end build is present |
//! | `GET` | `/health` | Liveness probe |
//! | `POST` | `/api/sort` | Record the step trace of a sort |
//! | `GET` | `/api/generate` | Deterministic demo array (`?size=N`) |
//! | `GET` | `/api/algorithms` | Supported algorithms |

use std::sync::Arc;
use std::time::Instant;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse};
use axum::Json;
use sortviz_types::{Algorithm, AlgorithmInfo, GenerateResponse, RunResult, SortRequest};
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameter structs
// ---------------------------------------------------------------------------

/// Query parameters for the `GET /api/generate` endpoint.
///
/// `size` is kept as raw text so that a malformed value falls back to the
/// default size instead of rejecting the request.
#[derive(Debug, serde::Deserialize)]
pub struct GenerateQuery {
    /// Requested number of elements.
    pub size: Option<String>,
}

// ---------------------------------------------------------------------------
// GET / -- placeholder page
// ---------------------------------------------------------------------------

/// Serve a minimal HTML page when no front-end build directory exists.
pub async fn index() -> impl IntoResponse {
    Html(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Algorithm Visualizer</title>
    <style>
        body {
            background: #0d1117;
            color: #c9d1d9;
            font-family: 'Cascadia Code', 'Fira Code', 'Consolas', monospace;
            padding: 2rem;
            max-width: 800px;
            margin: 0 auto;
        }
        h1 { color: #58a6ff; }
        code { color: #7ee787; }
        ul { list-style: none; padding: 0; }
        li { padding: 0.3rem 0; }
    </style>
</head>
<body>
    <div id="root"></div>
    <h1>Algorithm Visualizer</h1>
    <p>Build the frontend with: <code>npm run build</code></p>
    <ul>
        <li><code>POST /api/sort</code> -- step trace for <code>{"array": [...], "algorithm": "bubble"}</code></li>
        <li><code>GET /api/generate?size=N</code> -- demo array</li>
        <li><code>GET /api/algorithms</code> -- supported algorithms</li>
    </ul>
</body>
</html>"#,
    )
}

// ---------------------------------------------------------------------------
// GET /health
// ---------------------------------------------------------------------------

/// Report that the server is up.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ---------------------------------------------------------------------------
// POST /api/sort -- record a sort trace
// ---------------------------------------------------------------------------

/// Record the step trace of sorting the submitted array.
///
/// The body is `{ "array": [...], "algorithm": "..." }`. The response is
/// the full [`RunResult`] with `duration` set to the time spent recording.
pub async fn sort(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SortRequest>, JsonRejection>,
) -> Result<Json<RunResult>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(error = %rejection, "Rejected malformed sort request");
        ApiError::InvalidRequest(String::from("Invalid request"))
    })?;

    if request.array.is_empty() {
        return Err(ApiError::EmptyArray);
    }
    if request.array.len() > state.max_array_len {
        return Err(ApiError::ArrayTooLong {
            len: request.array.len(),
            max: state.max_array_len,
        });
    }

    let algorithm =
        sortviz_core::resolve_algorithm(request.algorithm.as_deref(), state.strict_algorithm)?;

    let cells = sortviz_core::worst_case_trace_cells(algorithm, request.array.len());
    if cells > state.max_trace_cells {
        return Err(ApiError::TraceTooLarge {
            len: request.array.len(),
            cells,
            max: state.max_trace_cells,
        });
    }

    let started = Instant::now();
    let result = sortviz_core::run(algorithm, &request.array).with_duration(started.elapsed());

    debug!(
        algorithm = algorithm.key(),
        len = request.array.len(),
        steps = result.steps.len(),
        comparisons = result.comparisons,
        swaps = result.swaps,
        "Sort trace recorded"
    );

    Ok(Json(result))
}

// ---------------------------------------------------------------------------
// GET /api/generate -- demo array
// ---------------------------------------------------------------------------

/// Return a deterministic demo array.
///
/// # Query Parameters
///
/// - `size`: element count in `1..=max_size` (default 20; invalid values
///   also yield the default)
pub async fn generate(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GenerateQuery>,
) -> Json<GenerateResponse> {
    let size = sortviz_core::resolve_size(query.size.as_deref(), &state.generator);
    Json(GenerateResponse {
        array: sortviz_core::generate_array(size),
    })
}

// ---------------------------------------------------------------------------
// GET /api/algorithms
// ---------------------------------------------------------------------------

/// List the algorithms the server can trace.
pub async fn list_algorithms() -> impl IntoResponse {
    let algorithms: Vec<AlgorithmInfo> = Algorithm::ALL
        .iter()
        .copied()
        .map(AlgorithmInfo::from)
        .collect();

    Json(serde_json::json!({
        "count": algorithms.len(),
        "algorithms": algorithms,
    }))
}
