//! Error types for the sort API.
//!
//! [`ApiError`] unifies every request-level failure into a single enum
//! that converts into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation. None of
//! them are fatal to the process.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sortviz_core::CoreError;

/// Errors that can occur while handling an API request.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body could not be decoded.
    #[error("{0}")]
    InvalidRequest(String),

    /// `POST /api/sort` was sent an empty array.
    #[error("Array cannot be empty")]
    EmptyArray,

    /// `POST /api/sort` was sent more elements than the server accepts.
    #[error("Array length {len} exceeds the maximum of {max}")]
    ArrayTooLong {
        /// Length of the submitted array.
        len: usize,
        /// Configured maximum.
        max: usize,
    },

    /// The worst-case trace for the submitted array exceeds the cell budget.
    #[error("Array length {len} would record up to {cells} trace cells, above the limit of {max}")]
    TraceTooLarge {
        /// Length of the submitted array.
        len: usize,
        /// Worst-case cells the trace could hold.
        cells: usize,
        /// Configured budget.
        max: usize,
    },

    /// The core rejected the request (strict algorithm selection).
    #[error("{source}")]
    Core {
        /// The underlying core error.
        #[from]
        source: CoreError,
    },
}

impl ApiError {
    /// HTTP status for this error.
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_)
            | Self::EmptyArray
            | Self::ArrayTooLong { .. }
            | Self::TraceTooLarge { .. }
            | Self::Core { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
