//! Request and response bodies for the HTTP endpoints that are not
//! themselves a [`RunResult`](crate::RunResult).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::Algorithm;

/// Body of `POST /api/sort`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SortRequest {
    /// The sequence to sort.
    #[ts(type = "Array<number>")]
    pub array: Vec<i64>,
    /// Requested algorithm name. Missing, `null`, or blank selects the
    /// default.
    #[serde(default)]
    #[ts(optional)]
    pub algorithm: Option<String>,
}

/// Body returned by `GET /api/generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct GenerateResponse {
    /// The generated demo sequence.
    #[ts(type = "Array<number>")]
    pub array: Vec<i64>,
}

/// One entry of `GET /api/algorithms`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct AlgorithmInfo {
    /// Machine key to send back in [`SortRequest::algorithm`].
    pub key: String,
    /// Human-readable name.
    pub name: String,
}

impl From<Algorithm> for AlgorithmInfo {
    fn from(algorithm: Algorithm) -> Self {
        Self {
            key: algorithm.key().to_owned(),
            name: algorithm.display_name().to_owned(),
        }
    }
}
