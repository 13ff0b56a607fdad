//! Algorithm selection and dispatch.
//!
//! Requests name an algorithm with a free-form string. [`resolve_algorithm`]
//! turns that into an [`Algorithm`] variant, and [`run`] is the one place
//! that maps a variant to its implementation.

use sortviz_types::{Algorithm, RunResult};
use tracing::warn;

use crate::bubble::{self, bubble_sort};
use crate::error::CoreError;

/// Run `algorithm` over a copy of `input` and return its step trace.
pub fn run(algorithm: Algorithm, input: &[i64]) -> RunResult {
    match algorithm {
        Algorithm::Bubble => bubble_sort(input),
    }
}

/// Upper bound on the array cells a trace of `len` elements holds.
///
/// Every step stores a full copy of the array, so this is the worst-case
/// step count times `len`. Callers use it to refuse inputs whose trace
/// would not fit in memory before any work is done.
pub const fn worst_case_trace_cells(algorithm: Algorithm, len: usize) -> usize {
    let steps = match algorithm {
        Algorithm::Bubble => bubble::worst_case_steps(len),
    };
    steps.saturating_mul(len)
}

/// Resolve a requested algorithm name.
///
/// A missing or blank name selects [`Algorithm::default`]. An unrecognized
/// name also falls back to the default unless `strict` is set, in which
/// case it is rejected.
///
/// # Errors
///
/// Returns [`CoreError::UnknownAlgorithm`] for an unrecognized name when
/// `strict` is `true`.
pub fn resolve_algorithm(name: Option<&str>, strict: bool) -> Result<Algorithm, CoreError> {
    let Some(name) = name.filter(|n| !n.trim().is_empty()) else {
        return Ok(Algorithm::default());
    };

    match Algorithm::from_name(name) {
        Some(algorithm) => Ok(algorithm),
        None if strict => Err(CoreError::UnknownAlgorithm {
            name: name.to_owned(),
        }),
        None => {
            let fallback = Algorithm::default();
            warn!(
                requested = name,
                fallback = fallback.key(),
                "Unknown algorithm requested, falling back"
            );
            Ok(fallback)
        }
    }
}
