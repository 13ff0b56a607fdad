//! Error types for the sortviz core.
//!
//! Sorting itself is total over every finite integer sequence. The only
//! failure a caller can hit is asking for an algorithm by a name that does
//! not exist while strict selection is on.

/// Errors produced by the core crate.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The requested algorithm name matched no supported algorithm.
    #[error("unknown algorithm: {name}")]
    UnknownAlgorithm {
        /// The name as it appeared in the request.
        name: String,
    },
}
