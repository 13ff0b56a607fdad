//! Trace structs produced by the step recorder.
//!
//! A [`RunResult`] is the complete output of one sort invocation: the
//! ordered [`Step`] list plus summary counters. Every step carries a full
//! copy of the array so the front end can render any step on its own.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Step
// ---------------------------------------------------------------------------

/// One recorded, replayable snapshot of algorithm progress.
///
/// At most one of `comparing` and `swapped` is non-empty. Both are empty
/// for the bookkeeping steps (start, early exit, completion).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Step {
    /// The full sequence state at this point in the run.
    #[ts(type = "Array<number>")]
    pub array: Vec<i64>,
    /// The two indices being compared, or empty.
    pub comparing: Vec<usize>,
    /// The two indices just swapped, or empty.
    pub swapped: Vec<usize>,
    /// Indices known to be in their final position, ascending.
    pub sorted: Vec<usize>,
    /// Zero-based position of this step in the trace.
    pub step_number: usize,
    /// Display text describing the event. Never parsed.
    pub message: String,
}

impl Step {
    /// Whether this step highlights a comparison.
    pub fn is_comparison(&self) -> bool {
        !self.comparing.is_empty()
    }

    /// Whether this step highlights a swap.
    pub fn is_swap(&self) -> bool {
        !self.swapped.is_empty()
    }
}

// ---------------------------------------------------------------------------
// RunResult
// ---------------------------------------------------------------------------

/// The full step trace plus summary counters for one sort invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct RunResult {
    /// Ordered trace, starting at step 0.
    pub steps: Vec<Step>,
    /// Display name of the algorithm that produced the trace.
    pub algorithm: String,
    /// Wall-clock time spent producing the trace, when measured.
    #[serde(default)]
    pub duration: Option<String>,
    /// Number of element comparisons performed.
    pub comparisons: usize,
    /// Number of element swaps performed.
    pub swaps: usize,
}

impl RunResult {
    /// The array as it stands in the last recorded step.
    pub fn final_array(&self) -> Option<&[i64]> {
        self.steps.last().map(|step| step.array.as_slice())
    }

    /// Attach a measured duration, replacing any previous value.
    #[must_use]
    pub fn with_duration(mut self, duration: std::time::Duration) -> Self {
        self.duration = Some(format!("{duration:?}"));
        self
    }
}
