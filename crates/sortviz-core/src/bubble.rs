//! Traced bubble sort.
//!
//! Each outer pass bubbles the largest remaining element to the end of the
//! unsorted prefix. A pass that makes no swaps proves the prefix is already
//! ordered, so the run stops early.

use std::cmp::Ordering;

use sortviz_types::{Algorithm, RunResult};

use crate::recorder::{Highlight, StepRecorder};

/// Sort a copy of `input` with bubble sort, recording every comparison and
/// swap.
///
/// Equal neighbours are never swapped. The final step always has every
/// index marked sorted and the array in ascending order.
pub fn bubble_sort(input: &[i64]) -> RunResult {
    let mut recorder = StepRecorder::new(input);
    let n = recorder.len();

    recorder.emit(Highlight::None, "Starting Bubble Sort");

    for pass in 0..n.saturating_sub(1) {
        // Indices at or past `boundary` already hold their final values.
        let boundary = n.saturating_sub(pass).saturating_sub(1);
        let mut swapped_this_pass = false;

        for j in 0..boundary {
            let next = j.saturating_add(1);
            if recorder.compare(j, next) == Some(Ordering::Greater) {
                swapped_this_pass |= recorder.swap(j, next);
            }
        }

        recorder.mark_sorted(boundary);

        if !swapped_this_pass {
            recorder.emit(Highlight::None, "Array is sorted!");
            break;
        }
    }

    recorder.mark_all_sorted();
    recorder.emit(Highlight::None, "Sorting complete!");

    let result = recorder.finish(Algorithm::Bubble);
    tracing::debug!(
        len = n,
        steps = result.steps.len(),
        comparisons = result.comparisons,
        swaps = result.swaps,
        "Bubble sort recorded"
    );
    result
}

/// Upper bound on the number of steps [`bubble_sort`] records for `len`
/// elements.
///
/// At most `len * (len - 1) / 2` comparisons and as many swaps, plus the
/// start, early-exit, and completion steps.
pub const fn worst_case_steps(len: usize) -> usize {
    len.saturating_mul(len.saturating_sub(1)).saturating_add(3)
}
