//! Step recording for traced sorts.
//!
//! [`StepRecorder`] owns a private copy of the input sequence and appends
//! one [`Step`] per observable event. Algorithms drive it through
//! [`compare`](StepRecorder::compare), [`swap`](StepRecorder::swap), and
//! [`emit`](StepRecorder::emit); the recorder keeps the counters, the
//! finalized-index set, and step numbering consistent on their behalf.

use std::cmp::Ordering;

use sortviz_types::{Algorithm, RunResult, Step};

/// The single annotation a step may carry.
///
/// A step highlights a comparison, a swap, or nothing, so a step can
/// never mark both at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    /// Bookkeeping step with no highlighted indices.
    None,
    /// Two indices being compared.
    Comparing(usize, usize),
    /// Two indices that were just swapped.
    Swapped(usize, usize),
}

impl Highlight {
    fn into_lists(self) -> (Vec<usize>, Vec<usize>) {
        match self {
            Self::None => (Vec::new(), Vec::new()),
            Self::Comparing(a, b) => (vec![a, b], Vec::new()),
            Self::Swapped(a, b) => (Vec::new(), vec![a, b]),
        }
    }
}

/// Accumulates the step trace of one sort run.
#[derive(Debug, Clone)]
pub struct StepRecorder {
    array: Vec<i64>,
    finalized: Vec<bool>,
    steps: Vec<Step>,
    comparisons: usize,
    swaps: usize,
}

impl StepRecorder {
    /// Start a recording over a copy of `input`.
    pub fn new(input: &[i64]) -> Self {
        Self {
            array: input.to_vec(),
            finalized: vec![false; input.len()],
            steps: Vec::new(),
            comparisons: 0,
            swaps: 0,
        }
    }

    /// Number of elements being sorted.
    pub fn len(&self) -> usize {
        self.array.len()
    }

    /// Whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    /// Current state of the working array.
    pub fn array(&self) -> &[i64] {
        &self.array
    }

    /// Steps recorded so far.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Indices currently marked as final, ascending.
    pub fn sorted_indices(&self) -> Vec<usize> {
        self.finalized
            .iter()
            .enumerate()
            .filter_map(|(index, &done)| done.then_some(index))
            .collect()
    }

    /// Append a step snapshotting the current array and sorted set.
    pub fn emit(&mut self, highlight: Highlight, message: impl Into<String>) {
        let (comparing, swapped) = highlight.into_lists();
        let step = Step {
            array: self.array.clone(),
            comparing,
            swapped,
            sorted: self.sorted_indices(),
            step_number: self.steps.len(),
            message: message.into(),
        };
        self.steps.push(step);
    }

    /// Compare the elements at `a` and `b`, counting and recording it.
    ///
    /// Returns how `array[a]` orders against `array[b]`, or `None` without
    /// recording anything if either index is out of range.
    pub fn compare(&mut self, a: usize, b: usize) -> Option<Ordering> {
        let left = self.array.get(a).copied()?;
        let right = self.array.get(b).copied()?;

        self.comparisons = self.comparisons.saturating_add(1);
        self.emit(
            Highlight::Comparing(a, b),
            format!("Comparing {left} and {right}"),
        );

        Some(left.cmp(&right))
    }

    /// Swap the elements at `a` and `b`, counting and recording it.
    ///
    /// Returns `false` without recording anything if either index is out
    /// of range.
    pub fn swap(&mut self, a: usize, b: usize) -> bool {
        let len = self.array.len();
        if a >= len || b >= len {
            return false;
        }

        self.array.swap(a, b);
        self.swaps = self.swaps.saturating_add(1);
        self.emit(
            Highlight::Swapped(a, b),
            format!("Swapped positions {a} and {b}"),
        );
        true
    }

    /// Mark `index` as being in its final position.
    pub fn mark_sorted(&mut self, index: usize) {
        if let Some(slot) = self.finalized.get_mut(index) {
            *slot = true;
        }
    }

    /// Mark every index as being in its final position.
    pub fn mark_all_sorted(&mut self) {
        self.finalized.fill(true);
    }

    /// Consume the recorder and package the trace.
    ///
    /// The duration is left unset; the caller stamps it if it measured one.
    pub fn finish(self, algorithm: Algorithm) -> RunResult {
        RunResult {
            steps: self.steps,
            algorithm: algorithm.display_name().to_owned(),
            duration: None,
            comparisons: self.comparisons,
            swaps: self.swaps,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn recorder_copies_input() {
        let input = vec![3, 1, 2];
        let mut recorder = StepRecorder::new(&input);
        recorder.swap(0, 1);
        assert_eq!(recorder.array(), &[1, 3, 2]);
        assert_eq!(input, vec![3, 1, 2]);
    }

    #[test]
    fn step_numbers_follow_trace_length() {
        let mut recorder = StepRecorder::new(&[1, 2]);
        recorder.emit(Highlight::None, "a");
        recorder.emit(Highlight::None, "b");
        recorder.emit(Highlight::None, "c");
        let numbers: Vec<usize> = recorder.steps().iter().map(|s| s.step_number).collect();
        assert_eq!(numbers, vec![0, 1, 2]);
    }

    #[test]
    fn compare_records_values_and_counts() {
        let mut recorder = StepRecorder::new(&[9, 4]);
        assert_eq!(recorder.compare(0, 1), Some(Ordering::Greater));

        let step = &recorder.steps()[0];
        assert_eq!(step.comparing, vec![0, 1]);
        assert!(step.swapped.is_empty());
        assert_eq!(step.message, "Comparing 9 and 4");

        let result = recorder.finish(Algorithm::Bubble);
        assert_eq!(result.comparisons, 1);
        assert_eq!(result.swaps, 0);
    }

    #[test]
    fn swap_records_positions_and_counts() {
        let mut recorder = StepRecorder::new(&[9, 4]);
        assert!(recorder.swap(0, 1));

        let step = &recorder.steps()[0];
        assert_eq!(step.array, vec![4, 9]);
        assert_eq!(step.swapped, vec![0, 1]);
        assert!(step.comparing.is_empty());
        assert_eq!(step.message, "Swapped positions 0 and 1");
        assert_eq!(recorder.finish(Algorithm::Bubble).swaps, 1);
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut recorder = StepRecorder::new(&[1]);
        assert_eq!(recorder.compare(0, 1), None);
        assert!(!recorder.swap(0, 5));
        recorder.mark_sorted(7);
        assert!(recorder.steps().is_empty());
        assert!(recorder.sorted_indices().is_empty());
    }

    #[test]
    fn sorted_indices_are_ascending() {
        let mut recorder = StepRecorder::new(&[5, 6, 7, 8]);
        recorder.mark_sorted(3);
        recorder.mark_sorted(1);
        assert_eq!(recorder.sorted_indices(), vec![1, 3]);
        recorder.mark_all_sorted();
        assert_eq!(recorder.sorted_indices(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn finish_uses_display_name() {
        let result = StepRecorder::new(&[]).finish(Algorithm::Bubble);
        assert_eq!(result.algorithm, "Bubble Sort");
        assert!(result.duration.is_none());
    }
}
