//! Step recorder and algorithm dispatch for the sortviz teaching tool.
//!
//! Everything in this crate is pure and synchronous. A sort run copies its
//! input, records one [`Step`](sortviz_types::Step) per comparison, swap,
//! or milestone, and hands back a self-contained
//! [`RunResult`](sortviz_types::RunResult). Nothing is shared between
//! runs, so callers may invoke it concurrently without coordination.
//!
//! # Modules
//!
//! - [`recorder`] -- Trace accumulation shared by every algorithm
//! - [`bubble`] -- Bubble sort with early exit
//! - [`algorithm`] -- Name resolution and the single dispatch point
//! - [`generator`] -- Deterministic demo arrays
//! - [`config`] -- YAML configuration with environment overrides
//! - [`error`] -- Core error type

pub mod algorithm;
pub mod bubble;
pub mod config;
pub mod error;
pub mod generator;
pub mod recorder;

pub use algorithm::{resolve_algorithm, run, worst_case_trace_cells};
pub use bubble::bubble_sort;
pub use config::{ConfigError, SortvizConfig};
pub use error::CoreError;
pub use generator::{generate_array, resolve_size};
pub use recorder::{Highlight, StepRecorder};
