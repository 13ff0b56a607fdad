//! Shared type definitions for the sortviz workspace.
//!
//! These are the wire types exchanged between the step recorder, the HTTP
//! facade, and the visualization front end. They flow downstream to
//! `TypeScript` via `ts-rs`.
//!
//! # Modules
//!
//! - [`enums`] -- The closed set of supported algorithms
//! - [`structs`] -- Trace types (`Step`, `RunResult`)
//! - [`api`] -- Request/response bodies for the remaining endpoints

pub mod api;
pub mod enums;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use api::{AlgorithmInfo, GenerateResponse, SortRequest};
pub use enums::Algorithm;
pub use structs::{RunResult, Step};
