//! Shared application state for the sort API.
//!
//! [`AppState`] carries only settings fixed at startup. Handlers never
//! mutate it, so it is shared behind an [`Arc`](std::sync::Arc) without a
//! lock.

use std::path::{Path, PathBuf};

use sortviz_core::config::{GeneratorConfig, SortvizConfig};

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`](std::sync::Arc) and injected via Axum's `State`
/// extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Reject unknown algorithm names instead of falling back.
    pub strict_algorithm: bool,
    /// Longest array accepted by `POST /api/sort`.
    pub max_array_len: usize,
    /// Largest worst-case trace, in array cells, `POST /api/sort` will
    /// record.
    pub max_trace_cells: usize,
    /// Bounds for `GET /api/generate`.
    pub generator: GeneratorConfig,
    /// Front-end build directory served at `/`, if one was found.
    pub static_dir: Option<PathBuf>,
}

impl AppState {
    /// Build state from configuration.
    ///
    /// The static directory is the first entry of `server.static_dirs`
    /// that exists on disk. When none exists the server falls back to a
    /// built-in placeholder page.
    pub fn from_config(config: &SortvizConfig) -> Self {
        Self {
            strict_algorithm: config.sort.strict_algorithm,
            max_array_len: config.server.max_array_len,
            max_trace_cells: config.server.max_trace_cells,
            generator: config.generator.clone(),
            static_dir: find_static_dir(&config.server.static_dirs),
        }
    }

    /// Serve front-end assets from `dir` instead of the discovered one.
    #[must_use]
    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }

    /// Create state from default configuration.
    pub fn new() -> Self {
        Self::from_config(&SortvizConfig::default())
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

fn find_static_dir(candidates: &[String]) -> Option<PathBuf> {
    candidates
        .iter()
        .map(Path::new)
        .find(|path| path.is_dir())
        .map(Path::to_path_buf)
}
