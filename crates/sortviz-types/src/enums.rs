//! Enumeration types for the sort trace API.
//!
//! The set of supported sorting algorithms is closed: adding an algorithm
//! means adding a variant here and a dispatch arm in `sortviz-core`.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Algorithm
// ---------------------------------------------------------------------------

/// A sorting algorithm that the step recorder can trace.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum Algorithm {
    /// Bubble sort with early exit once a pass makes no swaps.
    #[default]
    Bubble,
}

impl Algorithm {
    /// Every supported algorithm, in display order.
    pub const ALL: &'static [Self] = &[Self::Bubble];

    /// Human-readable name, used as `RunResult::algorithm`.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Bubble => "Bubble Sort",
        }
    }

    /// Short machine key accepted in `SortRequest::algorithm`.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
        }
    }

    /// Look up an algorithm by name.
    ///
    /// Matching ignores ASCII case and surrounding whitespace, and accepts
    /// the key as well as a few common spellings (`bubble_sort`,
    /// `bubble-sort`, `bubblesort`, `bubble sort`). Returns `None` for
    /// anything unrecognized.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "bubble" | "bubble_sort" | "bubble-sort" | "bubblesort" | "bubble sort" => {
                Some(Self::Bubble)
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(Algorithm::from_name("bubble"), Some(Algorithm::Bubble));
        assert_eq!(Algorithm::from_name("  BUBBLE "), Some(Algorithm::Bubble));
        assert_eq!(Algorithm::from_name("Bubble Sort"), Some(Algorithm::Bubble));
        assert_eq!(Algorithm::from_name("bubble_sort"), Some(Algorithm::Bubble));
    }

    #[test]
    fn from_name_rejects_unknown() {
        assert_eq!(Algorithm::from_name("quick"), None);
        assert_eq!(Algorithm::from_name(""), None);
    }

    #[test]
    fn serializes_as_key() {
        let json = serde_json::to_string(&Algorithm::Bubble).ok();
        assert_eq!(json.as_deref(), Some("\"bubble\""));
        for algorithm in Algorithm::ALL {
            assert_eq!(Algorithm::from_name(algorithm.key()), Some(*algorithm));
        }
    }

    #[test]
    fn display_uses_human_name() {
        assert_eq!(Algorithm::Bubble.to_string(), "Bubble Sort");
    }
}
