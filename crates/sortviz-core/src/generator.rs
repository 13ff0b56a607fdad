//! Deterministic demo arrays.
//!
//! The output is not random in any statistical sense. It only needs to look
//! varied on screen and be identical across calls, so the front end and
//! the tests can rely on exact values.

use crate::config::GeneratorConfig;

/// Build a demo sequence of `size` values in `0..100`.
///
/// Values start as `(i * 7) % 100` and are then shuffled by a fixed
/// permutation that swaps `i` with `(i * 13) % (i + 1)`, walking down from
/// the last index.
pub fn generate_array(size: usize) -> Vec<i64> {
    let mut array: Vec<i64> = (0..size)
        .map(|i| i64::try_from(i.wrapping_mul(7) % 100).unwrap_or_default())
        .collect();

    for i in (1..size).rev() {
        let j = i
            .wrapping_mul(13)
            .checked_rem(i.saturating_add(1))
            .unwrap_or_default();
        array.swap(i, j);
    }

    array
}

/// Parse a requested size, falling back to the configured default.
///
/// Anything that is missing, not a whole number, zero, or larger than
/// `max_size` counts as invalid and yields `default_size`.
pub fn resolve_size(raw: Option<&str>, config: &GeneratorConfig) -> usize {
    raw.and_then(|s| s.parse::<usize>().ok())
        .filter(|size| (1..=config.max_size).contains(size))
        .unwrap_or(config.default_size)
}
