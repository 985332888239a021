//! Units of work used by end-to-end scenarios.

use std::num::ParseIntError;

/// Payload of the panic raised when [`parse_int`] receives no input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("input must not be absent")]
pub struct MissingInput;

/// Parse `input` as an `i32`.
///
/// Absent input is a caller mistake rather than a parse failure, so it
/// panics with a [`MissingInput`] payload instead of returning `Err`.
///
/// # Errors
///
/// Returns the [`ParseIntError`] produced by `str::parse`.
///
/// # Panics
///
/// Panics with [`MissingInput`] when `input` is `None`.
pub fn parse_int(input: Option<&str>) -> Result<i32, ParseIntError> {
    input.map_or_else(|| std::panic::panic_any(MissingInput), str::parse::<i32>)
}

/// Parse each whitespace-separated token of `input`.
///
/// # Errors
///
/// Returns the first [`ParseIntError`] encountered.
pub fn parse_all(input: &str) -> Result<Vec<i32>, ParseIntError> {
    input.split_whitespace().map(str::parse).collect()
}
