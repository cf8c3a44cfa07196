//! Error types for the grid engine.

use thiserror::Error;

/// Errors that can occur while seeding a grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Seed rows do not match the grid's fixed dimensions.
    /// `found_width` is the length of the first row that disagrees
    /// (or of the first row when only the row count is wrong).
    #[error(
        "dimension mismatch: expected {expected_width}x{expected_height}, got {found_width}x{found_height}"
    )]
    DimensionMismatch {
        expected_width: usize,
        expected_height: usize,
        found_width: usize,
        found_height: usize,
    },
}
