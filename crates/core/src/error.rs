//! Error types - configuration and blob decoding failures

use thiserror::Error;

/// Result type for fallible playfield operations.
pub type Result<T> = std::result::Result<T, GridError>;

/// Errors from configuration and blob decoding.
///
/// Geometric rejections (blocked moves, out-of-bounds rotations) are never
/// errors; those come back as `None`.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("grid dimensions must be non-zero, got {width}x{height}")]
    InvalidDimensions { width: u16, height: u16 },
    #[error("grid blob is malformed: {0}")]
    Blob(#[from] serde_json::Error),
    #[error("grid blob is {width}x{height}, expected {expected_width}x{expected_height}")]
    ShapeMismatch {
        expected_width: u16,
        expected_height: u16,
        width: usize,
        height: usize,
    },
    #[error("cell stored at ({x}, {y}) claims coordinate ({claimed_x}, {claimed_y})")]
    CoordinateMismatch {
        x: usize,
        y: usize,
        claimed_x: i32,
        claimed_y: i32,
    },
}
