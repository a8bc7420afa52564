//! Error types for growpack.

use thiserror::Error;

/// Result type alias for growpack operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during packing operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Item extent with a zero or negative dimension.
    #[error("invalid item size {width}x{height}: dimensions must be at least 1 grid unit")]
    InvalidItemSize {
        /// Requested width in grid units.
        width: i32,
        /// Requested height in grid units.
        height: i32,
    },

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}
