//! Error types for rsr operations.
//!
//! Most of the rsr API cannot fail: vector, matrix and color arithmetic is
//! total over `f32`, and misuse such as indexing a matrix row outside
//! `[0, 3]` panics. The [`Error`] enum covers the *checked* variants of
//! those operations, which report the problem to the caller instead.
//!
//! # Usage
//!
//! ```rust
//! use rsr_core::{Error, Result};
//!
//! fn row(index: usize) -> Result<usize> {
//!     if index > 3 {
//!         return Err(Error::index_out_of_range("x", index, 3));
//!     }
//!     Ok(index)
//! }
//!
//! assert!(row(4).unwrap_err().is_index_error());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - `rsr-math` - `Matrix4f::try_get`, `try_normalize`, slice conversions
//! - `rsr-color` - slice conversions

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the checked rsr operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An index was outside `[0, max]` on the named axis.
    ///
    /// Matrices name their row axis `x` and their column axis `y`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rsr_core::Error;
    ///
    /// let err = Error::index_out_of_range("x", 7, 3);
    /// assert!(err.to_string().contains("got 7"));
    /// ```
    #[error("invalid argument {axis}: expected in [0, {max}], got {index}")]
    IndexOutOfRange {
        /// Axis name
        axis: &'static str,
        /// Offending index
        index: usize,
        /// Largest valid index
        max: usize,
    },

    /// A vector with zero length cannot be normalized.
    #[error("cannot normalize a zero-length vector")]
    ZeroLength,

    /// A slice had the wrong number of components for the target type.
    #[error("component count mismatch: expected {expected}, got {got}")]
    ComponentCount {
        /// Components required
        expected: usize,
        /// Components supplied
        got: usize,
    },
}

impl Error {
    /// Creates an [`Error::IndexOutOfRange`] error.
    #[inline]
    pub fn index_out_of_range(axis: &'static str, index: usize, max: usize) -> Self {
        Self::IndexOutOfRange { axis, index, max }
    }

    /// Creates an [`Error::ComponentCount`] error.
    #[inline]
    pub fn component_count(expected: usize, got: usize) -> Self {
        Self::ComponentCount { expected, got }
    }

    /// Returns `true` if this is an indexing error.
    #[inline]
    pub fn is_index_error(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }

    /// Returns `true` if this error came from a degenerate vector.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::ZeroLength)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_out_of_range() {
        let err = Error::index_out_of_range("y", 5, 3);
        let msg = err.to_string();
        assert_eq!(msg, "invalid argument y: expected in [0, 3], got 5");
        assert!(err.is_index_error());
        assert!(!err.is_degenerate());
    }

    #[test]
    fn test_zero_length() {
        let err = Error::ZeroLength;
        assert!(err.is_degenerate());
        assert!(err.to_string().contains("zero-length"));
    }

    #[test]
    fn test_component_count() {
        let err = Error::component_count(4, 2);
        let msg = err.to_string();
        assert!(msg.contains("expected 4"));
        assert!(msg.contains("got 2"));
    }
}
