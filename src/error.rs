//! Error types for planekit operations.

use thiserror::Error;

/// Errors returned by the fallible constructors and checked accessors.
///
/// Geometric degeneracy inside the algorithms (collinear input, duplicate
/// points) is never reported here; those cases produce empty or partial
/// results instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeomError {
    /// Points are too close together to define the requested object.
    #[error("degenerate input: points too close together")]
    DegenerateInput,

    /// A bounding box with `min` greater than `max` on some axis.
    #[error("invalid bounds: min ({min_x}, {min_y}) exceeds max ({max_x}, {max_y})")]
    InvalidBounds {
        /// The rejected `min` corner, x coordinate.
        min_x: f64,
        /// The rejected `min` corner, y coordinate.
        min_y: f64,
        /// The rejected `max` corner, x coordinate.
        max_x: f64,
        /// The rejected `max` corner, y coordinate.
        max_y: f64,
    },

    /// An index past the end of a triangle or cell list.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of elements available.
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = GeomError::IndexOutOfRange { index: 7, len: 3 };
        assert_eq!(err.to_string(), "index 7 out of range for length 3");
        assert_eq!(
            GeomError::DegenerateInput.to_string(),
            "degenerate input: points too close together"
        );
    }
}
