//! Error types for wind stress and curl computations.
//!
//! Every precondition is checked before any arithmetic runs, so an error
//! always means "no result", never "partial result".

use thiserror::Error;

/// Errors raised while validating inputs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum WindStressError {
    /// Two grids (or a grid and its coordinate vectors) disagree in shape.
    #[error("Shape mismatch for {what}: expected {expected}, got {actual}")]
    ShapeMismatch {
        what: String,
        expected: String,
        actual: String,
    },

    /// An input has the wrong number of dimensions.
    #[error("Dimension error for {what}: expected {expected}-D, got {actual}-D")]
    Dimension {
        what: String,
        expected: usize,
        actual: usize,
    },

    /// Latitude steps are not all equal to the first step.
    #[error("Latitude spacing is not uniform: step {index} is {step}, expected {expected}")]
    NonUniformGrid {
        index: usize,
        step: f64,
        expected: f64,
    },

    /// Grid is too small for the boundary stencils.
    #[error("Grid too small: need at least 3x3, got {rows}x{cols}")]
    GridTooSmall { rows: usize, cols: usize },

    /// Coordinate value rejected by strict validation.
    #[error("Invalid coordinate in {what} at index {index}: {value}")]
    InvalidCoordinate {
        what: String,
        index: usize,
        value: f64,
    },
}

impl WindStressError {
    /// Create a shape mismatch error from two 2D shapes.
    pub fn shape_mismatch(
        what: impl Into<String>,
        expected: (usize, usize),
        actual: (usize, usize),
    ) -> Self {
        Self::ShapeMismatch {
            what: what.into(),
            expected: format!("({}, {})", expected.0, expected.1),
            actual: format!("({}, {})", actual.0, actual.1),
        }
    }

    /// Create a dimension error.
    pub fn dimension(what: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::Dimension {
            what: what.into(),
            expected,
            actual,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, WindStressError>;
