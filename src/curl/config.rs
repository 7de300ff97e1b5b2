//! Configuration for the wind stress curl operator.

use crate::types::{METERS_PER_DEGREE, ValidationMode};

/// Treatment of the meridional term on the last column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RightColumnScaling {
    /// `ΔTx` is used as is, without dividing by `dy`.
    #[default]
    Unscaled,
    /// `ΔTx / dy`, consistent with every other stencil.
    ScaledByDy,
}

/// Zonal span of the stencil on the last row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BottomRowSpan {
    /// Backward difference over `j-1, j`.
    ///
    /// The default; curl fields already produced by this tool were
    /// computed with it.
    #[default]
    Local,
    /// Central-like difference over `j-1, j+1`, with the same `2·Δx`
    /// divisor as the interior stencil.
    Wide,
}

/// Curl operator settings.
///
/// # Example
///
/// ```
/// use windstress::curl::{BottomRowSpan, CurlConfig, RightColumnScaling};
/// use windstress::types::{ValidationMode, METERS_PER_DEGREE_WGS84};
///
/// let config = CurlConfig::default()
///     .with_meters_per_degree(METERS_PER_DEGREE_WGS84)
///     .with_right_column(RightColumnScaling::ScaledByDy)
///     .with_bottom_row(BottomRowSpan::Wide)
///     .with_validation(ValidationMode::Strict);
/// assert_eq!(config.bottom_row, BottomRowSpan::Wide);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurlConfig {
    /// Meters per degree, used for both `dx` and `dy`
    pub meters_per_degree: f64,
    /// Last-column meridional term
    pub right_column: RightColumnScaling,
    /// Last-row zonal span
    pub bottom_row: BottomRowSpan,
    /// Coordinate validation strictness
    pub validation: ValidationMode,
}

impl Default for CurlConfig {
    fn default() -> Self {
        Self {
            meters_per_degree: METERS_PER_DEGREE,
            right_column: RightColumnScaling::default(),
            bottom_row: BottomRowSpan::default(),
            validation: ValidationMode::default(),
        }
    }
}

impl CurlConfig {
    /// Set meters per degree (default: 111176).
    pub fn with_meters_per_degree(mut self, meters_per_degree: f64) -> Self {
        self.meters_per_degree = meters_per_degree;
        self
    }

    /// Set last-column scaling.
    pub fn with_right_column(mut self, right_column: RightColumnScaling) -> Self {
        self.right_column = right_column;
        self
    }

    /// Set last-row zonal span.
    pub fn with_bottom_row(mut self, bottom_row: BottomRowSpan) -> Self {
        self.bottom_row = bottom_row;
        self
    }

    /// Set validation mode.
    pub fn with_validation(mut self, validation: ValidationMode) -> Self {
        self.validation = validation;
        self
    }

    /// Shorthand for `with_validation(ValidationMode::Strict)`.
    pub fn strict(self) -> Self {
        self.with_validation(ValidationMode::Strict)
    }
}
