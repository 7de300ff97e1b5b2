//! Drag coefficient formulations.
//!
//! The default is the five-domain table of Trenberth, Large & Olson (1990),
//! built on Large & Pond (1981) with a low-wind extension:
//!
//! | \|U\| (m/s)   | C_d                                        |
//! |---------------|--------------------------------------------|
//! | ≤ 1           | 2.18×10⁻³                                  |
//! | (1, 3]        | (0.62 + 1.56/\|U\|) × 10⁻³                 |
//! | (3, 10]       | 1.14×10⁻³                                  |
//! | (10, 19]      | (0.49 + 0.065\|U\|) × 10⁻³                 |
//! | > 19          | (1.364 + 0.0234\|U\| − 0.0002\|U\|²) × 10⁻³ |
//!
//! Calm air (|U| = 0) falls in the first domain, so `1.56/|U|` is never
//! evaluated at zero.

/// Drag coefficient formulation for wind stress.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum DragCoefficient {
    /// Trenberth, Large & Olson (1990) piecewise table.
    #[default]
    TrenberthLargeOlson,

    /// Constant drag coefficient.
    ///
    /// Typical values: 1.0-2.0 × 10⁻³
    Constant(f64),

    /// Large & Pond (1981) formulation.
    ///
    /// C_d = 1.2×10⁻³ for |U| ≤ 11 m/s
    /// C_d = (0.49 + 0.065×|U|) × 10⁻³ for |U| > 11 m/s
    LargePond,

    /// Wu (1982): C_d = (0.8 + 0.065×|U|) × 10⁻³
    Wu,

    /// Smith (1988): C_d = (0.61 + 0.063×|U|) × 10⁻³
    Smith,

    /// Yelland & Taylor (1996) for open ocean.
    ///
    /// C_d = 1.1×10⁻³ for |U| ≤ 6 m/s
    /// C_d = (0.50 + 0.071×|U|) × 10⁻³ for |U| > 6 m/s
    YellandTaylor,
}

impl DragCoefficient {
    /// Compute drag coefficient for given wind speed.
    ///
    /// A NaN wind speed yields a NaN coefficient for every speed-dependent
    /// formulation.
    ///
    /// # Arguments
    /// * `wind_speed` - Wind speed magnitude (m/s)
    #[inline]
    pub fn compute(&self, wind_speed: f64) -> f64 {
        match self {
            DragCoefficient::TrenberthLargeOlson => trenberth_large_olson(wind_speed),

            DragCoefficient::Constant(cd) => *cd,

            DragCoefficient::LargePond => {
                if wind_speed <= 11.0 {
                    1.2e-3
                } else {
                    (0.49 + 0.065 * wind_speed) * 1e-3
                }
            }

            DragCoefficient::Wu => (0.8 + 0.065 * wind_speed) * 1e-3,

            DragCoefficient::Smith => (0.61 + 0.063 * wind_speed) * 1e-3,

            DragCoefficient::YellandTaylor => {
                if wind_speed <= 6.0 {
                    1.1e-3
                } else {
                    (0.50 + 0.071 * wind_speed) * 1e-3
                }
            }
        }
    }
}

fn trenberth_large_olson(s: f64) -> f64 {
    if s <= 1.0 {
        0.00218
    } else if s <= 3.0 {
        (0.62 + 1.56 / s) * 0.001
    } else if s <= 10.0 {
        0.00114
    } else if s <= 19.0 {
        (0.49 + 0.065 * s) * 0.001
    } else if s > 19.0 {
        (1.364 + 0.0234 * s - 0.0002 * (s * s)) * 0.001
    } else {
        // NaN matches no domain.
        f64::NAN
    }
}
