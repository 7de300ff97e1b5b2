//! Regular latitude/longitude grid with uniform latitude spacing.
//!
//! The meridional spacing is a single constant `dy`; the zonal spacing is
//! latitude dependent, so the zonal distance coordinate is a full 2D array:
//!
//! ```text
//! dy       = dlat * m
//! dx[i, j] = lon[j] * m * cos(lat[i])
//! ```
//!
//! where `m` is the meters-per-degree factor. Longitudes are scaled as given,
//! not measured as arc length from a reference meridian.

use ndarray::{Array1, Array2, ArrayView1};

use crate::error::{Result, WindStressError};

/// Meters per degree of latitude used for both `dx` and `dy`.
pub const METERS_PER_DEGREE: f64 = 111_176.0;

/// Meters per degree on a sphere with the WGS84 equatorial radius.
pub const METERS_PER_DEGREE_WGS84: f64 = 6_378_137.0 * std::f64::consts::PI / 180.0;

/// Smallest grid the boundary stencils are defined on.
pub const MIN_GRID_SIZE: usize = 3;

const STEP_RTOL: f64 = 1e-5;
const STEP_ATOL: f64 = 1e-8;

/// How strictly coordinates are checked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ValidationMode {
    /// Shape, size and latitude-uniformity checks only.
    #[default]
    Lenient,
    /// Additionally reject non-finite coordinates and latitudes that are not
    /// strictly monotonic.
    Strict,
}

/// Validated latitude/longitude coordinates (degrees).
#[derive(Clone, Debug, PartialEq)]
pub struct LatLonGrid {
    lat: Array1<f64>,
    lon: Array1<f64>,
    dlat: f64,
}

impl LatLonGrid {
    /// Validate coordinates and build a grid.
    ///
    /// # Errors
    ///
    /// * `GridTooSmall` if either axis has fewer than three points
    /// * `InvalidCoordinate` (strict mode) for NaN/inf values, or a latitude
    ///   step that is zero or reverses direction
    /// * `NonUniformGrid` if any latitude step differs from the first one
    pub fn new(
        lat: ArrayView1<'_, f64>,
        lon: ArrayView1<'_, f64>,
        mode: ValidationMode,
    ) -> Result<Self> {
        if lat.len() < MIN_GRID_SIZE || lon.len() < MIN_GRID_SIZE {
            return Err(WindStressError::GridTooSmall {
                rows: lat.len(),
                cols: lon.len(),
            });
        }

        if mode == ValidationMode::Strict {
            check_finite("lat", lat)?;
            check_finite("lon", lon)?;
        }

        let dlat = uniform_step(lat)?;

        if mode == ValidationMode::Strict {
            check_monotonic(lat, dlat)?;
        }

        Ok(Self {
            lat: lat.to_owned(),
            lon: lon.to_owned(),
            dlat,
        })
    }

    /// Shape of fields defined on this grid: `(n_lat, n_lon)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.lat.len(), self.lon.len())
    }

    /// Latitudes (degrees).
    pub fn lat(&self) -> ArrayView1<'_, f64> {
        self.lat.view()
    }

    /// Longitudes (degrees).
    pub fn lon(&self) -> ArrayView1<'_, f64> {
        self.lon.view()
    }

    /// Uniform latitude step (degrees, may be negative).
    #[inline]
    pub fn dlat(&self) -> f64 {
        self.dlat
    }

    /// Meridional grid spacing in meters.
    #[inline]
    pub fn dy(&self, meters_per_degree: f64) -> f64 {
        self.dlat * meters_per_degree
    }

    /// Zonal distance coordinate `dx[i, j]` in meters.
    pub fn dx(&self, meters_per_degree: f64) -> Array2<f64> {
        let cos_lat: Vec<f64> = self.lat.iter().map(|lat| lat.to_radians().cos()).collect();
        Array2::from_shape_fn(self.shape(), |(i, j)| {
            self.lon[j] * meters_per_degree * cos_lat[i]
        })
    }
}

/// Return the first latitude step after checking all others match it.
fn uniform_step(lat: ArrayView1<'_, f64>) -> Result<f64> {
    let d0 = lat[1] - lat[0];
    let tol = STEP_ATOL + STEP_RTOL * d0.abs();

    for (index, pair) in lat.windows(2).into_iter().enumerate() {
        let step = pair[1] - pair[0];
        // Written as a negated `<=` so NaN steps are rejected.
        if !((step - d0).abs() <= tol) {
            return Err(WindStressError::NonUniformGrid {
                index,
                step,
                expected: d0,
            });
        }
    }

    Ok(d0)
}

/// Every step must be non-zero and share the sign of the first one.
fn check_monotonic(lat: ArrayView1<'_, f64>, d0: f64) -> Result<()> {
    for (index, pair) in lat.windows(2).into_iter().enumerate() {
        let step = pair[1] - pair[0];
        if step == 0.0 || step.signum() != d0.signum() {
            return Err(WindStressError::InvalidCoordinate {
                what: "lat step".to_string(),
                index,
                value: step,
            });
        }
    }
    Ok(())
}

fn check_finite(what: &str, values: ArrayView1<'_, f64>) -> Result<()> {
    match values.iter().position(|x| !x.is_finite()) {
        Some(index) => Err(WindStressError::InvalidCoordinate {
            what: what.to_string(),
            index,
            value: values[index],
        }),
        None => Ok(()),
    }
}
