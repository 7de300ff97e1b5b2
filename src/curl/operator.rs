//! Wind stress curl on a regular latitude/longitude grid.
//!
//! Pipeline: validate inputs, compute `(Tx, Ty)` with the stress model,
//! build `dy` and the 2D zonal distance `dx`, then apply the boundary-aware
//! stencils. Result units are N/m³.

use ndarray::{Array2, ArrayView1, ArrayView2, ArrayViewD, Ix1, Ix2};
use tracing::debug;

use super::config::CurlConfig;
use super::stencil::{self, StencilInput};
use crate::error::{Result, WindStressError};
use crate::stress::StressModel;
use crate::types::{LatLonGrid, StressField, WindField, check_same_shape};

/// Wind stress curl operator.
///
/// # Example
///
/// ```
/// use ndarray::{Array1, Array2};
/// use windstress::curl::{CurlConfig, CurlOperator};
/// use windstress::stress::{DragCoefficient, StressModel};
///
/// let lat = Array1::linspace(-10.0, 10.0, 21);
/// let lon = Array1::linspace(140.0, 160.0, 21);
/// let u = Array2::from_shape_fn((21, 21), |(i, _)| -5.0 + 0.5 * i as f64);
/// let v = Array2::zeros((21, 21));
///
/// let op = CurlOperator::new(StressModel::new(DragCoefficient::TrenberthLargeOlson))
///     .with_config(CurlConfig::default().strict());
/// let curl = op.compute(lat.view(), lon.view(), u.view(), v.view()).unwrap();
/// assert_eq!(curl.dim(), (21, 21));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CurlOperator {
    stress: StressModel,
    config: CurlConfig,
}

impl CurlOperator {
    /// Create an operator with the given stress model and default config.
    pub fn new(stress: StressModel) -> Self {
        Self {
            stress,
            config: CurlConfig::default(),
        }
    }

    /// Set the curl configuration.
    pub fn with_config(mut self, config: CurlConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the stress model.
    pub fn with_stress_model(mut self, stress: StressModel) -> Self {
        self.stress = stress;
        self
    }

    /// Stress model used by this operator.
    pub fn stress_model(&self) -> &StressModel {
        &self.stress
    }

    /// Curl configuration.
    pub fn config(&self) -> &CurlConfig {
        &self.config
    }

    /// Compute the wind stress curl.
    ///
    /// # Arguments
    /// * `lat` - Latitudes (degrees), uniformly spaced
    /// * `lon` - Longitudes (degrees)
    /// * `u`, `v` - Wind components (m/s), shape `(lat.len(), lon.len())`
    ///
    /// # Errors
    ///
    /// * `ShapeMismatch` if `u` or `v` do not match the coordinates or each other
    /// * `GridTooSmall` for grids smaller than 3×3
    /// * `NonUniformGrid` if latitude steps differ
    /// * `InvalidCoordinate` for rejected coordinates in strict mode
    pub fn compute(
        &self,
        lat: ArrayView1<'_, f64>,
        lon: ArrayView1<'_, f64>,
        u: ArrayView2<'_, f64>,
        v: ArrayView2<'_, f64>,
    ) -> Result<Array2<f64>> {
        let expected = (lat.len(), lon.len());
        if u.dim() != expected {
            return Err(WindStressError::shape_mismatch("u", expected, u.dim()));
        }
        if v.dim() != expected {
            return Err(WindStressError::shape_mismatch("v", expected, v.dim()));
        }
        check_same_shape(u, v)?;

        let grid = LatLonGrid::new(lat, lon, self.config.validation)?;
        let stress = self.stress.compute(u, v)?;
        Ok(self.curl_of(&grid, &stress))
    }

    /// Compute the curl for a wind field on a validated grid.
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` if the wind field does not match the grid.
    pub fn compute_on_grid(&self, grid: &LatLonGrid, wind: &WindField) -> Result<Array2<f64>> {
        if wind.shape() != grid.shape() {
            return Err(WindStressError::shape_mismatch(
                "wind field",
                grid.shape(),
                wind.shape(),
            ));
        }

        let stress = self.stress.compute_field(wind);
        Ok(self.curl_of(grid, &stress))
    }

    /// Dynamic-rank entry point for callers holding untyped arrays.
    ///
    /// # Errors
    ///
    /// `Dimension` if `lat`/`lon` are not 1-D or `u`/`v` are not 2-D, then
    /// everything [`CurlOperator::compute`] returns.
    pub fn compute_dyn(
        &self,
        lat: ArrayViewD<'_, f64>,
        lon: ArrayViewD<'_, f64>,
        u: ArrayViewD<'_, f64>,
        v: ArrayViewD<'_, f64>,
    ) -> Result<Array2<f64>> {
        let lat = into_1d("lat", lat)?;
        let lon = into_1d("lon", lon)?;
        let u = into_2d("u", u)?;
        let v = into_2d("v", v)?;
        self.compute(lat, lon, u, v)
    }

    fn curl_of(&self, grid: &LatLonGrid, stress: &StressField) -> Array2<f64> {
        let (rows, cols) = grid.shape();
        let mpd = self.config.meters_per_degree;
        let dy = grid.dy(mpd);
        let dx = grid.dx(mpd);

        debug!(rows, cols, dlat = grid.dlat(), dy, "computing wind stress curl");

        let input = StencilInput {
            tx: stress.tx.view(),
            ty: stress.ty.view(),
            dx: dx.view(),
            dy,
        };
        stencil::apply(&input, &self.config)
    }
}

/// Compute the wind stress curl with the default stress model and config.
///
/// # Example
///
/// ```
/// use ndarray::{array, Array2};
/// use windstress::compute_curl;
///
/// let lat = array![0.0, 1.0, 2.0];
/// let lon = array![0.0, 1.0, 2.0];
/// let ones = Array2::ones((3, 3));
/// let curl = compute_curl(lat.view(), lon.view(), ones.view(), ones.view()).unwrap();
/// assert_eq!(curl[(0, 2)], curl[(0, 1)]);
/// ```
pub fn compute_curl(
    lat: ArrayView1<'_, f64>,
    lon: ArrayView1<'_, f64>,
    u: ArrayView2<'_, f64>,
    v: ArrayView2<'_, f64>,
) -> Result<Array2<f64>> {
    CurlOperator::default().compute(lat, lon, u, v)
}

fn into_1d<'a>(what: &str, a: ArrayViewD<'a, f64>) -> Result<ArrayView1<'a, f64>> {
    let ndim = a.ndim();
    a.into_dimensionality::<Ix1>()
        .map_err(|_| WindStressError::dimension(what, 1, ndim))
}

fn into_2d<'a>(what: &str, a: ArrayViewD<'a, f64>) -> Result<ArrayView2<'a, f64>> {
    let ndim = a.ndim();
    a.into_dimensionality::<Ix2>()
        .map_err(|_| WindStressError::dimension(what, 2, ndim))
}
