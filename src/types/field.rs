//! Wind and stress field containers.
//!
//! Both fields hold a pair of co-indexed `[lat, lon]` grids. Construction
//! checks the pair for equal shapes, so downstream code can index the two
//! components with the same `(i, j)` without further checks.

use ndarray::{Array2, ArrayView2, Zip};

use crate::error::{Result, WindStressError};

/// Zonal (`u`) and meridional (`v`) wind components in m/s.
///
/// # Example
///
/// ```
/// use ndarray::Array2;
/// use windstress::types::WindField;
///
/// let wind = WindField::new(Array2::from_elem((3, 4), 3.0), Array2::from_elem((3, 4), 4.0)).unwrap();
/// assert_eq!(wind.shape(), (3, 4));
/// assert_eq!(wind.speed()[(0, 0)], 5.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct WindField {
    u: Array2<f64>,
    v: Array2<f64>,
}

impl WindField {
    /// Create a wind field, rejecting components of different shapes.
    pub fn new(u: Array2<f64>, v: Array2<f64>) -> Result<Self> {
        check_same_shape(u.view(), v.view())?;
        Ok(Self { u, v })
    }

    /// Create a wind field by copying borrowed components.
    pub fn from_views(u: ArrayView2<'_, f64>, v: ArrayView2<'_, f64>) -> Result<Self> {
        check_same_shape(u, v)?;
        Ok(Self {
            u: u.to_owned(),
            v: v.to_owned(),
        })
    }

    /// Grid shape as `(rows, cols)` = `(n_lat, n_lon)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        self.u.dim()
    }

    /// Zonal component (m/s).
    #[inline]
    pub fn u(&self) -> ArrayView2<'_, f64> {
        self.u.view()
    }

    /// Meridional component (m/s).
    #[inline]
    pub fn v(&self) -> ArrayView2<'_, f64> {
        self.v.view()
    }

    /// Wind speed magnitude `sqrt(u² + v²)` per cell.
    pub fn speed(&self) -> Array2<f64> {
        Zip::from(&self.u)
            .and(&self.v)
            .map_collect(|&u, &v| (u * u + v * v).sqrt())
    }

    /// Split into `(u, v)`.
    pub fn into_components(self) -> (Array2<f64>, Array2<f64>) {
        (self.u, self.v)
    }
}

/// Surface stress components `Tx`, `Ty` in N/m².
#[derive(Clone, Debug, PartialEq)]
pub struct StressField {
    /// Zonal stress (N/m²)
    pub tx: Array2<f64>,
    /// Meridional stress (N/m²)
    pub ty: Array2<f64>,
}

impl StressField {
    /// Grid shape as `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        self.tx.dim()
    }

    /// Stress magnitude `sqrt(Tx² + Ty²)` per cell.
    pub fn magnitude(&self) -> Array2<f64> {
        Zip::from(&self.tx)
            .and(&self.ty)
            .map_collect(|&tx, &ty| (tx * tx + ty * ty).sqrt())
    }

    /// Split into `(Tx, Ty)`.
    pub fn into_components(self) -> (Array2<f64>, Array2<f64>) {
        (self.tx, self.ty)
    }
}

/// Fail with `ShapeMismatch` unless `u` and `v` have identical shapes.
pub(crate) fn check_same_shape(u: ArrayView2<'_, f64>, v: ArrayView2<'_, f64>) -> Result<()> {
    if u.dim() != v.dim() {
        return Err(WindStressError::shape_mismatch("v (must match u)", u.dim(), v.dim()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_wind_field_rejects_mismatched_shapes() {
        let err = WindField::new(Array2::zeros((3, 4)), Array2::zeros((4, 3))).unwrap_err();
        assert!(matches!(err, WindStressError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_speed() {
        let wind = WindField::new(array![[3.0, 0.0], [-6.0, 1.0]], array![[4.0, 0.0], [8.0, 0.0]])
            .unwrap();
        assert_eq!(wind.speed(), array![[5.0, 0.0], [10.0, 1.0]]);
    }

    #[test]
    fn test_speed_propagates_nan() {
        let wind = WindField::new(array![[f64::NAN]], array![[1.0]]).unwrap();
        assert!(wind.speed()[(0, 0)].is_nan());
    }

    #[test]
    fn test_stress_magnitude() {
        let stress = StressField {
            tx: array![[0.3]],
            ty: array![[-0.4]],
        };
        assert!((stress.magnitude()[(0, 0)] - 0.5).abs() < 1e-15);
        assert_eq!(stress.shape(), (1, 1));
    }
}
