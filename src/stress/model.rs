//! Bulk-formula wind stress on gridded wind fields.
//!
//! τ = ρ_air · C_d(|U|) · |U| · U
//!
//! Each cell depends only on the co-located wind vector, so the field
//! computation is a single element-wise pass (optionally parallel).

use ndarray::{Array2, ArrayView2, Zip};

use super::drag::DragCoefficient;
use crate::error::Result;
use crate::types::{StressField, WindField, check_same_shape};

/// Air density (kg/m³).
pub const RHO_AIR: f64 = 1.2;

/// Wind stress model: drag formulation plus air density.
///
/// # Example
///
/// ```
/// use ndarray::Array2;
/// use windstress::stress::{DragCoefficient, StressModel};
///
/// let model = StressModel::default();
/// let u = Array2::from_elem((2, 2), 5.0);
/// let v = Array2::zeros((2, 2));
/// let stress = model.compute(u.view(), v.view()).unwrap();
///
/// // 1.14e-3 * 1.2 * 5 * 5
/// assert!((stress.tx[(0, 0)] - 0.0342).abs() < 1e-12);
///
/// let wu = StressModel::new(DragCoefficient::Wu).with_rho_air(1.225);
/// assert!(wu.stress_at(10.0, 0.0).0 > 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StressModel {
    /// Drag coefficient formulation
    drag: DragCoefficient,
    /// Air density (kg/m³)
    rho_air: f64,
}

impl Default for StressModel {
    fn default() -> Self {
        Self {
            drag: DragCoefficient::default(),
            rho_air: RHO_AIR,
        }
    }
}

impl StressModel {
    /// Create a model with the given drag formulation and default air density.
    pub fn new(drag: DragCoefficient) -> Self {
        Self {
            drag,
            ..Self::default()
        }
    }

    /// Set drag coefficient formulation.
    pub fn with_drag(mut self, drag: DragCoefficient) -> Self {
        self.drag = drag;
        self
    }

    /// Set air density (default: 1.2 kg/m³).
    pub fn with_rho_air(mut self, rho_air: f64) -> Self {
        self.rho_air = rho_air;
        self
    }

    /// Drag coefficient formulation.
    pub fn drag(&self) -> DragCoefficient {
        self.drag
    }

    /// Air density (kg/m³).
    pub fn rho_air(&self) -> f64 {
        self.rho_air
    }

    /// Compute wind stress components for a single wind vector.
    ///
    /// Returns (τ_x, τ_y) in N/m².
    #[inline]
    pub fn stress_at(&self, u: f64, v: f64) -> (f64, f64) {
        let wspd = (u * u + v * v).sqrt();
        let cd = self.drag.compute(wspd);

        let tau_x = cd * self.rho_air * wspd * u;
        let tau_y = cd * self.rho_air * wspd * v;

        (tau_x, tau_y)
    }

    /// Compute the stress field for gridded wind components.
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` if `u` and `v` differ in shape.
    pub fn compute(&self, u: ArrayView2<'_, f64>, v: ArrayView2<'_, f64>) -> Result<StressField> {
        check_same_shape(u, v)?;
        Ok(self.compute_unchecked(u, v))
    }

    /// Compute the stress field for a validated wind field.
    pub fn compute_field(&self, wind: &WindField) -> StressField {
        self.compute_unchecked(wind.u(), wind.v())
    }

    fn compute_unchecked(&self, u: ArrayView2<'_, f64>, v: ArrayView2<'_, f64>) -> StressField {
        let mut tx = Array2::zeros(u.dim());
        let mut ty = Array2::zeros(u.dim());

        let zip = Zip::from(&mut tx).and(&mut ty).and(u).and(v);
        let kernel = |tx: &mut f64, ty: &mut f64, &u: &f64, &v: &f64| {
            (*tx, *ty) = self.stress_at(u, v);
        };

        #[cfg(feature = "parallel")]
        zip.par_for_each(kernel);
        #[cfg(not(feature = "parallel"))]
        zip.for_each(kernel);

        StressField { tx, ty }
    }
}

/// Compute `(Tx, Ty)` with the default model (Trenberth drag, ρ_air = 1.2).
///
/// # Errors
///
/// `ShapeMismatch` if `u` and `v` differ in shape.
pub fn compute_stress(
    u: ArrayView2<'_, f64>,
    v: ArrayView2<'_, f64>,
) -> Result<(Array2<f64>, Array2<f64>)> {
    StressModel::default()
        .compute(u, v)
        .map(StressField::into_components)
}
