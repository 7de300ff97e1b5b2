//! Ekman pumping from wind stress curl.
//!
//! Vertical velocity at the base of the Ekman layer:
//!
//! ```text
//! w_E = curl τ / (ρ_water · f),    f = 2Ω sin(φ)
//! ```
//!
//! Positive `w_E` is upwelling. Near the equator `f → 0` and the balance
//! breaks down; those rows are set to NaN.

use ndarray::{Array2, ArrayView1, ArrayView2, Zip};

use crate::error::{Result, WindStressError};

/// Sea water density (kg/m³).
pub const RHO_WATER: f64 = 1025.0;

/// Earth's rotation rate (rad/s).
pub const OMEGA_EARTH: f64 = 7.2921e-5;

/// Smallest |f| (s⁻¹) for which pumping is reported, about ±0.4° latitude.
pub const F_MIN: f64 = 1e-6;

/// Coriolis parameter at a latitude in degrees.
#[inline]
pub fn coriolis_parameter(lat_deg: f64) -> f64 {
    2.0 * OMEGA_EARTH * lat_deg.to_radians().sin()
}

/// Ekman pumping velocity (m/s) from a curl field (N/m³).
///
/// # Errors
///
/// `ShapeMismatch` if `lat.len()` differs from the number of curl rows.
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use windstress::analysis::{ekman_pumping, RHO_WATER};
///
/// let lat = array![0.0, 30.0];
/// let curl = array![[1e-7, 1e-7], [1e-7, 1e-7]];
/// let w = ekman_pumping(lat.view(), curl.view(), RHO_WATER).unwrap();
/// assert!(w[(0, 0)].is_nan());
/// assert!(w[(1, 0)] > 0.0);
/// ```
pub fn ekman_pumping(
    lat: ArrayView1<'_, f64>,
    curl: ArrayView2<'_, f64>,
    rho_water: f64,
) -> Result<Array2<f64>> {
    if lat.len() != curl.nrows() {
        return Err(WindStressError::shape_mismatch(
            "curl (rows must match lat)",
            (lat.len(), curl.ncols()),
            curl.dim(),
        ));
    }

    let mut w = Array2::from_elem(curl.dim(), f64::NAN);
    Zip::from(w.rows_mut())
        .and(curl.rows())
        .and(&lat)
        .for_each(|mut w_row, curl_row, &phi| {
            let f = coriolis_parameter(phi);
            if f.abs() >= F_MIN {
                w_row.zip_mut_with(&curl_row, |w, &c| *w = c / (rho_water * f));
            }
        });

    Ok(w)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_coriolis_parameter() {
        assert_eq!(coriolis_parameter(0.0), 0.0);
        assert!((coriolis_parameter(30.0) - OMEGA_EARTH).abs() < 1e-15);
        assert!(coriolis_parameter(-45.0) < 0.0);
    }

    #[test]
    fn test_pumping_sign_by_hemisphere() {
        let lat = array![-30.0, 0.1, 30.0];
        let curl = array![[2e-7], [2e-7], [2e-7]];
        let w = ekman_pumping(lat.view(), curl.view(), RHO_WATER).unwrap();

        // 2e-7 / (1025 * 7.2921e-5)
        let expected = 2e-7 / (RHO_WATER * OMEGA_EARTH);
        assert!((w[(2, 0)] - expected).abs() < 1e-15);
        assert!((w[(0, 0)] + expected).abs() < 1e-15);
        assert!(w[(1, 0)].is_nan());
    }

    #[test]
    fn test_pumping_rejects_mismatched_rows() {
        let lat = array![10.0, 20.0];
        let curl = Array2::<f64>::zeros((3, 2));
        let err = ekman_pumping(lat.view(), curl.view(), RHO_WATER).unwrap_err();
        assert!(matches!(err, WindStressError::ShapeMismatch { .. }));
    }
}
