//! # windstress
//!
//! Ocean-surface wind stress and wind stress curl on regular
//! latitude/longitude grids.
//!
//! This crate provides:
//! - Drag coefficient formulations (Trenberth, Large & Olson 1990 by default)
//! - Bulk-formula wind stress τ = ρ_air · C_d · |U| · U on gridded wind
//! - Finite-difference wind stress curl with boundary-aware stencils
//! - Ekman pumping from the curl
//!
//! # Example
//!
//! ```
//! use ndarray::{Array1, Array2};
//! use windstress::{compute_curl, compute_stress};
//!
//! let lat = Array1::linspace(20.0, 30.0, 11);
//! let lon = Array1::linspace(-40.0, -30.0, 11);
//! let u = Array2::from_shape_fn((11, 11), |(i, _)| 8.0 - i as f64);
//! let v = Array2::from_elem((11, 11), 1.0);
//!
//! let (tx, ty) = compute_stress(u.view(), v.view()).unwrap();
//! assert_eq!(tx.dim(), (11, 11));
//! assert_eq!(ty.dim(), (11, 11));
//!
//! let curl = compute_curl(lat.view(), lon.view(), u.view(), v.view()).unwrap();
//! assert!(curl.iter().all(|c| c.is_finite()));
//! ```

pub mod analysis;
pub mod curl;
pub mod error;
pub mod stress;
pub mod types;

pub use analysis::ekman_pumping;
pub use curl::{BottomRowSpan, CurlConfig, CurlOperator, RightColumnScaling, compute_curl};
pub use error::{Result, WindStressError};
pub use stress::{DragCoefficient, RHO_AIR, StressModel, compute_stress};
pub use types::{
    LatLonGrid, METERS_PER_DEGREE, METERS_PER_DEGREE_WGS84, StressField, ValidationMode, WindField,
};
