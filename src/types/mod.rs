//! Grid and field types shared by the stress and curl operators.
//!
//! # Example
//!
//! ```
//! use ndarray::array;
//! use windstress::types::{LatLonGrid, ValidationMode, METERS_PER_DEGREE};
//!
//! let lat = array![0.0, 0.25, 0.5, 0.75];
//! let lon = array![120.0, 120.25, 120.5];
//! let grid = LatLonGrid::new(lat.view(), lon.view(), ValidationMode::Strict).unwrap();
//!
//! assert_eq!(grid.shape(), (4, 3));
//! assert_eq!(grid.dy(METERS_PER_DEGREE), 0.25 * METERS_PER_DEGREE);
//! ```

mod field;
mod grid;

pub use field::{StressField, WindField};
pub(crate) use field::check_same_shape;
pub use grid::{
    LatLonGrid, METERS_PER_DEGREE, METERS_PER_DEGREE_WGS84, MIN_GRID_SIZE, ValidationMode,
};
