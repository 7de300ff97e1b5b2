//! Surface wind stress from gridded wind.
//!
//! - [`drag`]: drag coefficient formulations, including the default
//!   Trenberth, Large & Olson (1990) table
//! - [`model`]: the bulk formula τ = ρ_air · C_d · |U| · U on grids

pub mod drag;
pub mod model;

pub use drag::DragCoefficient;
pub use model::{RHO_AIR, StressModel, compute_stress};
