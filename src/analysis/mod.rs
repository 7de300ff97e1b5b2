//! Diagnostics derived from wind stress fields.
//!
//! - [`ekman`]: Ekman pumping velocity from the wind stress curl

pub mod ekman;

pub use ekman::{F_MIN, OMEGA_EARTH, RHO_WATER, coriolis_parameter, ekman_pumping};
