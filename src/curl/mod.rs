//! Wind stress curl.
//!
//! - [`config`]: operator settings (distance scale, boundary stencil
//!   variants, validation strictness)
//! - [`operator`]: input validation and the stress → curl pipeline
//! - `stencil`: the finite-difference regions
//!
//! ```text
//! curl τ = ∂τ_y/∂x − ∂τ_x/∂y     [N/m³]
//! ```

pub mod config;
pub mod operator;
mod stencil;

pub use config::{BottomRowSpan, CurlConfig, RightColumnScaling};
pub use operator::{CurlOperator, compute_curl};
