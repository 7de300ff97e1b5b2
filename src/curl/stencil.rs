//! Finite-difference stencils for `curl τ = ∂Ty/∂x − ∂Tx/∂y`.
//!
//! Region layout for an `R × C` grid (rows = latitude):
//!
//! ```text
//!          j = 0      1 .. C-2       C-1
//! i = 0     L/T       top (fwd)      copy of [0, C-2]
//! 1..R-2    left      interior       right (bwd)
//! R-1       copy      bottom (bwd)   right (bwd)
//! ```
//!
//! Regions are written in a fixed order; `[0, 0]` is written by both the top
//! row and the left column with the same formula. The bottom-left corner is a
//! copy of `[R-1, C-2]`, the top-right corner a copy of `[0, C-2]`.
//!
//! The interior zonal term divides by `2·(dx[j+1] − dx[j-1])`.

use ndarray::{Array2, ArrayView2, Zip, s};
use tracing::{trace, warn};

use super::config::{BottomRowSpan, CurlConfig, RightColumnScaling};

/// Input to the stencils: stress components and grid metrics.
#[derive(Clone, Copy, Debug)]
pub(crate) struct StencilInput<'a> {
    pub tx: ArrayView2<'a, f64>,
    pub ty: ArrayView2<'a, f64>,
    pub dx: ArrayView2<'a, f64>,
    pub dy: f64,
}

/// Evaluate every region. Caller guarantees a grid of at least 3×3 with
/// all arrays sharing one shape.
pub(crate) fn apply(input: &StencilInput<'_>, config: &CurlConfig) -> Array2<f64> {
    let (rows, cols) = input.tx.dim();
    debug_assert!(rows >= 3 && cols >= 3);
    debug_assert_eq!(input.ty.dim(), (rows, cols));
    debug_assert_eq!(input.dx.dim(), (rows, cols));

    warn_on_zero_spacing(input.dx);

    let mut curl = Array2::from_elem((rows, cols), f64::NAN);

    interior(input, &mut curl);
    trace!(cells = (rows - 2) * (cols - 2), "interior stencil applied");

    top_row(input, &mut curl);
    left_column(input, &mut curl);
    curl[(0, cols - 1)] = curl[(0, cols - 2)];
    trace!("forward stencils applied");

    right_column(input, config.right_column, &mut curl);
    bottom_row(input, config.bottom_row, &mut curl);
    curl[(rows - 1, 0)] = curl[(rows - 1, cols - 2)];
    trace!("backward stencils applied");

    curl
}

fn interior(input: &StencilInput<'_>, curl: &mut Array2<f64>) {
    let StencilInput { tx, ty, dx, dy } = *input;
    let (rows, cols) = curl.dim();

    let zip = Zip::indexed(curl.slice_mut(s![1..rows - 1, 1..cols - 1]));
    let kernel = |(a, b): (usize, usize), c: &mut f64| {
        let (i, j) = (a + 1, b + 1);
        let dty_dx = (ty[(i, j + 1)] - ty[(i, j - 1)]) / (2.0 * (dx[(i, j + 1)] - dx[(i, j - 1)]));
        let dtx_dy = (tx[(i + 1, j)] - tx[(i - 1, j)]) / (2.0 * dy);
        *c = dty_dx - dtx_dy;
    };

    #[cfg(feature = "parallel")]
    zip.par_for_each(kernel);
    #[cfg(not(feature = "parallel"))]
    zip.for_each(kernel);
}

fn top_row(input: &StencilInput<'_>, curl: &mut Array2<f64>) {
    let StencilInput { tx, ty, dx, dy } = *input;
    let cols = curl.ncols();

    for j in 0..cols - 1 {
        let dty_dx = (ty[(0, j + 1)] - ty[(0, j)]) / (dx[(0, j + 1)] - dx[(0, j)]);
        let dtx_dy = (tx[(1, j)] - tx[(0, j)]) / dy;
        curl[(0, j)] = dty_dx - dtx_dy;
    }
}

fn left_column(input: &StencilInput<'_>, curl: &mut Array2<f64>) {
    let StencilInput { tx, ty, dx, dy } = *input;
    let rows = curl.nrows();

    for i in 0..rows - 1 {
        let dty_dx = (ty[(i, 1)] - ty[(i, 0)]) / (dx[(i, 1)] - dx[(i, 0)]);
        let dtx_dy = (tx[(i + 1, 0)] - tx[(i, 0)]) / dy;
        curl[(i, 0)] = dty_dx - dtx_dy;
    }
}

fn right_column(input: &StencilInput<'_>, scaling: RightColumnScaling, curl: &mut Array2<f64>) {
    let StencilInput { tx, ty, dx, dy } = *input;
    let (rows, cols) = curl.dim();
    let (last, prev) = (cols - 1, cols - 2);

    for i in 1..rows {
        let dty_dx = (ty[(i, last)] - ty[(i, prev)]) / (dx[(i, last)] - dx[(i, prev)]);
        let dtx = tx[(i, last)] - tx[(i - 1, last)];
        let dtx_dy = match scaling {
            RightColumnScaling::Unscaled => dtx,
            RightColumnScaling::ScaledByDy => dtx / dy,
        };
        curl[(i, last)] = dty_dx - dtx_dy;
    }
}

fn bottom_row(input: &StencilInput<'_>, span: BottomRowSpan, curl: &mut Array2<f64>) {
    let StencilInput { tx, ty, dx, dy } = *input;
    let (rows, cols) = curl.dim();
    let i = rows - 1;

    for j in 1..cols - 1 {
        let dty_dx = match span {
            BottomRowSpan::Local => {
                (ty[(i, j)] - ty[(i, j - 1)]) / (dx[(i, j)] - dx[(i, j - 1)])
            }
            BottomRowSpan::Wide => {
                (ty[(i, j + 1)] - ty[(i, j - 1)]) / (2.0 * (dx[(i, j + 1)] - dx[(i, j - 1)]))
            }
        };
        let dtx_dy = (tx[(i, j)] - tx[(i - 1, j)]) / dy;
        curl[(i, j)] = dty_dx - dtx_dy;
    }
}

/// Repeated longitudes (or a pole row) make `dx` differences vanish and the
/// affected cells non-finite.
fn warn_on_zero_spacing(dx: ArrayView2<'_, f64>) {
    let zero = dx
        .rows()
        .into_iter()
        .enumerate()
        .find_map(|(i, row)| {
            row.windows(2)
                .into_iter()
                .position(|pair| pair[1] == pair[0])
                .map(|j| (i, j))
        });

    if let Some((row, col)) = zero {
        warn!(row, col, "zero zonal spacing; curl will be non-finite near this cell");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    /// Identity-like metrics: dx = column index, dy = 1.
    fn unit_metrics(rows: usize, cols: usize) -> Array2<f64> {
        Array2::from_shape_fn((rows, cols), |(_, j)| j as f64)
    }

    #[test]
    fn test_ty_linear_in_x_gives_uniform_curl() {
        // Ty = 2x, Tx = 0 → forward/backward stencils give 2, interior gives 1.
        let (rows, cols) = (4, 5);
        let dx = unit_metrics(rows, cols);
        let ty = dx.mapv(|x| 2.0 * x);
        let tx = Array2::zeros((rows, cols));
        let input = StencilInput {
            tx: tx.view(),
            ty: ty.view(),
            dx: dx.view(),
            dy: 1.0,
        };

        let curl = apply(&input, &CurlConfig::default());

        for i in 1..rows - 1 {
            for j in 1..cols - 1 {
                assert_eq!(curl[(i, j)], 1.0, "interior ({}, {})", i, j);
            }
        }
        for j in 0..cols {
            assert_eq!(curl[(0, j)], 2.0);
        }
        for i in 0..rows {
            assert_eq!(curl[(i, 0)], 2.0);
            assert_eq!(curl[(i, cols - 1)], 2.0);
        }
        for j in 1..cols - 1 {
            assert_eq!(curl[(rows - 1, j)], 2.0);
        }
    }

    #[test]
    fn test_tx_linear_in_y_exposes_right_column_scaling() {
        // Tx = 3y with dy = 2 (so row i sits at y = 2i), Ty = 0.
        let (rows, cols) = (3, 3);
        let dx = unit_metrics(rows, cols);
        let tx = Array2::from_shape_fn((rows, cols), |(i, _)| 6.0 * i as f64);
        let ty = Array2::zeros((rows, cols));
        let input = StencilInput {
            tx: tx.view(),
            ty: ty.view(),
            dx: dx.view(),
            dy: 2.0,
        };

        let unscaled = apply(&input, &CurlConfig::default());
        assert_eq!(unscaled[(1, 1)], -3.0);
        assert_eq!(unscaled[(0, 0)], -3.0);
        assert_eq!(unscaled[(2, 1)], -3.0);
        assert_eq!(unscaled[(1, 2)], -6.0);
        assert_eq!(unscaled[(2, 2)], -6.0);

        let scaled = apply(
            &input,
            &CurlConfig::default().with_right_column(RightColumnScaling::ScaledByDy),
        );
        assert_eq!(scaled[(1, 2)], -3.0);
        assert_eq!(scaled[(2, 2)], -3.0);
        assert_eq!(scaled[(0, 2)], unscaled[(0, 2)]);
    }

    #[test]
    fn test_bottom_row_spans() {
        let dx = unit_metrics(3, 4);
        let tx = Array2::zeros((3, 4));
        let ty = array![
            [0.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 4.0, 9.0]
        ];
        let input = StencilInput {
            tx: tx.view(),
            ty: ty.view(),
            dx: dx.view(),
            dy: 1.0,
        };

        let local = apply(&input, &CurlConfig::default());
        assert_eq!(local[(2, 1)], 1.0);
        assert_eq!(local[(2, 2)], 3.0);
        assert_eq!(local[(2, 0)], local[(2, 2)]);

        let wide = apply(&input, &CurlConfig::default().with_bottom_row(BottomRowSpan::Wide));
        // (4 - 0) / (2 * 2), (9 - 1) / (2 * 2)
        assert_eq!(wide[(2, 1)], 1.0);
        assert_eq!(wide[(2, 2)], 2.0);
        assert_eq!(wide[(2, 0)], 2.0);
        // Bottom-right corner belongs to the right column in both cases.
        assert_eq!(local[(2, 3)], wide[(2, 3)]);
    }

    #[test]
    fn test_corner_copies() {
        let dx = unit_metrics(3, 5);
        let tx = Array2::from_shape_fn((3, 5), |(i, j)| (i * 7 + j * j) as f64);
        let ty = Array2::from_shape_fn((3, 5), |(i, j)| (i * i + 3 * j) as f64);
        let input = StencilInput {
            tx: tx.view(),
            ty: ty.view(),
            dx: dx.view(),
            dy: 0.5,
        };

        let curl = apply(&input, &CurlConfig::default());
        assert_eq!(curl[(0, 4)], curl[(0, 3)]);
        assert_eq!(curl[(2, 0)], curl[(2, 3)]);
        assert!(curl.iter().all(|c| c.is_finite()));
    }
}
