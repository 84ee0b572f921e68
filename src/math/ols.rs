//! Ordinary least squares line fit.
//!
//! The Avrami analysis reduces to one small regression:
//!
//! ```text
//! minimize Σ (y_i - (intercept + slope · x_i))^2
//! ```
//!
//! Implementation choices:
//! - We build the tall `[1, x]` design matrix and solve with SVD.
//!   (Nalgebra's `QR::solve` is intended for square systems and will panic
//!   for non-square matrices.)
//! - The systems here are tiny (a handful of thresholds, two columns), so
//!   SVD cost is irrelevant; robustness to near-collinear columns is not.

use nalgebra::{DMatrix, DVector};

use crate::error::AppError;

/// Slope, intercept, and coefficient of determination of a fitted line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFit {
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
}

/// Fit `y = intercept + slope · x` by ordinary least squares.
///
/// Fails on mismatched inputs, fewer than 2 distinct x values, or an
/// ill-conditioned solve. The "fewer than 2 distinct x" case is the one a
/// degenerate threshold table can actually produce (all characteristic times
/// rounding to the same value), and it must abort the run rather than return
/// a fabricated line.
pub fn linear_fit(x: &[f64], y: &[f64]) -> Result<LineFit, AppError> {
    if x.len() != y.len() {
        return Err(AppError::new(
            4,
            format!("Regression input length mismatch: {} x vs {} y.", x.len(), y.len()),
        ));
    }
    if distinct_count(x) < 2 {
        return Err(AppError::new(
            4,
            "Degenerate regression: fewer than 2 distinct x values.",
        ));
    }

    let n = x.len();
    let mut design = DMatrix::zeros(n, 2);
    for (i, &xi) in x.iter().enumerate() {
        design[(i, 0)] = 1.0;
        design[(i, 1)] = xi;
    }
    let rhs = DVector::from_column_slice(y);

    let beta = solve_least_squares(&design, &rhs)
        .ok_or_else(|| AppError::new(4, "Least-squares solve failed (ill-conditioned system)."))?;

    let intercept = beta[0];
    let slope = beta[1];

    let y_mean = y.iter().sum::<f64>() / n as f64;
    let mut ss_res = 0.0;
    let mut ss_tot = 0.0;
    for (&xi, &yi) in x.iter().zip(y) {
        let fitted = intercept + slope * xi;
        ss_res += (yi - fitted) * (yi - fitted);
        ss_tot += (yi - y_mean) * (yi - y_mean);
    }
    // A perfectly flat y is fit exactly by a flat line.
    let r_squared = if ss_tot > 0.0 { 1.0 - ss_res / ss_tot } else { 1.0 };

    Ok(LineFit {
        slope,
        intercept,
        r_squared,
    })
}

/// Solve a least squares problem using SVD.
///
/// Returns `None` if the system is too ill-conditioned to solve robustly.
fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Option<DVector<f64>> {
    let svd = x.clone().svd(true, true);

    // Try progressively looser tolerances if the strict solve fails.
    for &tol in &[1e-10, 1e-8, 1e-6] {
        if let Ok(beta) = svd.solve(y, tol) {
            if beta.iter().all(|v| v.is_finite()) {
                return Some(beta);
            }
        }
    }

    None
}

fn distinct_count(values: &[f64]) -> usize {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    sorted.dedup();
    sorted.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_line_is_recovered_exactly() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y: Vec<f64> = x.iter().map(|v| 2.0 + 3.0 * v).collect();

        let fit = linear_fit(&x, &y).unwrap();
        assert!((fit.slope - 3.0).abs() < 1e-10);
        assert!((fit.intercept - 2.0).abs() < 1e-10);
        assert!((fit.r_squared - 1.0).abs() < 1e-12);
    }

    #[test]
    fn noisy_line_has_r_squared_below_one() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0];
        let y = [0.1, 0.9, 2.2, 2.8, 4.1];

        let fit = linear_fit(&x, &y).unwrap();
        assert!(fit.r_squared > 0.9);
        assert!(fit.r_squared < 1.0);
    }

    #[test]
    fn single_distinct_x_is_rejected() {
        let x = [2.0, 2.0, 2.0];
        let y = [1.0, 2.0, 3.0];

        let err = linear_fit(&x, &y).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn flat_y_reports_perfect_fit() {
        let x = [1.0, 2.0, 3.0];
        let y = [5.0, 5.0, 5.0];

        let fit = linear_fit(&x, &y).unwrap();
        assert!(fit.slope.abs() < 1e-10);
        assert!((fit.intercept - 5.0).abs() < 1e-10);
        assert_eq!(fit.r_squared, 1.0);
    }
}
