//! Mathematical utilities: rounding and ordinary least squares.

pub mod ols;

pub use ols::*;

/// Round to `dp` decimal places.
///
/// Reported times are rounded to 2 places and Avrami transforms to 3, so the
/// summary tables match what a spreadsheet user would copy out by hand.
pub fn round_dp(value: f64, dp: u32) -> f64 {
    let factor = 10f64.powi(dp as i32);
    (value * factor).round() / factor
}
