//! SVG chart rendering with Plotters.
//!
//! Every function here opens its own drawing area scoped to one output file,
//! so consecutive plots can never bleed into each other — there is no shared
//! plotting context to clear between calls.
//!
//! The SVG backend keeps the outputs vector-format (the lab hand-in wants
//! scalable figures) without pulling in font rasterization dependencies.

use std::path::Path;

use plotters::prelude::*;

use crate::domain::{AvramiData, CrystallinitySeries, HalfTimePoint};
use crate::error::AppError;

const PLOT_SIZE: (u32, u32) = (800, 600);

fn render_error(path: &Path, e: impl std::fmt::Display) -> AppError {
    AppError::new(5, format!("Failed to render plot '{}': {e}", path.display()))
}

/// Scatter of crystallinity vs time for one temperature.
pub fn crystallinity_scatter(series: &CrystallinitySeries, path: &Path) -> Result<(), AppError> {
    let root = SVGBackend::new(path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| render_error(path, e))?;

    let t_max = series
        .points
        .iter()
        .map(|p| p.time)
        .fold(f64::NEG_INFINITY, f64::max);
    // Re-zeroed times start at 0; pad the right edge so the last marker is
    // not clipped. Guard against a single-point series.
    let x_max = (t_max * 1.05).max(1.0);

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("crystallinity over time at {} °C", series.temperature),
            ("sans-serif", 24),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0.0..x_max, 0.0..1.05)
        .map_err(|e| render_error(path, e))?;

    chart
        .configure_mesh()
        .x_desc("time / s")
        .y_desc("crystallinity")
        .draw()
        .map_err(|e| render_error(path, e))?;

    chart
        .draw_series(
            series
                .points
                .iter()
                .map(|p| Circle::new((p.time, p.crystallinity), 3, BLUE.filled())),
        )
        .map_err(|e| render_error(path, e))?;

    root.present().map_err(|e| render_error(path, e))?;
    Ok(())
}

/// Scatter of reciprocal half-time vs temperature.
///
/// Plots the exact `1/t½` values; the 2-decimal rounding only applies to the
/// text report.
pub fn reciprocal_half_time_scatter(
    half_times: &[HalfTimePoint],
    path: &Path,
) -> Result<(), AppError> {
    let root = SVGBackend::new(path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| render_error(path, e))?;

    let t_min = half_times.iter().map(|h| h.temperature).min().unwrap_or(0) as f64;
    let t_max = half_times.iter().map(|h| h.temperature).max().unwrap_or(1) as f64;
    let y_max = half_times
        .iter()
        .map(|h| 1.0 / h.half_time)
        .fold(0.0f64, f64::max);
    let y_max = if y_max > 0.0 { y_max * 1.2 } else { 1.0 };

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "reciprocal of crystallization half-time against temperature",
            ("sans-serif", 20),
        )
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d((t_min - 5.0)..(t_max + 5.0), 0.0..y_max)
        .map_err(|e| render_error(path, e))?;

    chart
        .configure_mesh()
        .x_desc("T / °C")
        .y_desc("1/t_1/2 / s^-1")
        .draw()
        .map_err(|e| render_error(path, e))?;

    chart
        .draw_series(half_times.iter().map(|h| {
            Circle::new((h.temperature as f64, 1.0 / h.half_time), 4, BLUE.filled())
        }))
        .map_err(|e| render_error(path, e))?;

    root.present().map_err(|e| render_error(path, e))?;
    Ok(())
}

/// Avrami double-log scatter with the fitted line overlaid.
pub fn avrami_plot(data: &AvramiData, path: &Path) -> Result<(), AppError> {
    let root = SVGBackend::new(path, PLOT_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| render_error(path, e))?;

    let xs = data.log_time.iter().copied();
    let x_min = xs.clone().fold(f64::INFINITY, f64::min);
    let x_max = xs.fold(f64::NEG_INFINITY, f64::max);

    let ys = data
        .log_log_crystallinity
        .iter()
        .chain(data.fit_line.iter().map(|(_, y)| y))
        .copied();
    let y_min = ys.clone().fold(f64::INFINITY, f64::min);
    let y_max = ys.fold(f64::NEG_INFINITY, f64::max);

    let x_pad = ((x_max - x_min) * 0.05).max(0.01);
    let y_pad = ((y_max - y_min) * 0.05).max(0.01);

    let mut chart = ChartBuilder::on(&root)
        .caption("Avrami double-log plot", ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(
            (x_min - x_pad)..(x_max + x_pad),
            (y_min - y_pad)..(y_max + y_pad),
        )
        .map_err(|e| render_error(path, e))?;

    chart
        .configure_mesh()
        .x_desc("log(t)")
        .y_desc("log(-ln(1 - crystallinity))")
        .draw()
        .map_err(|e| render_error(path, e))?;

    chart
        .draw_series(
            data.log_time
                .iter()
                .zip(&data.log_log_crystallinity)
                .map(|(&x, &y)| Circle::new((x, y), 4, BLUE.filled())),
        )
        .map_err(|e| render_error(path, e))?;

    chart
        .draw_series(LineSeries::new(data.fit_line.iter().copied(), &RED))
        .map_err(|e| render_error(path, e))?;

    root.present().map_err(|e| render_error(path, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AvramiFit, CrystallinityPoint};

    #[test]
    fn crystallinity_scatter_writes_svg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("part1_100_degree_celsius.svg");

        let series = CrystallinitySeries {
            temperature: 100,
            points: (0..20)
                .map(|k| CrystallinityPoint {
                    time: k as f64 * 10.0,
                    crystallinity: k as f64 / 19.0,
                })
                .collect(),
        };

        crystallinity_scatter(&series, &path).unwrap();
        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
    }

    #[test]
    fn avrami_plot_writes_svg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("part3.svg");

        let data = AvramiData {
            temperature: 120,
            log_time: vec![1.0, 1.3, 1.6, 1.9],
            log_log_crystallinity: vec![-1.0, -0.5, 0.0, 0.5],
            fit: AvramiFit { slope: 1.67, intercept: -2.67, r_squared: 1.0 },
            fit_line: vec![(1.0, -1.0), (1.9, 0.5)],
        };

        avrami_plot(&data, &path).unwrap();
        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
    }
}
