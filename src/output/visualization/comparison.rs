//! Two-panel comparison chart
//!
//! One chart per comparison variant, two panels side by side:
//!
//! 1. **Performance panel** — baseline and comparison wall-clock times
//!    against step count, as connected point series. The direct
//!    performance-over-scale picture.
//!
//! 2. **Metric panel** — speedup on the primary (linear) y-axis and
//!    positional divergence on the secondary (logarithmic) y-axis, sharing
//!    the step-count x-axis. Divergence spans orders of magnitude as
//!    numerical error accumulates, hence the log scale.
//!
//! # Gap Policy
//!
//! Every series is drawn only over the sweep points where its value is
//! defined; unmeasurable points leave a gap in the chart but never remove
//! the point from the tabular report. Divergence values of exactly zero
//! cannot be placed on a logarithmic axis and are likewise omitted from
//! that one series.
//!
//! # File Naming
//!
//! [`chart_file_name`] derives the artifact name deterministically from the
//! variant's executable (`4_final.exe` → `performance_comparison_4_final.png`),
//! so re-running the harness overwrites the previous chart.

use plotters::coord::Shift;
use plotters::prelude::*;
use std::error::Error;

use super::config::{NO_TITLE, PlotConfig};
use crate::sweep::{ComparisonRecord, Variant};

// =================================================================================================
// Helper Functions — Extract Chart Series
// =================================================================================================

/// Baseline time series over the sweep points where it is measured
fn baseline_times(records: &[ComparisonRecord]) -> Vec<(f64, f64)> {
    records
        .iter()
        .filter_map(|r| {
            r.baseline
                .elapsed_seconds()
                .map(|seconds| (r.step_count as f64, seconds))
        })
        .collect()
}

/// Comparison time series over the sweep points where it is measured
fn comparison_times(records: &[ComparisonRecord]) -> Vec<(f64, f64)> {
    records
        .iter()
        .filter_map(|r| {
            r.comparison
                .elapsed_seconds()
                .map(|seconds| (r.step_count as f64, seconds))
        })
        .collect()
}

/// Speedup series over the sweep points where it is defined
fn speedup_series(records: &[ComparisonRecord]) -> Vec<(f64, f64)> {
    records
        .iter()
        .filter_map(|r| r.speedup.map(|s| (r.step_count as f64, s)))
        .collect()
}

/// Divergence series over the sweep points where it is defined and positive
///
/// Zero divergence is a real value (identical final positions) but has no
/// representation on a logarithmic axis, so it is excluded from this series
/// only — the tabular report still shows it.
fn divergence_series(records: &[ComparisonRecord]) -> Vec<(f64, f64)> {
    records
        .iter()
        .filter_map(|r| r.position_divergence.map(|d| (r.step_count as f64, d)))
        .filter(|(_, d)| *d > 0.0)
        .collect()
}

/// Upper x bound shared by both panels
fn step_axis_end(records: &[ComparisonRecord]) -> f64 {
    let max_step = records.iter().map(|r| r.step_count).max().unwrap_or(1);
    (max_step as f64).max(1.0) * 1.05
}

/// Logarithmic axis bounds for the divergence series
///
/// A decade of headroom on each side; a safe default range when no positive
/// divergence exists (the series is then empty anyway, but the axis must
/// still be constructible).
fn divergence_bounds(divergences: &[(f64, f64)]) -> (f64, f64) {
    if divergences.is_empty() {
        return (1e-12, 1.0);
    }
    let min = divergences
        .iter()
        .map(|(_, d)| *d)
        .fold(f64::INFINITY, f64::min);
    let max = divergences
        .iter()
        .map(|(_, d)| *d)
        .fold(f64::NEG_INFINITY, f64::max);
    (min / 10.0, max * 10.0)
}

// =================================================================================================
// Public API
// =================================================================================================

/// Deterministic chart file name for a variant
///
/// `"3_openmp.exe"` → `"performance_comparison_3_openmp.png"`. One file per
/// variant, overwritten on re-run.
pub fn chart_file_name(variant: &Variant) -> String {
    format!("performance_comparison_{}.png", variant.file_stem())
}

/// Render the two-panel comparison chart for one variant
///
/// # Arguments
///
/// * `records`          — Comparison records in sweep order
/// * `baseline_label`   — Legend label for the baseline series
/// * `comparison_label` — Legend label for the comparison series
/// * `output_path`      — Output file path (`.svg` → vector, anything else → bitmap)
/// * `config`           — Optional plot configuration; `None` uses defaults
///
/// # Errors
///
/// Returns `Err` if `records` is empty or the backend cannot write to
/// `output_path`. Unmeasurable points within a non-empty sweep are not an
/// error; their series simply skip them.
///
/// # Example
///
/// ```rust,ignore
/// use nbody_bench::output::visualization::plot_comparison;
///
/// plot_comparison(&records, "Original", "OpenMP", "openmp.png", None)?;
/// ```
pub fn plot_comparison(
    records: &[ComparisonRecord],
    baseline_label: &str,
    comparison_label: &str,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if records.is_empty() {
        return Err("No comparison records provided".into());
    }

    let default_config = PlotConfig::comparison(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_comparison_impl(backend, records, baseline_label, comparison_label, config)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_comparison_impl(backend, records, baseline_label, comparison_label, config)
        }
    }
}

// =================================================================================================
// Private Plot Implementations
// =================================================================================================

/// Render both panels with the given drawing backend
fn plot_comparison_impl<DB: DrawingBackend>(
    backend: DB,
    records: &[ComparisonRecord],
    baseline_label: &str,
    comparison_label: &str,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let panels = root.split_evenly((1, 2));
    draw_time_panel(&panels[0], records, baseline_label, comparison_label, config)?;
    draw_metric_panel(&panels[1], records, config)?;

    root.present()?;
    Ok(())
}

/// Left panel: baseline and comparison times vs step count
fn draw_time_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    records: &[ComparisonRecord],
    baseline_label: &str,
    comparison_label: &str,
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let baseline = baseline_times(records);
    let comparison = comparison_times(records);

    let max_seconds = baseline
        .iter()
        .chain(comparison.iter())
        .map(|(_, seconds)| *seconds)
        .fold(f64::NEG_INFINITY, f64::max)
        .max(1e-10);

    let mut chart = ChartBuilder::on(area)
        .caption(&config.title, ("sans-serif", 30).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..step_axis_end(records), 0.0..(max_seconds * 1.1))?;

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc("Time (seconds)")
            .x_label_formatter(&|x| format!("{:.0}", x))
            .draw()?;
    }

    let baseline_color = config.baseline_color;
    chart
        .draw_series(
            LineSeries::new(
                baseline.iter().copied(),
                ShapeStyle::from(&baseline_color).stroke_width(config.line_width),
            )
            .point_size(config.marker_size),
        )?
        .label(baseline_label)
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &baseline_color));

    let comparison_color = config.comparison_color;
    chart
        .draw_series(
            LineSeries::new(
                comparison.iter().copied(),
                ShapeStyle::from(&comparison_color).stroke_width(config.line_width),
            )
            .point_size(config.marker_size),
        )?
        .label(comparison_label)
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &comparison_color));

    chart
        .configure_series_labels()
        .background_style(&config.background.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    Ok(())
}

/// Right panel: speedup (linear, primary axis) and positional divergence
/// (logarithmic, secondary axis) against the shared step-count axis
fn draw_metric_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    records: &[ComparisonRecord],
    config: &PlotConfig,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let speedups = speedup_series(records);
    let divergences = divergence_series(records);

    let max_speedup = speedups
        .iter()
        .map(|(_, s)| *s)
        .fold(f64::NEG_INFINITY, f64::max)
        .max(1.0);

    let x_end = step_axis_end(records);
    let (divergence_low, divergence_high) = divergence_bounds(&divergences);

    let mut chart = ChartBuilder::on(area)
        .caption("Speedup and Numerical Difference", ("sans-serif", 30).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .right_y_label_area_size(60)
        .build_cartesian_2d(0.0..x_end, 0.0..(max_speedup * 1.1))?
        .set_secondary_coord(0.0..x_end, (divergence_low..divergence_high).log_scale());

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc("Speedup")
            .x_label_formatter(&|x| format!("{:.0}", x))
            .draw()?;
    }

    chart
        .configure_secondary_axes()
        .y_desc("Position Difference")
        .draw()?;

    let speedup_color = config.speedup_color;
    chart
        .draw_series(
            LineSeries::new(
                speedups.iter().copied(),
                ShapeStyle::from(&speedup_color).stroke_width(config.line_width),
            )
            .point_size(config.marker_size),
        )?
        .label("Speedup")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &speedup_color));

    if !divergences.is_empty() {
        let divergence_color = config.divergence_color;
        chart
            .draw_secondary_series(
                LineSeries::new(
                    divergences.iter().copied(),
                    ShapeStyle::from(&divergence_color).stroke_width(config.line_width),
                )
                .point_size(config.marker_size),
            )?
            .label("Position Diff")
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &divergence_color));
    }

    chart
        .configure_series_labels()
        .background_style(&config.background.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
