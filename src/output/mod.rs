//! Output module for comparison results
//!
//! This module renders the derived comparison data in three forms:
//! - **Report**: console table, one row per sweep point
//! - **Visualization**: two-panel PNG/SVG chart per variant using plotters
//! - **Export**: CSV data export for external analysis
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── report.rs           ← Console comparison table
//! ├── visualization/      ← Charts
//! │   ├── mod.rs
//! │   ├── config.rs
//! │   └── comparison.rs
//! └── export/             ← Data export
//!     ├── mod.rs
//!     └── csv.rs
//! ```
//!
//! # Rendering Policy
//!
//! Unmeasurable sweep points are never silently dropped: the table and the
//! CSV print an explicit `N/A` in every affected column, and only the chart
//! series that *cannot* represent the point (e.g. divergence on a log axis)
//! omit it.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use nbody_bench::output::report;
//! use nbody_bench::output::visualization::{chart_file_name, plot_comparison};
//! use nbody_bench::output::export::export_comparison_csv;
//!
//! report::print_comparison("Original", &variant, 10_000, &records);
//! plot_comparison(&records, "Original", &variant.label,
//!                 &chart_file_name(&variant), None)?;
//! export_comparison_csv(&records, "Original", &variant.label, "b.csv", None)?;
//! ```

pub mod report;
pub mod visualization;
pub mod export;

// Re-export commonly used items for convenience
pub use report::{comparison_table, print_comparison};

pub use visualization::{
    chart_file_name,
    plot_comparison,
    PlotConfig,
};

pub use export::{
    export_comparison_csv,
    CsvConfig,
};
