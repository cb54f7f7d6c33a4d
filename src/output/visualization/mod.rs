//! Visualization module for comparison results
//!
//! This module renders comparison sweeps using the `plotters` library.
//!
//! # Organization
//!
//! - **config**: Shared plot configuration (`PlotConfig`)
//! - **comparison**: Two-panel performance/divergence chart per variant
//!
//! # The Two Panels
//!
//! | Panel | Content | Axes |
//! |-------|---------|------|
//! | Left  | Baseline and comparison times vs step count | linear / linear |
//! | Right | Speedup (primary) and positional divergence (secondary) | linear + log |
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use nbody_bench::output::visualization::{chart_file_name, plot_comparison, PlotConfig};
//!
//! // Default chart, file name derived from the variant
//! plot_comparison(&records, "Original", "Final (Barnes-Hut)",
//!                 &chart_file_name(&variant), None)?;
//!
//! // Or with custom config
//! let mut config = PlotConfig::comparison("Barnes-Hut vs Original");
//! config.width = 1920;
//! plot_comparison(&records, "Original", "Final (Barnes-Hut)",
//!                 "custom.svg", Some(&config))?;
//! ```

pub mod config;
pub mod comparison;

pub use config::PlotConfig;

pub use comparison::{chart_file_name, plot_comparison};
