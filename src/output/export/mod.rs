//! Export module for comparison results.
//!
//! # Architecture
//!
//! Each export format is an independent implementation in its own
//! sub-module. Adding a new format means adding a file, without modifying
//! existing code.
//!
//! # Available formats
//!
//! | Format  | Module          | Version |
//! |---------|-----------------|---------|
//! | CSV     | [`csv`]         | v0.1.0  |
//!
//! # Usage example
//!
//! ```rust,ignore
//! use nbody_bench::output::export::{export_comparison_csv, CsvConfig, CsvMetadata};
//!
//! // Plain export
//! export_comparison_csv(&records, "Original", "OpenMP", "openmp.csv", None)?;
//!
//! // With a metadata header for downstream analysis scripts
//! let config = CsvConfig::default()
//!     .with_metadata(CsvMetadata::from_sweep("Original", "OpenMP", 10_000));
//! export_comparison_csv(&records, "Original", "OpenMP", "openmp.csv", Some(&config))?;
//! ```

pub mod csv;

// Re-export the most commonly used items at the module level so users can write:
//   use nbody_bench::output::export::{export_comparison_csv, CsvConfig};
// instead of the full sub-module path.
pub use csv::{CsvConfig, CsvMetadata, export_comparison_csv};
