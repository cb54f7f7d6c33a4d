//! CSV export functionality for comparison results
//!
//! This module exports a comparison sweep to CSV (Comma-Separated Values)
//! format, compatible with Excel, Python pandas, MATLAB, and most data
//! analysis tools.
//!
//! # Features
//!
//! - **Simple interface**: Export straight from comparison records
//! - **Metadata support**: Optional header comments with sweep parameters
//! - **Customizable**: Delimiter, precision, format options
//! - **Explicit gaps**: Unmeasurable values export as `N/A`, never as zero
//!
//! # Quick Examples
//!
//! ## Minimal Export
//!
//! ```rust,ignore
//! use nbody_bench::output::export::export_comparison_csv;
//!
//! export_comparison_csv(&records, "Original", "OpenMP", "openmp.csv", None)?;
//! ```
//!
//! **Output** (`openmp.csv`):
//! ```csv
//! Timesteps,Original (s),OpenMP (s),Speedup,Position Diff
//! 1,2.000000,1.000000,2.000000,0.000000
//! 10,5.000000,2.500000,2.000000,0.000100
//! 100,N/A,N/A,N/A,N/A
//! ```
//!
//! ## With Metadata
//!
//! ```rust,ignore
//! use nbody_bench::output::export::{export_comparison_csv, CsvConfig, CsvMetadata};
//!
//! let config = CsvConfig::default()
//!     .with_metadata(CsvMetadata::from_sweep("Original", "OpenMP", 10_000));
//!
//! export_comparison_csv(&records, "Original", "OpenMP", "openmp.csv", Some(&config))?;
//! ```
//!
//! **Output** (`openmp.csv`):
//! ```csv
//! # N-Body Benchmark Comparison
//! # Generated: 2026-08-06T15:30:00Z
//! # Baseline: Original
//! # Variant: OpenMP
//! # Particles: 10000
//! #
//! Timesteps,Original (s),OpenMP (s),Speedup,Position Diff
//! 1,2.000000,1.000000,2.000000,0.000000
//! ...
//! ```

use std::error::Error;
use std::fs::File;
use std::io::Write;

use crate::sweep::ComparisonRecord;

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Fields
///
/// - `delimiter`: Column separator (default: ',')
/// - `decimal_separator`: Decimal point character (default: '.')
/// - `precision`: Number of decimal places (default: 6)
/// - `include_metadata`: Add header comments with sweep info
/// - `metadata`: Sweep metadata to include
///
/// # Example
///
/// ```rust,ignore
/// let config = CsvConfig {
///     delimiter: ';',        // European CSV
///     precision: 10,         // High precision
///     ..Default::default()
/// };
/// ```
#[derive(Clone)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Number of decimal places for floating-point values (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in header
    pub metadata: Option<CsvMetadata>,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 6,
            include_metadata: false,
            metadata: None,
        }
    }
}

impl CsvConfig {
    /// Create config with European CSV format (semicolon, comma for decimal)
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// Create config with high precision (12 decimal places)
    pub fn high_precision() -> Self {
        Self {
            precision: 12,
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata for CSV header comments
///
/// All fields are optional. Only non-None fields are included in the header.
#[derive(Clone, Default)]
pub struct CsvMetadata {
    /// Baseline variant label
    pub baseline_label: Option<String>,

    /// Comparison variant label
    pub variant_label: Option<String>,

    /// Particle count of the sweep
    pub particle_count: Option<u32>,

    /// Additional custom parameters
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Create metadata from the sweep parameters
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let metadata = CsvMetadata::from_sweep("Original", "OpenMP", 10_000);
    /// ```
    pub fn from_sweep(baseline: &str, variant: &str, particle_count: u32) -> Self {
        Self {
            baseline_label: Some(baseline.to_string()),
            variant_label: Some(variant.to_string()),
            particle_count: Some(particle_count),
            ..Default::default()
        }
    }

    /// Add custom parameter
    pub fn add_custom(&mut self, key: String, value: String) {
        self.custom.push((key, value));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Write metadata header comments to file
fn write_metadata_header(file: &mut File, metadata: &CsvMetadata) -> Result<(), Box<dyn Error>> {
    writeln!(file, "# N-Body Benchmark Comparison")?;

    // Timestamp (current time)
    let now = chrono::Utc::now();
    writeln!(file, "# Generated: {}", now.to_rfc3339())?;

    if let Some(baseline) = &metadata.baseline_label {
        writeln!(file, "# Baseline: {}", baseline)?;
    }
    if let Some(variant) = &metadata.variant_label {
        writeln!(file, "# Variant: {}", variant)?;
    }
    if let Some(particles) = metadata.particle_count {
        writeln!(file, "# Particles: {}", particles)?;
    }

    // Custom parameters
    for (key, value) in &metadata.custom {
        writeln!(file, "# {}: {}", key, value)?;
    }

    // Separator
    writeln!(file, "#")?;

    Ok(())
}

/// Format an optional value with configured precision, or `N/A`
fn format_cell(value: Option<f64>, config: &CsvConfig) -> String {
    let Some(value) = value else {
        return "N/A".to_string();
    };

    let formatted = format!("{:.prec$}", value, prec = config.precision);

    // Replace decimal separator if needed
    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

// =============================================================================
// Export Functions
// =============================================================================

/// Export a comparison sweep to CSV
///
/// Writes one row per sweep point: step count, baseline time, comparison
/// time, speedup and positional divergence. Absent values are exported as
/// the literal `N/A` so downstream tooling can distinguish "unmeasured"
/// from a real zero.
///
/// # Arguments
///
/// * `records` - Comparison records in sweep order
/// * `baseline_label` - Column header for the baseline time
/// * `comparison_label` - Column header for the comparison time
/// * `output_path` - Output file path
/// * `config` - Optional CSV configuration (uses default if None)
///
/// # Errors
///
/// - Empty record list
/// - File creation errors
///
/// # Example
///
/// ```rust,ignore
/// export_comparison_csv(&records, "Original", "OpenMP", "openmp.csv", None)?;
/// ```
pub fn export_comparison_csv(
    records: &[ComparisonRecord],
    baseline_label: &str,
    comparison_label: &str,
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {
    // ============================= Validation =============================

    if records.is_empty() {
        return Err("Empty data: comparison records must not be empty".into());
    }

    // ============================= Configuration ==========================

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    // ============================= Open File ==============================

    let mut file = File::create(output_path)?;

    // ============================= Write Metadata =========================

    if configuration.include_metadata
        && let Some(metadata) = &configuration.metadata
    {
        write_metadata_header(&mut file, metadata)?;
    }

    // ============================= Write Header ===========================

    writeln!(
        file,
        "Timesteps{d}{} (s){d}{} (s){d}Speedup{d}Position Diff",
        baseline_label,
        comparison_label,
        d = configuration.delimiter
    )?;

    // ============================= Write Data =============================

    for record in records {
        writeln!(
            file,
            "{}{d}{}{d}{}{d}{}{d}{}",
            record.step_count,
            format_cell(record.baseline.elapsed_seconds(), configuration),
            format_cell(record.comparison.elapsed_seconds(), configuration),
            format_cell(record.speedup, configuration),
            format_cell(record.position_divergence, configuration),
            d = configuration.delimiter
        )?;
    }

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
