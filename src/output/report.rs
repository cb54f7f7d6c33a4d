//! Console comparison table
//!
//! One table per comparison variant: step count, baseline time, comparison
//! time, speedup and positional divergence, one row per sweep point.
//!
//! Absent values render as `N/A` — never as zero, never as an empty cell —
//! so a reader can always tell "this point was unmeasurable" apart from
//! "this point measured zero".
//!
//! # Example Output
//!
//! ```text
//! Comparing 4_final.exe vs 0_original.exe
//! Testing with 10000 particles
//! -------------------------------
//! Timesteps  Original (s)    Final (Barnes-Hut) (s) Speedup    Position Diff
//! -------------------------------
//! 1          2.000000        1.000000        2.00       0.000000e0
//! 10         N/A             N/A             N/A        N/A
//! ```

use crate::sweep::{ComparisonRecord, Variant};

/// Marker printed in place of any absent value
const NOT_AVAILABLE: &str = "N/A";

/// Format one optional value with fixed decimal precision, or `N/A`
fn decimal_cell(value: Option<f64>, precision: usize) -> String {
    match value {
        Some(v) => format!("{:.prec$}", v, prec = precision),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Format one optional value in scientific notation, or `N/A`
fn scientific_cell(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.6e}", v),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Build the comparison table for one variant as a string
///
/// Returned as a value (rather than printed directly) so the exact cell
/// contents are testable; [`print_comparison`] adds the surrounding header
/// lines and sends everything to stdout.
pub fn comparison_table(
    baseline_label: &str,
    comparison_label: &str,
    records: &[ComparisonRecord],
) -> String {
    let mut table = String::new();

    table.push_str(&format!(
        "{:<10} {:<15} {:<22} {:<10} {:<15}\n",
        "Timesteps",
        format!("{} (s)", baseline_label),
        format!("{} (s)", comparison_label),
        "Speedup",
        "Position Diff"
    ));
    table.push_str("-------------------------------\n");

    for record in records {
        table.push_str(&format!(
            "{:<10} {:<15} {:<22} {:<10} {:<15}\n",
            record.step_count,
            decimal_cell(record.baseline.elapsed_seconds(), 6),
            decimal_cell(record.comparison.elapsed_seconds(), 6),
            decimal_cell(record.speedup, 2),
            scientific_cell(record.position_divergence),
        ));
    }

    table
}

/// Print the full comparison report for one variant to stdout
pub fn print_comparison(
    baseline_label: &str,
    variant: &Variant,
    particle_count: u32,
    records: &[ComparisonRecord],
) {
    println!("\nComparing {} vs {}", variant.label, baseline_label);
    println!("Testing with {} particles", particle_count);
    println!("-------------------------------");
    print!("{}", comparison_table(baseline_label, &variant.label, records));
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sweep::RunResult;

    fn measured_record() -> ComparisonRecord {
        ComparisonRecord::derive(
            10,
            RunResult::measured(5.0, 3.0, 4.0),
            RunResult::measured(2.5, 3.0, 4.0001),
        )
    }

    fn unmeasurable_record() -> ComparisonRecord {
        ComparisonRecord::derive(20, RunResult::Unavailable, RunResult::Unavailable)
    }

    #[test]
    fn test_measured_row_contains_all_values() {
        let table = comparison_table("Original", "Final", &[measured_record()]);
        let row = table.lines().nth(2).unwrap();

        assert!(row.starts_with("10"));
        assert!(row.contains("5.000000"));
        assert!(row.contains("2.500000"));
        assert!(row.contains("2.00"));
        assert!(row.contains("1.000000e-4"));
    }

    #[test]
    fn test_unmeasurable_row_is_all_not_available() {
        let table = comparison_table("Original", "Final", &[unmeasurable_record()]);
        let row = table.lines().nth(2).unwrap();

        assert_eq!(row.matches(NOT_AVAILABLE).count(), 4);
        // The step count itself is always printed
        assert!(row.starts_with("20"));
    }

    #[test]
    fn test_zero_speedup_sentinel_renders_not_available() {
        // Comparison time of zero: speedup undefined, divergence still real
        let record = ComparisonRecord::derive(
            5,
            RunResult::measured(2.0, 0.0, 0.0),
            RunResult::measured(0.0, 0.0, 0.0),
        );
        let table = comparison_table("Original", "Final", &[record]);
        let row = table.lines().nth(2).unwrap();

        assert_eq!(row.matches(NOT_AVAILABLE).count(), 1);
        assert!(row.contains("0.000000e0"));
    }

    #[test]
    fn test_header_names_both_variants() {
        let table = comparison_table("Original", "OpenMP", &[]);
        let header = table.lines().next().unwrap();

        assert!(header.contains("Original (s)"));
        assert!(header.contains("OpenMP (s)"));
        assert!(header.contains("Timesteps"));
        assert!(header.contains("Speedup"));
        assert!(header.contains("Position Diff"));
    }

    #[test]
    fn test_one_row_per_record_in_order() {
        let table = comparison_table(
            "Original",
            "Final",
            &[measured_record(), unmeasurable_record()],
        );
        let rows: Vec<&str> = table.lines().skip(2).collect();

        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("10"));
        assert!(rows[1].starts_with("20"));
    }

    #[test]
    fn test_absent_values_never_render_as_zero() {
        let table = comparison_table("Original", "Final", &[unmeasurable_record()]);
        let row = table.lines().nth(2).unwrap();

        assert!(!row.contains("0.000000"));
    }
}
