//! Measurement and comparison result types
//!
//! # Absence as Signal
//!
//! A measurement either exists completely — elapsed time *and* final
//! position — or not at all. [`RunResult`] is a sum type so that callers
//! cannot accidentally treat a missing measurement as a real zero; there is
//! no half-parsed state. The derived [`ComparisonRecord`] follows the same
//! discipline with `Option` fields: `None` means "unmeasurable at this
//! point", which the renderers show explicitly rather than dropping.

use nalgebra::Point2;

// =================================================================================================
// Run Result
// =================================================================================================

/// Outcome of executing one variant at one sweep point
///
/// # Invariant
///
/// Elapsed time and final position are either both present (`Measured`) or
/// both absent (`Unavailable`). A partial parse is treated as total failure
/// by the runner layer and never reaches this type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RunResult {
    /// The run completed and its summary parsed cleanly
    Measured {
        /// Wall-clock seconds reported by the program
        elapsed_seconds: f64,
        /// Final position of the reference particle
        final_position: Point2<f64>,
    },

    /// No usable measurement (launch failure or unparseable output)
    Unavailable,
}

impl RunResult {
    /// Construct a measured result from its three numbers
    pub fn measured(elapsed_seconds: f64, x: f64, y: f64) -> Self {
        RunResult::Measured {
            elapsed_seconds,
            final_position: Point2::new(x, y),
        }
    }

    /// Whether a usable measurement exists
    pub fn is_measured(&self) -> bool {
        matches!(self, RunResult::Measured { .. })
    }

    /// Elapsed seconds, when measured
    pub fn elapsed_seconds(&self) -> Option<f64> {
        match self {
            RunResult::Measured { elapsed_seconds, .. } => Some(*elapsed_seconds),
            RunResult::Unavailable => None,
        }
    }

    /// Final position, when measured
    pub fn final_position(&self) -> Option<Point2<f64>> {
        match self {
            RunResult::Measured { final_position, .. } => Some(*final_position),
            RunResult::Unavailable => None,
        }
    }
}

// =================================================================================================
// Comparison Record
// =================================================================================================

/// Derived comparison for one (comparison variant, step count) pair
///
/// # Derivation Rules
///
/// With both runs measured:
/// - `speedup = baseline_time / comparison_time`, but `None` when the
///   comparison time is not strictly positive (a zero-duration measurement
///   cannot yield a meaningful ratio — explicitly undefined, never a
///   division fault)
/// - `position_divergence = |baseline_position - comparison_position|`
///   (Euclidean), always ≥ 0
///
/// With either run unavailable, both derived fields are `None` and the
/// record still exists: unmeasurable points appear in every report as
/// explicit gaps, never silently dropped.
///
/// # Examples
///
/// ```rust
/// use nbody_bench::sweep::{ComparisonRecord, RunResult};
///
/// let record = ComparisonRecord::derive(
///     10,
///     RunResult::measured(5.0, 3.0, 4.0),
///     RunResult::measured(2.5, 3.0, 4.0001),
/// );
/// assert_eq!(record.speedup, Some(2.0));
/// assert!((record.position_divergence.unwrap() - 0.0001).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonRecord {
    /// Step count of this sweep point
    pub step_count: u32,

    /// Baseline measurement at this step count
    pub baseline: RunResult,

    /// Comparison measurement at this step count
    pub comparison: RunResult,

    /// Baseline time / comparison time, when both defined and ratio meaningful
    pub speedup: Option<f64>,

    /// Euclidean distance between the two final positions, when both defined
    pub position_divergence: Option<f64>,
}

impl ComparisonRecord {
    /// Derive the comparison metrics for one sweep point
    pub fn derive(step_count: u32, baseline: RunResult, comparison: RunResult) -> Self {
        let (speedup, position_divergence) = match (&baseline, &comparison) {
            (
                RunResult::Measured {
                    elapsed_seconds: baseline_seconds,
                    final_position: baseline_position,
                },
                RunResult::Measured {
                    elapsed_seconds: comparison_seconds,
                    final_position: comparison_position,
                },
            ) => {
                let speedup = if *comparison_seconds > 0.0 {
                    Some(baseline_seconds / comparison_seconds)
                } else {
                    None
                };
                let divergence = (baseline_position - comparison_position).norm();
                (speedup, Some(divergence))
            }
            _ => (None, None),
        };

        Self {
            step_count,
            baseline,
            comparison,
            speedup,
            position_divergence,
        }
    }

    /// Whether any derived metric exists at this point
    pub fn is_measurable(&self) -> bool {
        self.position_divergence.is_some()
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measured_accessors() {
        let result = RunResult::measured(1.5, -3.0, 4.0);
        assert!(result.is_measured());
        assert_eq!(result.elapsed_seconds(), Some(1.5));
        let position = result.final_position().unwrap();
        assert_eq!((position.x, position.y), (-3.0, 4.0));
    }

    #[test]
    fn test_unavailable_accessors() {
        let result = RunResult::Unavailable;
        assert!(!result.is_measured());
        assert_eq!(result.elapsed_seconds(), None);
        assert_eq!(result.final_position(), None);
    }

    #[test]
    fn test_derive_speedup_and_divergence() {
        let record = ComparisonRecord::derive(
            1,
            RunResult::measured(2.0, 1.0, 2.0),
            RunResult::measured(1.0, 1.0, 2.0),
        );
        assert_eq!(record.speedup, Some(2.0));
        assert_eq!(record.position_divergence, Some(0.0));
        assert!(record.is_measurable());
    }

    #[test]
    fn test_derive_divergence_is_euclidean() {
        // 3-4-5 triangle between final positions
        let record = ComparisonRecord::derive(
            1,
            RunResult::measured(1.0, 0.0, 0.0),
            RunResult::measured(1.0, 3.0, 4.0),
        );
        assert_eq!(record.position_divergence, Some(5.0));
    }

    #[test]
    fn test_zero_comparison_time_has_no_speedup() {
        let record = ComparisonRecord::derive(
            1,
            RunResult::measured(2.0, 0.0, 0.0),
            RunResult::measured(0.0, 0.0, 0.0),
        );
        // Undefined ratio — but the positions still compare
        assert_eq!(record.speedup, None);
        assert_eq!(record.position_divergence, Some(0.0));
    }

    #[test]
    fn test_negative_comparison_time_has_no_speedup() {
        let record = ComparisonRecord::derive(
            1,
            RunResult::measured(2.0, 0.0, 0.0),
            RunResult::measured(-1.0, 0.0, 0.0),
        );
        assert_eq!(record.speedup, None);
    }

    #[test]
    fn test_unavailable_baseline_absents_both_metrics() {
        let record = ComparisonRecord::derive(
            1,
            RunResult::Unavailable,
            RunResult::measured(1.0, 0.0, 0.0),
        );
        assert_eq!(record.speedup, None);
        assert_eq!(record.position_divergence, None);
        assert!(!record.is_measurable());
    }

    #[test]
    fn test_unavailable_comparison_absents_both_metrics() {
        let record = ComparisonRecord::derive(
            1,
            RunResult::measured(1.0, 0.0, 0.0),
            RunResult::Unavailable,
        );
        assert_eq!(record.speedup, None);
        assert_eq!(record.position_divergence, None);
    }

    #[test]
    fn test_divergence_never_negative() {
        let record = ComparisonRecord::derive(
            1,
            RunResult::measured(1.0, -5.0, -5.0),
            RunResult::measured(1.0, -8.0, -9.0),
        );
        assert_eq!(record.position_divergence, Some(5.0));
        assert!(record.position_divergence.unwrap() >= 0.0);
    }
}
