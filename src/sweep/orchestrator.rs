//! Sweep driver
//!
//! Runs the full comparison matrix:
//!
//! 1. Execute the baseline once per step count, caching each result.
//! 2. For each comparison variant, in configured order, execute the same
//!    sweep and pair every measurement with the cached baseline result.
//! 3. Derive one [`ComparisonRecord`] per sweep point — including the
//!    unmeasurable ones, which appear as explicit gaps.
//!
//! Execution is single-threaded and strictly sequential: no two child
//! processes ever run concurrently, and each invocation blocks until the
//! child exits.

use crate::runner::Executor;
use crate::sweep::{BaselineCache, ComparisonRecord, SweepConfiguration, Variant};

/// All comparison records for one variant, in sweep order
#[derive(Debug)]
pub struct VariantComparison {
    /// The comparison variant these records belong to
    pub variant: Variant,

    /// One record per configured step count, in configured order
    pub records: Vec<ComparisonRecord>,
}

/// The comparison sweep: baseline, challengers, and the sweep parameters
///
/// # Design
///
/// The same sweep can be driven by different executors — the production
/// [`ProcessExecutor`](crate::runner::ProcessExecutor) or a scripted test
/// double — which is what makes the aggregation logic testable without
/// spawning processes.
///
/// # Examples
///
/// ```rust,ignore
/// let sweep = Sweep::new(baseline, comparisons, config);
/// sweep.validate()?;
/// let results = sweep.run(&ProcessExecutor::new());
/// ```
#[derive(Debug)]
pub struct Sweep {
    /// Reference build every other variant is measured against
    pub baseline: Variant,

    /// Builds compared against the baseline, in reporting order
    pub comparisons: Vec<Variant>,

    /// Sweep parameters shared by every variant
    pub config: SweepConfiguration,
}

impl Sweep {
    /// Create a sweep
    pub fn new(baseline: Variant, comparisons: Vec<Variant>, config: SweepConfiguration) -> Self {
        Self {
            baseline,
            comparisons,
            config,
        }
    }

    /// Validate the sweep definition
    ///
    /// Checks the configuration parameters and that no executable appears
    /// twice (a duplicated variant would re-measure the same binary and
    /// overwrite its artifacts).
    pub fn validate(&self) -> Result<(), String> {
        self.config.validate()?;

        let mut seen: Vec<&str> = vec![&self.baseline.executable];
        for variant in &self.comparisons {
            if seen.contains(&variant.executable.as_str()) {
                return Err(format!(
                    "Variant executable '{}' appears more than once",
                    variant.executable
                ));
            }
            seen.push(&variant.executable);
        }
        Ok(())
    }

    /// Execute the baseline across the sweep, once per step count
    ///
    /// This is done exactly once per harness run no matter how many
    /// comparison variants follow; the returned cache is read-only input to
    /// [`compare_variant`](Self::compare_variant).
    pub fn baseline_results(&self, executor: &dyn Executor) -> BaselineCache {
        BaselineCache::collect(executor, &self.baseline, &self.config)
    }

    /// Execute one comparison variant across the sweep and derive its records
    ///
    /// Every configured step count yields a record; points where either
    /// measurement is unavailable carry absent metrics rather than being
    /// dropped.
    pub fn compare_variant(
        &self,
        executor: &dyn Executor,
        baseline: &BaselineCache,
        variant: &Variant,
    ) -> Vec<ComparisonRecord> {
        self.config
            .step_counts
            .iter()
            .map(|&step_count| {
                let comparison =
                    executor.execute(variant, self.config.particle_count, step_count);
                ComparisonRecord::derive(step_count, baseline.get(step_count), comparison)
            })
            .collect()
    }

    /// Run the full matrix: baseline once, then every comparison variant
    pub fn run(&self, executor: &dyn Executor) -> Vec<VariantComparison> {
        let baseline = self.baseline_results(executor);

        self.comparisons
            .iter()
            .map(|variant| VariantComparison {
                variant: variant.clone(),
                records: self.compare_variant(executor, &baseline, variant),
            })
            .collect()
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sweep::RunResult;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Executor with canned results per (executable, step count)
    struct ScriptedExecutor {
        responses: HashMap<(String, u32), RunResult>,
        calls: RefCell<Vec<(String, u32)>>,
    }

    impl ScriptedExecutor {
        fn new() -> Self {
            Self {
                responses: HashMap::new(),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn respond(mut self, executable: &str, step: u32, result: RunResult) -> Self {
            self.responses.insert((executable.to_string(), step), result);
            self
        }

        fn calls_for(&self, executable: &str) -> usize {
            self.calls
                .borrow()
                .iter()
                .filter(|(name, _)| name == executable)
                .count()
        }
    }

    impl Executor for ScriptedExecutor {
        fn execute(&self, variant: &Variant, _particles: u32, step_count: u32) -> RunResult {
            self.calls
                .borrow_mut()
                .push((variant.executable.clone(), step_count));
            self.responses
                .get(&(variant.executable.clone(), step_count))
                .copied()
                .unwrap_or(RunResult::Unavailable)
        }
    }

    fn two_variant_sweep() -> Sweep {
        Sweep::new(
            Variant::new("a", "A"),
            vec![Variant::new("b", "B")],
            SweepConfiguration::new(10_000, vec![1, 10]),
        )
    }

    #[test]
    fn test_validate_accepts_distinct_variants() {
        assert!(two_variant_sweep().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_duplicate_executable() {
        let sweep = Sweep::new(
            Variant::new("a", "A"),
            vec![Variant::new("a", "A again")],
            SweepConfiguration::new(100, vec![1]),
        );
        assert!(sweep.validate().unwrap_err().contains("'a'"));
    }

    #[test]
    fn test_validate_propagates_config_errors() {
        let sweep = Sweep::new(
            Variant::new("a", "A"),
            vec![Variant::new("b", "B")],
            SweepConfiguration::new(0, vec![1]),
        );
        assert!(sweep.validate().is_err());
    }

    #[test]
    fn test_reference_scenario_speedups_and_divergence() {
        // Baseline A: step 1 → 2.0s @ (1,2); step 10 → 5.0s @ (3,4)
        // Variant  B: step 1 → 1.0s @ (1,2); step 10 → 2.5s @ (3,4.0001)
        let executor = ScriptedExecutor::new()
            .respond("a", 1, RunResult::measured(2.0, 1.0, 2.0))
            .respond("a", 10, RunResult::measured(5.0, 3.0, 4.0))
            .respond("b", 1, RunResult::measured(1.0, 1.0, 2.0))
            .respond("b", 10, RunResult::measured(2.5, 3.0, 4.0001));

        let results = two_variant_sweep().run(&executor);
        assert_eq!(results.len(), 1);
        let records = &results[0].records;

        assert_eq!(records[0].speedup, Some(2.0));
        assert_eq!(records[1].speedup, Some(2.0));
        assert_eq!(records[0].position_divergence, Some(0.0));
        assert!((records[1].position_divergence.unwrap() - 0.0001).abs() < 1e-10);
    }

    #[test]
    fn test_baseline_executed_once_per_step_count() {
        let executor = ScriptedExecutor::new();
        let sweep = Sweep::new(
            Variant::new("base", "Base"),
            vec![
                Variant::new("v1", "One"),
                Variant::new("v2", "Two"),
                Variant::new("v3", "Three"),
            ],
            SweepConfiguration::new(100, vec![1, 10, 100]),
        );

        sweep.run(&executor);

        // 3 step counts → exactly 3 baseline runs, however many challengers
        assert_eq!(executor.calls_for("base"), 3);
        assert_eq!(executor.calls_for("v1"), 3);
        assert_eq!(executor.calls_for("v3"), 3);
    }

    #[test]
    fn test_variants_and_steps_processed_in_configured_order() {
        let executor = ScriptedExecutor::new();
        let sweep = Sweep::new(
            Variant::new("base", "Base"),
            vec![Variant::new("v2", "Two"), Variant::new("v1", "One")],
            SweepConfiguration::new(100, vec![50, 1]),
        );

        sweep.run(&executor);

        let calls = executor.calls.borrow();
        let expected: Vec<(String, u32)> = [
            ("base", 50),
            ("base", 1),
            ("v2", 50),
            ("v2", 1),
            ("v1", 50),
            ("v1", 1),
        ]
        .iter()
        .map(|(name, step)| (name.to_string(), *step))
        .collect();
        assert_eq!(*calls, expected);
    }

    #[test]
    fn test_unmeasurable_points_still_produce_records() {
        // Variant B has no scripted response at step 10 → Unavailable there
        let executor = ScriptedExecutor::new()
            .respond("a", 1, RunResult::measured(2.0, 0.0, 0.0))
            .respond("a", 10, RunResult::measured(4.0, 0.0, 0.0))
            .respond("b", 1, RunResult::measured(1.0, 0.0, 0.0));

        let results = two_variant_sweep().run(&executor);
        let records = &results[0].records;

        assert_eq!(records.len(), 2);
        assert!(records[0].is_measurable());
        assert!(!records[1].is_measurable());
        assert_eq!(records[1].step_count, 10);
    }

    #[test]
    fn test_fully_failing_variant_never_aborts_the_sweep() {
        let executor = ScriptedExecutor::new()
            .respond("a", 1, RunResult::measured(2.0, 0.0, 0.0))
            .respond("a", 10, RunResult::measured(4.0, 0.0, 0.0));

        let results = two_variant_sweep().run(&executor);
        let records = &results[0].records;

        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| !r.is_measurable()));
    }
}
