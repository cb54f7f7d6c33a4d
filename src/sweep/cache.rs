//! Baseline result cache
//!
//! The baseline build is the most expensive part of the matrix — it is the
//! slowest variant by construction — so its results are collected exactly
//! once per sweep and reused for every comparison variant. The cache is an
//! explicit value owned by the run, constructed fresh each invocation of
//! the harness; there is no global or static state to leak between runs.

use std::collections::HashMap;

use crate::runner::Executor;
use crate::sweep::{RunResult, SweepConfiguration, Variant};

/// Baseline measurements keyed by step count
///
/// # Invariant
///
/// Populated once by [`collect`](Self::collect) — one entry per step count
/// in the configured sweep — and never mutated afterwards (single writer,
/// then many readers within one run).
#[derive(Debug)]
pub struct BaselineCache {
    results: HashMap<u32, RunResult>,
}

impl BaselineCache {
    /// Execute the baseline once per configured step count, in order
    pub fn collect(
        executor: &dyn Executor,
        baseline: &Variant,
        config: &SweepConfiguration,
    ) -> Self {
        let mut results = HashMap::with_capacity(config.step_counts.len());
        for &step_count in &config.step_counts {
            let result = executor.execute(baseline, config.particle_count, step_count);
            results.insert(step_count, result);
        }
        Self { results }
    }

    /// Baseline result for a step count
    ///
    /// Step counts outside the configured sweep report `Unavailable`, the
    /// same containment the rest of the harness uses for missing data.
    pub fn get(&self, step_count: u32) -> RunResult {
        self.results
            .get(&step_count)
            .copied()
            .unwrap_or(RunResult::Unavailable)
    }

    /// Number of cached sweep points
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether the cache holds no points
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

// =================================================================================================
// Tests
// =================================================================================================
