//! Mock executors for driving the sweep without child processes

use std::cell::RefCell;
use std::collections::HashMap;

use nbody_bench::runner::Executor;
use nbody_bench::sweep::{RunResult, Variant};

/// Executor with canned results per (executable, step count)
///
/// Records every call it receives, so tests can assert both the results
/// and the execution pattern (ordering, baseline reuse).
pub struct ScriptedExecutor {
    responses: HashMap<(String, u32), RunResult>,
    calls: RefCell<Vec<(String, u32)>>,
}

impl ScriptedExecutor {
    pub fn new() -> Self {
        Self {
            responses: HashMap::new(),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Builder pattern: register the result for one (executable, step) pair
    ///
    /// Unregistered pairs execute as `RunResult::Unavailable`.
    pub fn respond(mut self, executable: &str, step_count: u32, result: RunResult) -> Self {
        self.responses
            .insert((executable.to_string(), step_count), result);
        self
    }

    /// Every call so far, in execution order
    pub fn calls(&self) -> Vec<(String, u32)> {
        self.calls.borrow().clone()
    }

    /// Number of executions recorded for one executable
    pub fn calls_for(&self, executable: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|(name, _)| name == executable)
            .count()
    }
}

impl Default for ScriptedExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl Executor for ScriptedExecutor {
    fn execute(&self, variant: &Variant, _particle_count: u32, step_count: u32) -> RunResult {
        self.calls
            .borrow_mut()
            .push((variant.executable.clone(), step_count));
        self.responses
            .get(&(variant.executable.clone(), step_count))
            .copied()
            .unwrap_or(RunResult::Unavailable)
    }
}
