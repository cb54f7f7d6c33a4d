//! Variant execution: one build, one sweep point, one measurement
//!
//! # The `Executor` Seam
//!
//! The sweep orchestrator never talks to the operating system directly; it
//! drives anything implementing [`Executor`]. The production implementation
//! is [`ProcessExecutor`] (spawn, capture, parse); tests substitute scripted
//! executors to exercise the aggregation logic without child processes.
//!
//! # Containment
//!
//! `execute` is total: every launch or parse failure becomes
//! [`RunResult::Unavailable`]. Callers never need to distinguish "process
//! failed to start" from "output didn't match the grammar" — both mean
//! "skip this point in aggregation". Grammar drift (marker present, token
//! malformed) is additionally reported on stderr before containment,
//! because it signals a regression in the producing program rather than a
//! transient unavailability.

use std::path::PathBuf;

use crate::runner::parser::parse_run_output;
use crate::runner::process::run_captured;
use crate::sweep::{RunResult, Variant};

// =================================================================================================
// Executor Trait
// =================================================================================================

/// Trait for executing one variant at one sweep point
///
/// # Responsibility
/// Produce the measurement for `(variant, particle_count, step_count)`.
/// Does NOT aggregate or compare (that's the sweep layer's job).
///
/// # Mandatory Point
/// Implementations must be total: a failure to measure is
/// `RunResult::Unavailable`, never a panic or an error to the caller.
pub trait Executor {
    /// Execute `variant` with the given particle and step counts
    fn execute(&self, variant: &Variant, particle_count: u32, step_count: u32) -> RunResult;
}

// =================================================================================================
// Process-Backed Executor
// =================================================================================================

/// Executor that runs real simulation binaries as child processes
///
/// Invokes `<directory>/<executable> <particle_count> <step_count>` and
/// parses the captured output. The directory defaults to the current
/// working directory, matching the `./name` invocation convention of the
/// simulated builds.
///
/// # Example
///
/// ```rust,ignore
/// use nbody_bench::runner::{Executor, ProcessExecutor};
/// use nbody_bench::sweep::Variant;
///
/// let executor = ProcessExecutor::new();
/// let result = executor.execute(&Variant::new("0_original.exe", "Original"), 10_000, 5);
/// ```
#[derive(Debug, Clone)]
pub struct ProcessExecutor {
    /// Directory the executables live in
    directory: PathBuf,
}

impl ProcessExecutor {
    /// Executor for binaries in the current working directory
    pub fn new() -> Self {
        Self::in_directory(".")
    }

    /// Executor for binaries in a specific directory
    pub fn in_directory(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }
}

impl Default for ProcessExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl Executor for ProcessExecutor {
    fn execute(&self, variant: &Variant, particle_count: u32, step_count: u32) -> RunResult {
        let program = self.directory.join(&variant.executable);
        let args = [particle_count.to_string(), step_count.to_string()];

        let raw = match run_captured(&program, &args) {
            Ok(text) => text,
            // Launch failure: ordinary unavailability, contained quietly
            Err(_) => return RunResult::Unavailable,
        };

        match parse_run_output(&raw) {
            Ok(result) => result,
            Err(message) => {
                // Grammar drift is a regression in the producing program —
                // report it loudly, then contain it like any other failure
                eprintln!("{}: {}", variant.executable, message);
                RunResult::Unavailable
            }
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_executable_is_unavailable() {
        let executor = ProcessExecutor::new();
        let variant = Variant::new("no_such_simulator.exe", "Ghost");
        assert_eq!(executor.execute(&variant, 100, 1), RunResult::Unavailable);
    }

    #[test]
    fn test_default_directory_is_cwd() {
        let executor = ProcessExecutor::default();
        assert_eq!(executor.directory, PathBuf::from("."));
    }

    #[test]
    #[cfg(unix)]
    fn test_non_grammar_output_is_unavailable() {
        // /bin/echo prints its arguments — no completion marker
        let executor = ProcessExecutor::in_directory("/bin");
        let variant = Variant::new("echo", "Echo");
        assert_eq!(executor.execute(&variant, 10, 2), RunResult::Unavailable);
    }
}
