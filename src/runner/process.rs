//! Child-process invocation with full stdout capture
//!
//! One function, one contract: launch the program, block until it exits,
//! hand back everything it printed. There is no timeout — the simulated
//! programs are local, trusted executables, and a hung child hangs the
//! harness (accepted limitation of this trust model).

use std::path::Path;
use std::process::Command;

/// Run a program to completion and capture its standard output
///
/// Blocks until the child exits. The exit status is deliberately ignored:
/// whether the output is usable is decided by the parser, not by the exit
/// code (the simulated programs are not required to follow exit-code
/// conventions).
///
/// # Arguments
///
/// * `program` - Path to the executable
/// * `args` - Positional arguments, passed through verbatim
///
/// # Returns
///
/// * `Ok(text)` - the process ran to completion; `text` may be empty
/// * `Err(msg)` - the process could not be launched at all
///
/// The distinction matters: "ran but printed nothing" and "never started"
/// are different failures, even though both end up unmeasurable upstream.
pub fn run_captured(program: &Path, args: &[String]) -> Result<String, String> {
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|e| format!("failed to launch {}: {}", program.display(), e))?;

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

// =================================================================================================
// Tests
// =================================================================================================
