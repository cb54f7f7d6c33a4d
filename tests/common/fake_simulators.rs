//! Fake simulator executables for end-to-end tests
//!
//! Installs small shell scripts that imitate the output contract of the
//! real simulation builds, so the full spawn → capture → parse path can be
//! exercised against controlled outputs. Unix-only (shell scripts + mode
//! bits), which is why the module is cfg-gated in `mod.rs`.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

/// Write an executable shell script into `dir` and return its name
pub fn install_script(dir: &Path, name: &str, body: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    name.to_string()
}

/// Simulator that prints the same completion summary for every invocation
pub fn install_fixed_simulator(dir: &Path, name: &str, time: f64, x: f64, y: f64) -> String {
    install_script(
        dir,
        name,
        &format!(
            "echo \"Total time to run simulation {:.6} seconds, final location {:.6} {:.6}\"",
            time, x, y
        ),
    )
}

/// Simulator whose summary depends on the step-count argument (`$2`)
///
/// `outputs` maps a step count to `(time, x, y)`; any other step count
/// produces no output at all (unmeasurable).
pub fn install_stepped_simulator(
    dir: &Path,
    name: &str,
    outputs: &[(u32, (f64, f64, f64))],
) -> String {
    let mut body = String::from("case \"$2\" in\n");
    for (step, (time, x, y)) in outputs {
        body.push_str(&format!(
            "  {}) echo \"Total time to run simulation {:.6} seconds, final location {:.6} {:.6}\" ;;\n",
            step, time, x, y
        ));
    }
    body.push_str("esac");
    install_script(dir, name, &body)
}
