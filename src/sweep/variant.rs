//! Simulation build identity
//!
//! A variant names one program binary under comparison.

/// One simulation build under comparison
///
/// Defined statically at harness configuration time and immutable for the
/// run. The executable name doubles as the identity used to derive artifact
/// file names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variant {
    /// Executable file name (e.g. `"0_original.exe"`)
    pub executable: String,

    /// Human-readable label for tables and chart legends
    pub label: String,
}

impl Variant {
    /// Create a variant
    pub fn new(executable: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
            label: label.into(),
        }
    }

    /// Executable name with any extension stripped
    ///
    /// `"3_openmp.exe"` → `"3_openmp"`. Used as the deterministic stem for
    /// per-variant artifact files.
    pub fn file_stem(&self) -> &str {
        self.executable
            .split('.')
            .next()
            .unwrap_or(self.executable.as_str())
    }
}

// ================================================================================================
// Tests
// ================================================================================================
