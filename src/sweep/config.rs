//! Sweep configuration
//!
//! The sweep parameters are fixed for a whole harness run: one particle
//! count, one ordered sequence of step counts. There is no CLI surface —
//! configuration lives in the harness binary as launch-time constants.

/// Configuration of the comparison sweep
///
/// # Design
///
/// The step counts are an *ordered* sequence: they are executed and
/// reported exactly in the order given. Duplicates are rejected by
/// [`validate`](Self::validate) because the baseline is measured exactly
/// once per distinct step count and a repeated entry would silently
/// re-measure it.
///
/// # Examples
///
/// ```rust
/// use nbody_bench::sweep::SweepConfiguration;
///
/// let config = SweepConfiguration::new(10_000, vec![1, 2, 5, 10, 20, 50, 100, 500]);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SweepConfiguration {
    /// Number of simulated particles, fixed for the entire run
    pub particle_count: u32,

    /// Ordered step counts to sweep, one run per entry per variant
    pub step_counts: Vec<u32>,
}

impl SweepConfiguration {
    /// Create a new configuration
    pub fn new(particle_count: u32, step_counts: Vec<u32>) -> Self {
        Self {
            particle_count,
            step_counts,
        }
    }

    /// Validate that the parameters describe a runnable sweep
    pub fn validate(&self) -> Result<(), String> {
        if self.particle_count == 0 {
            return Err("Particle count must be greater than 0".to_string());
        }
        if self.step_counts.is_empty() {
            return Err("Step counts must not be empty".to_string());
        }
        for (i, step) in self.step_counts.iter().enumerate() {
            if *step == 0 {
                return Err(format!("Step count at position {} must be greater than 0", i));
            }
            if self.step_counts[..i].contains(step) {
                return Err(format!("Duplicate step count {} in sweep", step));
            }
        }
        Ok(())
    }
}

// ================================================================================================
// Tests
// ================================================================================================
