//! Sweep orchestration and comparison aggregation
//!
//! This module owns the comparison matrix: which builds run, at which step
//! counts, and how their measurements are paired and reduced.
//!
//! # Core Concepts
//!
//! ## The Architecture (WHAT vs HOW)
//!
//! The sweep layer separates concerns into three pieces:
//!
//! 1. **Configuration** (`SweepConfiguration`, `Variant`) - WHAT to measure
//!    - Fixed particle count, ordered step counts
//!    - Baseline and comparison builds
//!
//! 2. **Measurements** (`RunResult`, `BaselineCache`) - the raw data
//!    - One `RunResult` per (variant, step count)
//!    - Baseline results collected once, reused for every comparison
//!
//! 3. **Derivation** (`ComparisonRecord`, `Sweep`) - the comparison
//!    - Speedup = baseline time / comparison time
//!    - Positional divergence = Euclidean distance of final positions
//!
//! # Ordering Guarantees
//!
//! Step counts and variants are processed strictly in configured order; no
//! reordering, deduplication or parallel execution. The harness's own logic
//! is deterministic — the measured wall-clock times are not, which is a
//! property of the domain rather than a defect to fix here.
//!
//! # Quick Start Example
//!
//! ```rust,ignore
//! use nbody_bench::sweep::{Sweep, SweepConfiguration, Variant};
//! use nbody_bench::runner::ProcessExecutor;
//!
//! let sweep = Sweep::new(
//!     Variant::new("0_original.exe", "Original"),
//!     vec![Variant::new("4_final.exe", "Final (Barnes-Hut)")],
//!     SweepConfiguration::new(10_000, vec![1, 10, 100]),
//! );
//! sweep.validate()?;
//!
//! for comparison in sweep.run(&ProcessExecutor::new()) {
//!     for record in &comparison.records {
//!         println!("{:?}", record.speedup);
//!     }
//! }
//! ```

// =================================================================================================
// Module Declarations
// =================================================================================================
mod variant;
mod config;
mod record;
mod cache;
mod orchestrator;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use variant::Variant;
pub use config::SweepConfiguration;
pub use record::{ComparisonRecord, RunResult};
pub use cache::BaselineCache;
pub use orchestrator::{Sweep, VariantComparison};
