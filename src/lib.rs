//! nbody-bench: Comparative Benchmark Harness for N-Body Simulation Builds
//!
//! A harness for measuring a family of n-body simulation executables against
//! a designated baseline build. Each program is invoked as
//! `<executable> <particleCount> <stepCount>`, its completion summary is
//! parsed, and the harness derives speedup and positional divergence per
//! sweep point, rendered as a console table and a two-panel chart.
//!
//! # Architecture
//!
//! The harness is built on two core principles:
//!
//! 1. **Separation of Measurement and Aggregation**
//!    - The runner layer produces one `RunResult` per invocation
//!    - The sweep layer pairs results and derives comparison metrics
//!
//! 2. **Absence as Signal**
//!    - A failed launch or an unparseable output is `RunResult::Unavailable`
//!    - Callers can never mistake a missing measurement for a real zero
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use nbody_bench::runner::ProcessExecutor;
//! use nbody_bench::sweep::{Sweep, SweepConfiguration, Variant};
//! use nbody_bench::output::report;
//! use nbody_bench::output::visualization::{chart_file_name, plot_comparison};
//!
//! // 1. Declare the builds under comparison
//! let baseline = Variant::new("0_original.exe", "Original");
//! let optimized = Variant::new("1_opt.exe", "Native March");
//!
//! // 2. Configure the sweep
//! let config = SweepConfiguration::new(10_000, vec![1, 2, 5, 10, 20, 50, 100, 500]);
//! let sweep = Sweep::new(baseline, vec![optimized], config);
//! sweep.validate()?;
//!
//! // 3. Run and render
//! let executor = ProcessExecutor::new();
//! for comparison in sweep.run(&executor) {
//!     report::print_comparison(&sweep.baseline.label, &comparison.variant,
//!                              sweep.config.particle_count, &comparison.records);
//!     plot_comparison(&comparison.records, &sweep.baseline.label,
//!                     &comparison.variant.label,
//!                     &chart_file_name(&comparison.variant), None)?;
//! }
//! ```
//!
//! # Modules
//!
//! - [`runner`]: Process invocation, output parsing, the `Executor` seam
//! - [`sweep`]: Sweep configuration, baseline caching, comparison records
//! - [`output`]: Console report, chart rendering and CSV export

// Core modules
pub mod runner;

pub mod sweep;
pub mod output;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use nbody_bench::prelude::*;
    //! ```
    pub use crate::runner::{Executor,
                            ProcessExecutor,
                            parse_run_output};
    pub use crate::sweep::{Variant,
                           SweepConfiguration,
                           Sweep,
                           RunResult,
                           BaselineCache,
                           ComparisonRecord,
                           VariantComparison};
}
