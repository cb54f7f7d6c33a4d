//! Benchmark harness entry point
//!
//! Runs the full comparison matrix over the simulation builds listed below
//! and renders one console table, one chart and one CSV file per comparison
//! variant. All sweep parameters are launch-time constants — there is no
//! command-line surface; edit the constants and rebuild.

use std::error::Error;

use nbody_bench::output::export::{CsvConfig, CsvMetadata, export_comparison_csv};
use nbody_bench::output::report;
use nbody_bench::output::visualization::{chart_file_name, plot_comparison};
use nbody_bench::runner::ProcessExecutor;
use nbody_bench::sweep::{Sweep, SweepConfiguration, Variant};

/// Simulation builds under test; the first entry is the baseline
const EXECUTABLES: [&str; 5] = [
    "0_original.exe",
    "1_opt.exe",
    "2_mem.exe",
    "3_openmp.exe",
    "4_final.exe",
];

/// Human-readable labels, same order as [`EXECUTABLES`]
const LABELS: [&str; 5] = [
    "Original",
    "Native March",
    "Preallocation",
    "OpenMP",
    "Final (Barnes-Hut)",
];

/// Particle count, fixed for the whole run
const PARTICLE_COUNT: u32 = 10_000;

/// Step counts to sweep, in execution and reporting order
const STEP_COUNTS: [u32; 8] = [1, 2, 5, 10, 20, 50, 100, 500];

fn main() -> Result<(), Box<dyn Error>> {
    let mut variants = EXECUTABLES
        .iter()
        .zip(LABELS.iter())
        .map(|(executable, label)| Variant::new(*executable, *label));

    let baseline = variants.next().ok_or("no variants configured")?;
    let comparisons: Vec<Variant> = variants.collect();

    let sweep = Sweep::new(
        baseline,
        comparisons,
        SweepConfiguration::new(PARTICLE_COUNT, STEP_COUNTS.to_vec()),
    );
    sweep.validate()?;

    let executor = ProcessExecutor::new();

    println!(
        "Running baseline ({}) for all step counts...",
        sweep.baseline.executable
    );
    let baseline_results = sweep.baseline_results(&executor);

    for variant in &sweep.comparisons {
        let records = sweep.compare_variant(&executor, &baseline_results, variant);

        report::print_comparison(&sweep.baseline.label, variant, PARTICLE_COUNT, &records);

        plot_comparison(
            &records,
            &sweep.baseline.label,
            &variant.label,
            &chart_file_name(variant),
            None,
        )?;

        let csv_config = CsvConfig::default().with_metadata(CsvMetadata::from_sweep(
            &sweep.baseline.label,
            &variant.label,
            PARTICLE_COUNT,
        ));
        export_comparison_csv(
            &records,
            &sweep.baseline.label,
            &variant.label,
            &format!("performance_comparison_{}.csv", variant.file_stem()),
            Some(&csv_config),
        )?;
    }

    Ok(())
}
