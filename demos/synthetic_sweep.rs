//! Synthetic end-to-end sweep
//!
//! Fabricates two fake simulator scripts — a slow "baseline" and a fast
//! "optimized" build — then drives the whole harness against them: sweep,
//! console table, chart, CSV. Useful for seeing the full pipeline work
//! without compiling any real simulation binaries.
//!
//! ```bash
//! cargo run --example synthetic_sweep
//! ```
//!
//! Artifacts are written into the current directory.

#[cfg(unix)]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    use nbody_bench::output::export::{CsvConfig, CsvMetadata, export_comparison_csv};
    use nbody_bench::output::report;
    use nbody_bench::output::visualization::{chart_file_name, plot_comparison};
    use nbody_bench::runner::ProcessExecutor;
    use nbody_bench::sweep::{Sweep, SweepConfiguration, Variant};

    const PARTICLE_COUNT: u32 = 10_000;

    let dir = tempfile::tempdir()?;

    // Fake baseline: pretends each step costs 2ms, drifts slightly per step
    let baseline_script = dir.path().join("slow_sim");
    fs::write(
        &baseline_script,
        "#!/bin/sh\n\
         steps=$2\n\
         time=$(echo \"$steps\" | awk '{ printf \"%.6f\", $1 * 0.002 }')\n\
         x=$(echo \"$steps\" | awk '{ printf \"%.6f\", 1.5 + $1 * 0.0001 }')\n\
         echo \"Total time to run simulation $time seconds, final location $x 2.5\"\n",
    )?;
    fs::set_permissions(&baseline_script, fs::Permissions::from_mode(0o755))?;

    // Fake optimized build: 4x faster, slightly different trajectory
    let optimized_script = dir.path().join("fast_sim");
    fs::write(
        &optimized_script,
        "#!/bin/sh\n\
         steps=$2\n\
         time=$(echo \"$steps\" | awk '{ printf \"%.6f\", $1 * 0.0005 }')\n\
         x=$(echo \"$steps\" | awk '{ printf \"%.6f\", 1.5 + $1 * 0.000100009 }')\n\
         echo \"Total time to run simulation $time seconds, final location $x 2.5\"\n",
    )?;
    fs::set_permissions(&optimized_script, fs::Permissions::from_mode(0o755))?;

    let sweep = Sweep::new(
        Variant::new("slow_sim", "Baseline"),
        vec![Variant::new("fast_sim", "Optimized")],
        SweepConfiguration::new(PARTICLE_COUNT, vec![1, 2, 5, 10, 20, 50, 100, 500]),
    );
    sweep.validate()?;

    let executor = ProcessExecutor::in_directory(dir.path());

    println!("Running baseline (slow_sim) for all step counts...");
    let baseline_results = sweep.baseline_results(&executor);

    for variant in &sweep.comparisons {
        let records = sweep.compare_variant(&executor, &baseline_results, variant);

        report::print_comparison(&sweep.baseline.label, variant, PARTICLE_COUNT, &records);

        let chart = chart_file_name(variant);
        plot_comparison(&records, &sweep.baseline.label, &variant.label, &chart, None)?;
        println!("\nChart written to {}", chart);

        let csv = format!("performance_comparison_{}.csv", variant.file_stem());
        let config = CsvConfig::default().with_metadata(CsvMetadata::from_sweep(
            &sweep.baseline.label,
            &variant.label,
            PARTICLE_COUNT,
        ));
        export_comparison_csv(&records, &sweep.baseline.label, &variant.label, &csv, Some(&config))?;
        println!("Data written to {}", csv);
    }

    Ok(())
}

#[cfg(not(unix))]
fn main() {
    eprintln!("synthetic_sweep fabricates shell scripts and only runs on unix hosts");
}
