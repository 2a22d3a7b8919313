/*!
 * Command-line interface for bundlefs
 */

use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use bundlefs::config::{Args, Config};
use bundlefs::error::Result;
use bundlefs::merger::Merger;
use bundlefs::report::{BundleReport, ReportFormat, Reporter};
use bundlefs::utils::{count_files, reset_directory, run_timestamp};

fn main() -> Result<()> {
    // No options to consume; this still provides --help and --version
    Args::parse();

    let config = Config::standard();

    // Scratch reset is the one fatal failure: nothing below can run without it
    reset_directory(&config.scratch_dir)?;

    // One timestamp shared by every bundle in this run
    let timestamp = run_timestamp();

    // Create progress bar with advanced Unicode styling
    let progress = ProgressBar::new(0);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos}/{len} ({percent}%) ⏱️  Elapsed: {elapsed_precise}")
            .unwrap(),
    );
    progress.enable_steady_tick(std::time::Duration::from_millis(100));
    progress.set_prefix("📊 Setup");

    // Count files for progress tracking
    match count_files(&config) {
        Ok(count) => {
            progress.set_length(count);
            progress.set_message(format!("🔎 Found {} files to bundle", count));
        }
        Err(e) => progress.set_message(format!("⚠️ Warning: Failed to count files: {}", e)),
    }

    progress.set_prefix("📊 Merging");

    let merger = Merger::new(Arc::new(progress.clone()));
    let start_time = Instant::now();

    let mut merges = Vec::with_capacity(config.sources.len());
    for source in &config.sources {
        let output = config
            .scratch_dir
            .join(format!("{}_{}.txt", timestamp, source.label()));

        // A merge that cannot open or write its own bundle is contained here;
        // the remaining source sets still run
        match merger.merge(source, &output) {
            Ok(summary) => merges.push(summary),
            Err(e) => eprintln!("Error merging '{}': {}", source.label(), e),
        }
    }

    let duration = start_time.elapsed();
    progress.finish_and_clear();

    let report = BundleReport {
        scratch_dir: config.scratch_dir.display().to_string(),
        duration,
        merges,
    };
    Reporter::new(ReportFormat::ConsoleTable).print_report(&report);

    Ok(())
}
