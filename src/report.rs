/*!
 * Reporting functionality for bundlefs
 *
 * Provides functionality for generating formatted reports of bundling runs
 * using the tabled library for clean, consistent table rendering.
 */

use std::time::Duration;

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::types::MergeSummary;
use crate::utils::format_file_size;

/// Statistics for one full bundling run
#[derive(Debug, Clone)]
pub struct BundleReport {
    /// Scratch directory that received the bundles
    pub scratch_dir: String,
    /// Time taken for all merges
    pub duration: Duration,
    /// Per-merge results, in driver order
    pub merges: Vec<MergeSummary>,
}

/// Format of the report output
pub enum ReportFormat {
    /// Console table output
    ConsoleTable,
    // Other formats could be added in the future
    // JSON, HTML, etc.
}

/// Report generator for bundling runs
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Generate a report string for a run
    pub fn generate_report(&self, report: &BundleReport) -> String {
        match self.format {
            ReportFormat::ConsoleTable => self.generate_console_report(report),
            // Additional formats could be added here
        }
    }

    /// Print the report to stdout
    pub fn print_report(&self, report: &BundleReport) {
        println!("\n{}", self.generate_report(report));
    }

    // Create the per-merge table using the tabled crate
    fn create_merges_table(&self, report: &BundleReport) -> String {
        #[derive(Tabled)]
        struct MergeRow {
            #[tabled(rename = "Source Set")]
            label: String,

            #[tabled(rename = "Bundle")]
            output: String,

            #[tabled(rename = "Files")]
            files: String,

            #[tabled(rename = "Size")]
            size: String,
        }

        let rows: Vec<MergeRow> = report
            .merges
            .iter()
            .map(|merge| {
                let output = match &merge.output_file {
                    Some(path) => path.display().to_string(),
                    None => "(source missing, skipped)".to_string(),
                };

                let files = if merge.files_skipped > 0 {
                    format!("{} ({} missing)", merge.files_processed, merge.files_skipped)
                } else {
                    merge.files_processed.to_string()
                };

                MergeRow {
                    label: merge.label.clone(),
                    output,
                    files,
                    size: format_file_size(merge.bytes_written),
                }
            })
            .collect();

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    // Create the totals table using the tabled crate
    fn create_summary_table(&self, report: &BundleReport) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: String,

            #[tabled(rename = "Value")]
            value: String,
        }

        let bundles_written = report
            .merges
            .iter()
            .filter(|merge| merge.output_file.is_some())
            .count();
        let total_files: usize = report.merges.iter().map(|m| m.files_processed).sum();
        let total_bytes: u64 = report.merges.iter().map(|m| m.bytes_written).sum();

        let rows = vec![
            SummaryRow {
                key: "📂 Scratch Directory".to_string(),
                value: report.scratch_dir.clone(),
            },
            SummaryRow {
                key: "📦 Bundles Written".to_string(),
                value: format!("{} of {} source sets", bundles_written, report.merges.len()),
            },
            SummaryRow {
                key: "📄 Files Merged".to_string(),
                value: total_files.to_string(),
            },
            SummaryRow {
                key: "📝 Total Size".to_string(),
                value: format_file_size(total_bytes),
            },
            SummaryRow {
                key: "⏱️ Process Time".to_string(),
                value: format!("{:.4?}", report.duration),
            },
        ];

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        table.to_string()
    }

    // Generate a console table report
    fn generate_console_report(&self, report: &BundleReport) -> String {
        let merges_table = self.create_merges_table(report);
        let summary_table = self.create_summary_table(report);

        format!(
            "📋  MERGED SOURCE SETS\n{}\n\n✅  BUNDLING COMPLETE\n{}",
            merges_table, summary_table
        )
    }
}
