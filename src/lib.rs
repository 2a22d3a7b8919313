/*!
 * bundlefs - Bundle project sources into timestamped text snapshots
 *
 * This library clears a scratch directory, then concatenates the files of a
 * fixed set of source directories and top-level files into one timestamped
 * text bundle per source set, for review or sharing.
 */

pub mod config;
pub mod error;
pub mod merger;
pub mod report;
pub mod types;
pub mod utils;
pub mod writer;

#[cfg(test)]
mod tests;

// Re-export main components for easier access
pub use config::Config;
pub use error::{BundleError, Result};
pub use merger::Merger;
pub use report::{BundleReport, ReportFormat, Reporter};
pub use types::{MergeSummary, RecordContent, SourceSet};
pub use utils::{count_files, format_file_size, relative_to_cwd, reset_directory, run_timestamp};
pub use writer::RecordWriter;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
