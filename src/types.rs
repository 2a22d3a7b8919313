/*!
 * Core types and data structures for the bundlefs application
 */

use std::path::PathBuf;

/// A set of source files merged into one bundle
#[derive(Debug, Clone)]
pub enum SourceSet {
    /// Every regular file under a directory tree
    Directory {
        /// Label used in the bundle filename
        label: String,
        /// Root of the tree to walk
        path: PathBuf,
    },
    /// An explicit list of files, merged in the given order
    FileList {
        /// Label used in the bundle filename
        label: String,
        /// Candidate paths; entries that are not regular files are skipped
        paths: Vec<PathBuf>,
    },
}

impl SourceSet {
    /// Label identifying this set in bundle filenames and reports
    pub fn label(&self) -> &str {
        match self {
            SourceSet::Directory { label, .. } => label,
            SourceSet::FileList { label, .. } => label,
        }
    }
}

/// Content of a single record, as read from a source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordContent {
    /// Valid UTF-8 text, passed through untouched
    Text(String),
    /// Bytes that do not decode as UTF-8
    Undecodable,
    /// The file could not be read at all
    Unreadable(String),
}

/// Result of one merge operation
#[derive(Debug, Clone)]
pub struct MergeSummary {
    /// Label of the merged source set
    pub label: String,
    /// Bundle written by this merge; `None` when the source directory was missing
    pub output_file: Option<PathBuf>,
    /// Number of records written
    pub files_processed: usize,
    /// Listed paths skipped because they were not regular files
    pub files_skipped: usize,
    /// Bytes written to the bundle
    pub bytes_written: u64,
}
