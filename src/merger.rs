/*!
 * Merge operations for bundlefs
 *
 * A merge reads zero or more source files and writes exactly one bundle of
 * concatenated records. Two flavors exist: a recursive directory merge and
 * an ordered file-list merge.
 */

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use indicatif::ProgressBar;
use walkdir::WalkDir;

use crate::error::Result;
use crate::types::{MergeSummary, RecordContent, SourceSet};
use crate::utils::relative_to_cwd;
use crate::writer::RecordWriter;

/// Merger for source sets
pub struct Merger {
    /// Progress bar
    pub progress: Arc<ProgressBar>,
}

impl Merger {
    /// Create a new merger
    pub fn new(progress: Arc<ProgressBar>) -> Self {
        Self { progress }
    }

    /// Merge one source set into the given output file
    pub fn merge(&self, source: &SourceSet, output: &Path) -> Result<MergeSummary> {
        match source {
            SourceSet::Directory { label, path } => self.merge_directory(label, path, output),
            SourceSet::FileList { label, paths } => self.merge_file_list(label, paths, output),
        }
    }

    /// Merge every regular file under `src` into `output`
    ///
    /// Entries within each directory are processed in lexicographic filename
    /// order; subdirectories are descended into depth-first at their sorted
    /// position. A missing source directory is a skip, not an error, and
    /// produces no output file.
    pub fn merge_directory(&self, label: &str, src: &Path, output: &Path) -> Result<MergeSummary> {
        if !src.is_dir() {
            eprintln!(
                "Warning: directory '{}' not found, skipping",
                src.display()
            );
            return Ok(MergeSummary {
                label: label.to_string(),
                output_file: None,
                files_processed: 0,
                files_skipped: 0,
                bytes_written: 0,
            });
        }

        let mut writer = RecordWriter::create(output)?;

        let entries = WalkDir::new(src)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    eprintln!("Error walking '{}': {}", src.display(), e);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file());

        for entry in entries {
            let path = entry.path();

            // Skip the bundle itself when it sits inside the source tree
            if is_output_file(path, writer.path()) {
                continue;
            }

            self.write_one(&mut writer, path)?;
        }

        self.finish(label, writer, 0)
    }

    /// Merge an explicit list of files into `output`, in the given order
    ///
    /// Paths that are not existing regular files are skipped with a warning
    /// and do not count as processed.
    pub fn merge_file_list(
        &self,
        label: &str,
        paths: &[PathBuf],
        output: &Path,
    ) -> Result<MergeSummary> {
        let mut writer = RecordWriter::create(output)?;
        let mut skipped = 0;

        for path in paths {
            if !path.is_file() {
                eprintln!("Warning: file '{}' not found, skipping", path.display());
                skipped += 1;
                continue;
            }

            if is_output_file(path, writer.path()) {
                continue;
            }

            self.write_one(&mut writer, path)?;
        }

        self.finish(label, writer, skipped)
    }

    /// Read one source file and append its record
    fn write_one(&self, writer: &mut RecordWriter, path: &Path) -> Result<()> {
        self.progress.inc(1);

        let file_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        // Truncate if too long to avoid display issues
        let display_name = if file_name.len() > 40 {
            format!("...{}", &file_name[file_name.len().saturating_sub(37)..])
        } else {
            file_name
        };
        self.progress
            .set_message(format!("Current file: {}", display_name));

        let rel_path = relative_to_cwd(path);
        let content = read_record_content(path);
        writer.write_record(&rel_path, &content)
    }

    fn finish(&self, label: &str, writer: RecordWriter, files_skipped: usize) -> Result<MergeSummary> {
        let output_file = writer.path().to_path_buf();
        let (files_processed, bytes_written) = writer.finish()?;

        Ok(MergeSummary {
            label: label.to_string(),
            output_file: Some(output_file),
            files_processed,
            files_skipped,
            bytes_written,
        })
    }
}

/// Read a source file into record content, never failing the merge
fn read_record_content(path: &Path) -> RecordContent {
    match fs::read(path) {
        Ok(bytes) => match String::from_utf8(bytes) {
            Ok(text) => RecordContent::Text(text),
            Err(_) => RecordContent::Undecodable,
        },
        Err(e) => RecordContent::Unreadable(e.to_string()),
    }
}

/// Self-reference guard: true when `path` resolves to the output file itself
fn is_output_file(path: &Path, output: &Path) -> bool {
    match (fs::canonicalize(path), fs::canonicalize(output)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
