/*!
 * Record writer implementation for bundlefs
 *
 * Owns one bundle output file and writes the per-source-file record format:
 * relative path header, separator line, content (or an inline error
 * annotation), trailing separator.
 */

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::types::RecordContent;

/// Writer for one bundle output file
pub struct RecordWriter {
    inner: BufWriter<File>,
    path: PathBuf,
    records: usize,
    bytes: u64,
}

impl RecordWriter {
    /// Create the output file, truncating any existing content
    ///
    /// The parent directory is created first when missing.
    pub fn create(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    crate::error!(
                        Output,
                        "cannot create output directory '{}': {}",
                        parent.display(),
                        e
                    )
                })?;
                println!("Created output directory: {}", parent.display());
            }
        }

        let file = match File::create(path) {
            Ok(file) => file,
            Err(e) => crate::bail!(Output, "cannot create output file '{}': {}", path.display(), e),
        };

        Ok(Self {
            inner: BufWriter::new(file),
            path: path.to_path_buf(),
            records: 0,
            bytes: 0,
        })
    }

    /// Path of the output file being written
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record
    pub fn write_record(&mut self, rel_path: &Path, content: &RecordContent) -> Result<()> {
        let rel = rel_path.display();

        let mut record = format!("{}\n---\n", rel);
        match content {
            RecordContent::Text(text) => record.push_str(text),
            RecordContent::Undecodable => {
                record.push_str(&format!(
                    "\n--- Error: file '{}' cannot be decoded as UTF-8 (maybe a binary file) ---\n",
                    rel
                ));
            }
            RecordContent::Unreadable(err) => {
                record.push_str(&format!(
                    "\n--- Error: cannot read file '{}': {} ---\n",
                    rel, err
                ));
            }
        }
        record.push_str("\n---\n\n");

        self.inner.write_all(record.as_bytes())?;
        self.records += 1;
        self.bytes += record.len() as u64;

        Ok(())
    }

    /// Flush and close the output, returning (records written, bytes written)
    pub fn finish(mut self) -> Result<(usize, u64)> {
        self.inner.flush()?;
        Ok((self.records, self.bytes))
    }
}
