/*!
 * Utility functions for bundlefs
 */

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::Result;
use crate::types::SourceSet;

/// Delete a path (file or directory tree) and recreate it as an empty directory
///
/// Idempotent: running twice in a row yields the same empty-directory end
/// state. Any filesystem failure here is fatal to the run.
pub fn reset_directory(path: &Path) -> Result<()> {
    if path.exists() {
        let removal = if path.is_dir() {
            fs::remove_dir_all(path)
        } else {
            fs::remove_file(path)
        };
        removal.map_err(|e| crate::error!(Reset, "failed to remove '{}': {}", path.display(), e))?;
    }

    fs::create_dir_all(path)
        .map_err(|e| crate::error!(Reset, "failed to create '{}': {}", path.display(), e))?;

    println!("Cleared directory: {}", path.display());
    Ok(())
}

/// Timestamp prefix shared by all bundles of a run, MMDDhhmmss in local time
pub fn run_timestamp() -> String {
    Local::now().format("%m%d%H%M%S").to_string()
}

/// Express a path relative to the current working directory where possible
///
/// Relative inputs pass through untouched. Absolute paths under the working
/// directory are stripped down to their relative form; anything else is kept
/// absolute.
pub fn relative_to_cwd(path: &Path) -> PathBuf {
    if path.is_relative() {
        return path.to_path_buf();
    }

    match std::env::current_dir() {
        Ok(cwd) => path
            .strip_prefix(&cwd)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.to_path_buf()),
        Err(_) => path.to_path_buf(),
    }
}

/// Count mergeable files across all source sets, for progress tracking
pub fn count_files(config: &Config) -> io::Result<u64> {
    let mut count: u64 = 0;

    for source in &config.sources {
        match source {
            SourceSet::Directory { path, .. } => {
                if !path.is_dir() {
                    continue;
                }
                for entry in WalkDir::new(path).into_iter().filter_map(|e| e.ok()) {
                    if entry.file_type().is_file() {
                        count += 1;
                    }
                }
            }
            SourceSet::FileList { paths, .. } => {
                count += paths.iter().filter(|p| p.is_file()).count() as u64;
            }
        }
    }

    Ok(count)
}

/// Format a human-readable file size
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}
