/*!
 * Configuration handling for bundlefs
 */

use std::path::PathBuf;

use clap::Parser;
use once_cell::sync::Lazy;

use crate::types::SourceSet;

/// Scratch directory cleared at the start of every run
pub const SCRATCH_DIR: &str = "./tmp";

/// Source directories bundled on every run, as (label, path) pairs
pub static SOURCE_DIRS: Lazy<Vec<(&'static str, &'static str)>> = Lazy::new(|| {
    vec![
        ("js", "./js"),
        ("css", "./css"),
        ("data", "./data"),
        ("doc", "./doc"),
        ("tests", "./tests"),
    ]
});

/// Top-level files bundled on every run, in this order
pub static ROOT_FILES: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "./config.php",
        "./entry.php",
        "./index.html",
        "./index.php",
        "./manifest.php",
        "./manifest.webmanifest",
        "./ogp-card.php",
        "./sw.js",
        "./sw.php",
    ]
});

/// Command-line arguments for bundlefs
///
/// The tool takes no options; every path it touches is one of the constants
/// above, resolved against the working directory at invocation time.
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "bundlefs",
    version = env!("CARGO_PKG_VERSION"),
    about = "Bundle project sources into timestamped text snapshots",
    long_about = "Clears the scratch directory, then concatenates the contents of the fixed source directories and top-level files into one timestamped text bundle per source set, for review or sharing."
)]
pub struct Args {}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Scratch directory that receives the bundles
    pub scratch_dir: PathBuf,

    /// Source sets to merge, one bundle each
    pub sources: Vec<SourceSet>,
}

impl Config {
    /// The fixed configuration used by the binary
    pub fn standard() -> Self {
        let mut sources: Vec<SourceSet> = SOURCE_DIRS
            .iter()
            .map(|(label, path)| SourceSet::Directory {
                label: (*label).to_string(),
                path: PathBuf::from(*path),
            })
            .collect();

        sources.push(SourceSet::FileList {
            label: "root_files".to_string(),
            paths: ROOT_FILES.iter().map(|p| PathBuf::from(*p)).collect(),
        });

        Self {
            scratch_dir: PathBuf::from(SCRATCH_DIR),
            sources,
        }
    }
}
