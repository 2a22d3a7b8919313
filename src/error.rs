//! Global error handling for bundlefs
//!
//! Only two failures escape the scope they happen in: a scratch-directory
//! reset failure aborts the run, and an output file that cannot be created
//! or written aborts its own merge call. Everything per-file is folded into
//! the bundle itself as an inline annotation and never becomes an error value.

use std::io;
use thiserror::Error;

/// Global error type for bundlefs operations
#[derive(Error, Debug)]
pub enum BundleError {
    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Scratch directory could not be reset
    #[error("Reset error: {0}")]
    Reset(String),

    /// Bundle output file could not be created
    #[error("Output error: {0}")]
    Output(String),
}

/// Specialized Result type for bundlefs operations
pub type Result<T> = std::result::Result<T, BundleError>;

/// Creates a BundleError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::BundleError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}
