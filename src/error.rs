//! Global error handling for frontdump
//!
//! Per-file read failures are deliberately NOT represented here: they are
//! recovered inline in the output document (see `writer`). This type covers
//! the fatal cases only.

use std::io;
use thiserror::Error;

/// Global error type for frontdump operations
#[derive(Error, Debug)]
pub enum DumpError {
    /// File system errors (output creation, document writes)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Specialized Result type for frontdump operations
pub type Result<T> = std::result::Result<T, DumpError>;

/// Creates a DumpError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::DumpError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}
