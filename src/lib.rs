/*!
 * FrontDump - Concatenate frontend source files into a single text dump
 *
 * This library walks a set of project directories, selects source files by
 * suffix, and appends their contents to one delimited text document suitable
 * for external review (e.g. pasting into an LLM).
 */

pub mod config;
pub mod error;
pub mod report;
pub mod scanner;
pub mod types;
pub mod utils;
pub mod writer;


// Re-export main components for easier access
pub use config::Config;
pub use error::{DumpError, Result};
pub use report::{FileReportInfo, ReportFormat, Reporter, ScanReport, WriteStats};
pub use scanner::Scanner;
pub use types::{AppendOutcome, FileEntry};
pub use utils::{display_path, format_file_size};
pub use writer::DumpWriter;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
