/*!
 * Core types for the FrontDump application
 */

use std::path::PathBuf;

/// A file selected for inclusion during the scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path used to read the file, as discovered under its search root
    pub path: PathBuf,

    /// Path shown in the dump: relative to the search root, `/`-separated
    pub display_path: String,
}

/// Result of appending one file to the dump document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppendOutcome {
    /// File content was written in full
    Appended,

    /// Read failed; an inline error notice was written instead of content
    Failed(String),
}
