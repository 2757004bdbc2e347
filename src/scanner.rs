/*!
 * Directory traversal and file selection
 */

use std::path::Path;
use std::sync::Arc;

use indicatif::ProgressBar;
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;
use crate::types::FileEntry;
use crate::utils::display_path;

/// Walks the configured search roots and collects files eligible for the dump
pub struct Scanner {
    /// Scanner configuration
    config: Config,
    /// Progress bar
    pub progress: Arc<ProgressBar>,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(config: Config, progress: Arc<ProgressBar>) -> Self {
        Self { config, progress }
    }

    /// Traverse every search root in order and return the matching files in
    /// traversal order. Excluded directories are pruned before descent, so
    /// their subtrees are never opened.
    pub fn scan(&self) -> Vec<FileEntry> {
        let mut entries = Vec::new();
        for root in &self.config.search_roots {
            self.scan_root(root, &mut entries);
        }
        entries
    }

    fn scan_root(&self, root: &Path, entries: &mut Vec<FileEntry>) {
        let walker = WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| !self.should_prune(e));

        for result in walker {
            let entry = match result {
                Ok(entry) => entry,
                Err(e) => {
                    // Unreadable subtrees are skipped; already-written output
                    // is unaffected.
                    self.progress
                        .println(format!("Warning: skipping unreadable entry: {}", e));
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let name = entry.file_name().to_string_lossy();
            if !self.should_include(&name, entry.path()) {
                continue;
            }

            let rel = entry.path().strip_prefix(root).unwrap_or_else(|_| entry.path());
            let display = display_path(rel);

            self.progress.inc(1);
            self.progress.set_message(format!("Reading: {}", display));

            entries.push(FileEntry {
                path: entry.path().to_path_buf(),
                display_path: display,
            });
        }
    }

    /// Check whether a directory entry is pruned from the walk.
    ///
    /// Returning true here stops walkdir from ever opening the directory,
    /// so excluded subtrees cost no I/O. The root itself (depth 0) is never
    /// pruned, matching the behavior of a top-down walk whose frontier is
    /// filtered only below the starting point.
    pub fn should_prune(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return false;
        }
        let name = entry.file_name().to_string_lossy();
        self.config.is_excluded_dir(&name)
    }

    /// Check whether a file should be included in the dump
    pub fn should_include(&self, name: &str, path: &Path) -> bool {
        // Never dump the output document itself
        if path.ends_with(&self.config.output_file) {
            return false;
        }
        self.config.matches_include(name)
    }
}
