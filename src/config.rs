/*!
 * Configuration handling for FrontDump
 *
 * Everything here is a compile-time constant by design: the tool is a
 * single-shot snapshot script, not a configurable CLI. The constants are
 * assembled into an owned [`Config`] so tests can inject their own roots
 * and rule sets.
 */

use std::collections::HashSet;
use std::path::PathBuf;

use once_cell::sync::Lazy;

use crate::ensure;
use crate::error::Result;

/// Header line written at the top of every dump document.
///
/// Kept byte-exact for compatibility with the existing document format.
pub const OUTPUT_HEADER: &str = "# Dump du code source du projet LOTO-HAPPY-FRONTEND";

/// Default output file name.
pub const DEFAULT_OUTPUT_FILE: &str = "frontend_dump.txt";

/// Suffixes that mark a file as worth dumping. Matched with `ends_with`,
/// so exact file names like `package.json` behave like extensions.
pub const INCLUDE_SUFFIXES: &[&str] = &[
    ".ts",
    ".tsx",
    ".js",
    ".jsx",
    ".vue",
    ".svelte",
    ".css",
    ".scss",
    ".html",
    "package.json",
    "vite.config.ts",
    "tailwind.config.js",
];

/// Directory names whose entire subtree is pruned from traversal.
pub static EXCLUDE_DIRS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        // Dependencies and build output
        "node_modules",
        "dist",
        "build",
        // Version control
        ".git",
        // Static assets
        "public",
        "assets",
        // Editor and interpreter caches
        ".vscode",
        "__pycache__",
    ])
});

/// Exact file names that are never included, even when a suffix matches.
pub static EXCLUDE_FILES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HashSet::from(["package-lock.json", "yarn.lock", ".env"]));

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Directories to start traversal from, in order
    pub search_roots: Vec<PathBuf>,

    /// Output text file path
    pub output_file: PathBuf,

    /// Suffixes (extensions or exact names) eligible for inclusion
    pub include_suffixes: Vec<String>,

    /// Directory names pruned from traversal
    pub exclude_dirs: HashSet<String>,

    /// Exact file names never included
    pub exclude_files: HashSet<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search_roots: vec![PathBuf::from(".")],
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            include_suffixes: INCLUDE_SUFFIXES.iter().map(|s| s.to_string()).collect(),
            exclude_dirs: EXCLUDE_DIRS.iter().map(|s| s.to_string()).collect(),
            exclude_files: EXCLUDE_FILES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Config {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        ensure!(!self.search_roots.is_empty(), Config, "no search roots configured");

        for root in &self.search_roots {
            ensure!(
                root.is_dir(),
                Config,
                "search root not found: {}",
                root.display()
            );
        }

        // Check if output file directory exists and is writable
        if let Some(parent) = self.output_file.parent() {
            ensure!(
                parent.as_os_str().is_empty() || parent.exists(),
                Config,
                "output directory not found: {}",
                parent.display()
            );
        }

        Ok(())
    }

    /// Whether a directory with this name is pruned from traversal.
    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.exclude_dirs.contains(name)
    }

    /// Whether a file with this name is eligible for the dump.
    pub fn matches_include(&self, name: &str) -> bool {
        if self.exclude_files.contains(name) {
            return false;
        }
        self.include_suffixes.iter().any(|s| name.ends_with(s.as_str()))
    }
}
