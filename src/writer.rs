/*!
 * Plain-text dump writer
 *
 * Appends one delimiter block per selected file to the output document, in
 * traversal order. Per-file read failures are recorded inline and never
 * abort the run; failures writing the document itself are fatal.
 */

use std::fs::{self, File};
use std::io::{BufWriter, Write};

use crate::config::{Config, OUTPUT_HEADER};
use crate::error::Result;
use crate::report::{FileReportInfo, WriteStats};
use crate::types::{AppendOutcome, FileEntry};

/// Width of the `=` rule around each file label
const DELIMITER_WIDTH: usize = 80;

/// Writer for the aggregated dump document
pub struct DumpWriter {
    /// Writer configuration
    config: Config,
}

impl DumpWriter {
    /// Create a new dump writer
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Create (truncate) the output document and append every entry in order
    pub fn write(&self, entries: &[FileEntry]) -> Result<WriteStats> {
        let file = File::create(&self.config.output_file)?;
        let mut out = BufWriter::new(file);

        writeln!(out, "{}", OUTPUT_HEADER)?;
        writeln!(out)?;

        let mut stats = WriteStats::default();
        for entry in entries {
            match self.append_entry(&mut out, entry, &mut stats)? {
                AppendOutcome::Appended => stats.files_written += 1,
                AppendOutcome::Failed(reason) => {
                    stats.files_failed += 1;
                    eprintln!("Warning: could not read {}: {}", entry.display_path, reason);
                }
            }
        }

        out.flush()?;
        Ok(stats)
    }

    /// Append one delimiter block for `entry`, reading its content at
    /// append time. Returns how the block ended up.
    fn append_entry<W: Write>(
        &self,
        out: &mut W,
        entry: &FileEntry,
        stats: &mut WriteStats,
    ) -> Result<AppendOutcome> {
        let rule = "=".repeat(DELIMITER_WIDTH);

        writeln!(out, "{}", rule)?;
        writeln!(out, "--- FICHIER : {} ---", entry.display_path)?;
        writeln!(out, "{}", rule)?;
        writeln!(out)?;

        // Covers both I/O failures and non-UTF-8 content
        match fs::read_to_string(&entry.path) {
            Ok(content) => {
                let info = FileReportInfo {
                    lines: content.lines().count(),
                    chars: content.chars().count(),
                };
                stats.total_lines += info.lines;
                stats.total_chars += info.chars;
                stats.file_details.push((entry.display_path.clone(), info));

                out.write_all(content.as_bytes())?;
                writeln!(out)?;
                writeln!(out)?;
                Ok(AppendOutcome::Appended)
            }
            Err(e) => {
                writeln!(
                    out,
                    "!!! ERREUR de lecture du fichier {}: {}",
                    entry.display_path, e
                )?;
                writeln!(out)?;
                Ok(AppendOutcome::Failed(e.to_string()))
            }
        }
    }
}
