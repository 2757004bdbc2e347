/*!
 * Reporting functionality for FrontDump
 *
 * Generates the console summary printed after a run, using the tabled
 * library for the per-file table.
 */

use std::time::Duration;

use chrono::Local;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::utils::format_file_size;

/// Per-file figures collected while writing the dump
#[derive(Debug, Clone, Default)]
pub struct FileReportInfo {
    /// Number of lines in the file
    pub lines: usize,
    /// Number of characters in the file
    pub chars: usize,
}

/// Statistics accumulated by the writer
#[derive(Debug, Clone, Default)]
pub struct WriteStats {
    /// Files appended with their full content
    pub files_written: usize,
    /// Files whose read failed (inline notice written instead)
    pub files_failed: usize,
    /// Total number of lines written
    pub total_lines: usize,
    /// Total number of characters written
    pub total_chars: usize,
    /// Per-file details, in traversal order
    pub file_details: Vec<(String, FileReportInfo)>,
}

/// Full report for one run
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Output file path
    pub output_file: String,
    /// Time taken to scan and write
    pub duration: Duration,
    /// Size of the output document in bytes
    pub output_size: u64,
    /// Writer statistics
    pub stats: WriteStats,
}

/// Format of the report output
pub enum ReportFormat {
    /// Console table output
    ConsoleTable,
}

/// Report generator for run results
pub struct Reporter {
    format: ReportFormat,
}

/// A row in the per-file table
#[derive(Tabled)]
struct FileRow {
    #[tabled(rename = "File")]
    path: String,
    #[tabled(rename = "Lines")]
    lines: String,
    #[tabled(rename = "Chars")]
    chars: String,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Format a number with human-readable units
    fn format_number(&self, num: usize) -> String {
        if num >= 1_000_000 {
            format!("{:.1}M", num as f64 / 1_000_000.0)
        } else if num >= 1_000 {
            format!("{:.1}K", num as f64 / 1_000.0)
        } else {
            num.to_string()
        }
    }

    // Truncate long paths from the left, keeping the file name visible.
    // The cut lands on a char boundary so multibyte path names are safe.
    fn format_path(&self, path: &str, max_len: usize) -> String {
        if path.len() <= max_len {
            return path.to_string();
        }
        let target = path.len().saturating_sub(max_len - 3);
        let cut = path
            .char_indices()
            .map(|(i, _)| i)
            .find(|&i| i >= target)
            .unwrap_or(0);
        format!("...{}", &path[cut..])
    }

    /// Generate a report string based on run statistics
    pub fn generate_report(&self, report: &ScanReport) -> String {
        match self.format {
            ReportFormat::ConsoleTable => self.generate_console_report(report),
        }
    }

    /// Print the report to stdout
    pub fn print_report(&self, report: &ScanReport) {
        println!("\n{}", self.generate_report(report));
    }

    fn generate_console_report(&self, report: &ScanReport) -> String {
        let mut output = String::new();

        if !report.stats.file_details.is_empty() {
            let rows: Vec<FileRow> = report
                .stats
                .file_details
                .iter()
                .map(|(path, info)| FileRow {
                    path: self.format_path(path, 60),
                    lines: self.format_number(info.lines),
                    chars: self.format_number(info.chars),
                })
                .collect();

            let mut table = Table::new(rows);
            table
                .with(Style::rounded())
                .with(Padding::new(1, 1, 0, 0))
                .with(Modify::new(Columns::new(1..)).with(Alignment::right()));

            output.push_str(&table.to_string());
            output.push('\n');
        }

        output.push_str(&format!(
            "\nFiles added:   {}\n",
            report.stats.files_written
        ));
        if report.stats.files_failed > 0 {
            output.push_str(&format!(
                "Files failed:  {}\n",
                report.stats.files_failed
            ));
        }
        output.push_str(&format!(
            "Total lines:   {}\n",
            self.format_number(report.stats.total_lines)
        ));
        output.push_str(&format!(
            "Total chars:   {}\n",
            self.format_number(report.stats.total_chars)
        ));
        output.push_str(&format!(
            "Output size:   {}\n",
            format_file_size(report.output_size)
        ));
        output.push_str(&format!("Elapsed:       {:.2?}\n", report.duration));

        output.push_str(&format!(
            "\nDone at {}. {} files were added to '{}'.\n",
            Local::now().format("%H:%M:%S"),
            report.stats.files_written,
            report.output_file
        ));

        output
    }
}
