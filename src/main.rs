/*!
 * Command-line entry point for FrontDump
 */

use std::fs;
use std::sync::Arc;
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};

use frontdump::config::Config;
use frontdump::error::Result;
use frontdump::report::{ReportFormat, Reporter, ScanReport};
use frontdump::scanner::Scanner;
use frontdump::writer::DumpWriter;

fn main() -> Result<()> {
    // Every knob is a compile-time constant baked into the default config
    let config = Config::default();
    config.validate()?;

    let progress = ProgressBar::new_spinner();
    progress.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos} files")
            .unwrap(),
    );
    progress.enable_steady_tick(std::time::Duration::from_millis(100));
    progress.set_prefix("Scanning");
    progress.set_message(format!(
        "Creating dump in '{}'",
        config.output_file.display()
    ));

    let scanner = Scanner::new(config.clone(), Arc::new(progress.clone()));
    let writer = DumpWriter::new(config.clone());

    // Time both discovery and writing
    let start_time = Instant::now();

    let entries = scanner.scan();

    progress.set_prefix("Writing");
    let stats = writer.write(&entries)?;

    let total_duration = start_time.elapsed();

    progress.finish_and_clear();

    let output_size = fs::metadata(&config.output_file).map(|m| m.len()).unwrap_or(0);

    let report = ScanReport {
        output_file: config.output_file.display().to_string(),
        duration: total_duration,
        output_size,
        stats,
    };

    let reporter = Reporter::new(ReportFormat::ConsoleTable);
    reporter.print_report(&report);

    Ok(())
}
