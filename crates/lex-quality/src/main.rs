//! CLI entry point for the data-quality report.

use anyhow::{Result, anyhow};
use clap::Parser;
use lex_quality::utils::truncate_str;
use lex_quality::{LoadOptions, Report, ReportDocument, ReportGenerator, Table, generate_report};
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Maximum number of row indexes printed per line in the human-readable summary.
const MAX_ROWS_SHOWN: usize = 20;

#[derive(Parser, Debug)]
#[command(
    author = "Lex Machina Team",
    version,
    about = "Data-quality report for delimited text files",
    long_about = "Reports column type uniformity, duplicate rows, missing values and \
                  1.5 IQR outliers for a delimited text file.\n\n\
                  EXAMPLES:\n  \
                  # Comma-separated file with a header row\n  \
                  lex-quality -i data.csv\n\n  \
                  # Semicolon-separated file, JSON to stdout\n  \
                  lex-quality -i data.csv -s ';' --json | jq .report.OUTLIERS\n\n  \
                  # Save the report next to other outputs\n  \
                  lex-quality -i data.csv --emit-report -o reports/"
)]
struct Args {
    /// Path to the delimited file to check
    #[arg(short, long)]
    input: String,

    /// Field separator (a single ASCII character)
    #[arg(short, long, default_value = ",")]
    separator: char,

    /// Treat the first line as data instead of column names
    #[arg(long)]
    no_header: bool,

    /// Output directory for --emit-report
    #[arg(short, long, default_value = "./outputs")]
    output: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Suppress progress output (only show errors and final result)
    #[arg(short, long)]
    quiet: bool,

    /// Output JSON to stdout instead of human-readable summary
    ///
    /// Disables all logs; only outputs the report document.
    #[arg(long)]
    json: bool,

    /// Write the JSON report to the output directory
    ///
    /// The report will be saved as <input_name>_report.json
    #[arg(short = 'r', long)]
    emit_report: bool,
}

/// Initialize the tracing subscriber for logging.
///
/// When `json_output` is true, logging is completely disabled to ensure
/// only JSON is written to stdout.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    if json_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level, args.quiet, args.json);

    if !Path::new(&args.input).exists() {
        return Err(anyhow!("Input file not found: {}", args.input));
    }

    let options = LoadOptions::builder()
        .separator(args.separator)
        .has_header(!args.no_header)
        .build()?;

    let table = Table::load(&args.input, &options).map_err(|e| {
        error!("Loading failed: {}", e);
        anyhow!("Failed to load {}: {}", args.input, e)
    })?;

    let report = generate_report(&table)?;
    let document = ReportDocument::new(&args.input, &table, report);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&document)?);
        return Ok(());
    }

    if args.emit_report {
        let generator = ReportGenerator::new(PathBuf::from(&args.output));
        let report_path =
            generator.write_report_to_file(&document, &extract_file_stem(&args.input))?;
        info!("Report written to: {}", report_path.display());
    }

    print_human_readable_summary(&document);

    Ok(())
}

/// Extract the file stem (name without extension) from a path.
fn extract_file_stem(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output")
        .to_string()
}

/// Render row indexes, eliding the tail of long lists.
fn format_rows(rows: &[usize]) -> String {
    if rows.is_empty() {
        return "-".to_string();
    }

    let shown: Vec<String> = rows
        .iter()
        .take(MAX_ROWS_SHOWN)
        .map(|r| r.to_string())
        .collect();

    if rows.len() > MAX_ROWS_SHOWN {
        format!(
            "{} ... (+{} more)",
            shown.join(", "),
            rows.len() - MAX_ROWS_SHOWN
        )
    } else {
        shown.join(", ")
    }
}

/// Print the report as plain text, one section per check.
///
/// Uses `println!` on purpose: this is the program's output, not a log line.
fn print_human_readable_summary(document: &ReportDocument) {
    let report: &Report = &document.report;

    println!();
    println!("{}", "=".repeat(80));
    println!("DATA QUALITY REPORT");
    println!("{}", "=".repeat(80));
    println!();
    println!(
        "Input: {} ({} rows x {} columns)",
        document.input_file, document.shape.0, document.shape.1
    );
    println!();

    println!("UNIFORMITY");
    println!("{}", "-".repeat(40));
    if report.uniformity.is_empty() {
        println!("  All columns are uniform");
    } else {
        for (column, rows) in &report.uniformity {
            println!("  {:<20} rows: {}", truncate_str(column, 19), format_rows(rows));
        }
    }
    println!();

    println!("DUPLICATE ROWS");
    println!("{}", "-".repeat(40));
    if report.duplicate_rows.is_empty() {
        println!("  No duplicate rows found");
    } else {
        for group in &report.duplicate_rows {
            println!("  rows: {}", format_rows(group));
        }
    }
    println!();

    println!("MISSING VALUE ROWS");
    println!("{}", "-".repeat(40));
    if report.missing_value_rows.is_empty() {
        println!("  No missing values found");
    } else {
        println!("  rows: {}", format_rows(&report.missing_value_rows));
    }
    println!();

    println!("OUTLIERS (1.5 x IQR)");
    println!("{}", "-".repeat(40));
    if report.outliers.is_empty() {
        println!("  No numeric columns");
    } else {
        for (column, rows) in &report.outliers {
            println!("  {:<20} rows: {}", truncate_str(column, 19), format_rows(rows));
        }
    }
    println!();

    if report.is_clean() {
        println!("No issues found");
    } else {
        println!("{} flagged entries", report.issue_count());
    }
    println!("Use --json for machine-readable output");
    println!("{}", "=".repeat(80));
}
