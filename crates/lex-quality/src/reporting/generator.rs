use crate::checks::{check_duplicates, check_missing_values, check_outliers, check_uniformity};
use crate::error::{QualityError, Result, ResultExt};
use crate::table::Table;
use crate::types::Report;
use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

/// Run every check once, in order, and assemble the results.
///
/// Nothing is cached: each call recomputes from the table. Errors from a
/// check are returned as-is.
pub fn generate_report(table: &Table) -> Result<Report> {
    debug!("Checking uniformity");
    let uniformity = check_uniformity(table)?;

    debug!("Checking duplicate rows");
    let duplicate_rows = check_duplicates(table)?;

    debug!("Checking missing values");
    let missing_value_rows = check_missing_values(table)?;

    debug!("Checking outliers");
    let outliers = check_outliers(table)?;

    let report = Report {
        uniformity,
        duplicate_rows,
        missing_value_rows,
        outliers,
    };

    info!(
        "Quality report complete: {} flagged entries across {} rows x {} columns",
        report.issue_count(),
        table.height(),
        table.width()
    );

    Ok(report)
}

/// A report together with the metadata needed to interpret it on its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportDocument {
    /// Timestamp when the report was generated
    pub generated_at: String,
    /// Path to the input file
    pub input_file: String,
    /// `(rows, columns)` of the checked table
    pub shape: (usize, usize),
    /// Column names in table order
    pub columns: Vec<String>,
    /// The check results
    pub report: Report,
}

impl ReportDocument {
    pub fn new(input_file: impl Into<String>, table: &Table, report: Report) -> Self {
        Self {
            generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            input_file: input_file.into(),
            shape: table.shape(),
            columns: table.column_names(),
            report,
        }
    }
}

/// Writes report documents to an output directory.
pub struct ReportGenerator {
    output_dir: PathBuf,
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new(PathBuf::from("outputs"))
    }
}

impl ReportGenerator {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    /// Write `document` as pretty JSON to `<output_dir>/<report_base_name>_report.json`.
    ///
    /// Creates the output directory if needed and returns the written path.
    pub fn write_report_to_file(
        &self,
        document: &ReportDocument,
        report_base_name: &str,
    ) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)
            .map_err(QualityError::from)
            .context(format!(
                "Failed to create report directory {}",
                self.output_dir.display()
            ))?;

        let report_path = self
            .output_dir
            .join(format!("{}_report.json", report_base_name));
        let mut file = File::create(&report_path)?;
        file.write_all(serde_json::to_string_pretty(document)?.as_bytes())?;

        info!("Report saved: {}", report_path.display());

        Ok(report_path)
    }
}
