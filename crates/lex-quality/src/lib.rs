//! Data Quality Report Library
//!
//! Quick diagnostics for a delimited text file before any further processing.
//!
//! # Overview
//!
//! A loaded [`Table`] is inspected by four independent, read-only checks:
//!
//! - **Uniformity**: columns whose cells do not all parse to one scalar type
//!   (int, float, boolean, none, string). Rows with a non-numeric type are listed.
//! - **Duplicates**: rows that exactly repeat another row.
//! - **Missing values**: rows containing an empty or null cell.
//! - **Outliers**: values in numeric columns outside `Q1 - 1.5*IQR .. Q3 + 1.5*IQR`.
//!
//! [`generate_report`] runs all four, in that order, and returns a [`Report`].
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use lex_quality::{LoadOptions, Table, generate_report};
//!
//! let options = LoadOptions::builder().separator(';').build()?;
//! let table = Table::load("data.csv", &options)?;
//! let report = generate_report(&table)?;
//!
//! for (column, rows) in &report.outliers {
//!     println!("{column}: {} outliers", rows.len());
//! }
//! ```
//!
//! Tables can also be built from an in-memory polars frame with
//! [`Table::from_frame`].

pub mod checks;
pub mod config;
pub mod error;
pub mod reporting;
pub mod table;
pub mod types;
pub mod utils;

// Re-exports for convenient access
pub use checks::{
    IqrFences, check_duplicates, check_missing_values, check_outliers, check_uniformity,
    infer_type_tag,
};
pub use config::{ConfigValidationError, IQR_MULTIPLIER, LoadOptions, LoadOptionsBuilder};
pub use error::{QualityError, Result as QualityResult, ResultExt};
pub use reporting::{ReportDocument, ReportGenerator, generate_report};
pub use table::Table;
pub use types::{ColumnRows, DuplicateGroup, Report, TypeTag};
