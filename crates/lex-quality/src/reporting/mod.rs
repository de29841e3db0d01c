//! Report generation module.
//!
//! [`generate_report`] runs the four checks over a table and assembles a
//! [`Report`](crate::Report). For output, a report is wrapped in a
//! [`ReportDocument`] that also records where the data came from.
//!
//! # Example
//!
//! ```rust,ignore
//! use lex_quality::{LoadOptions, Table};
//! use lex_quality::reporting::{ReportDocument, ReportGenerator, generate_report};
//!
//! let table = Table::load("data/train.csv", &LoadOptions::default())?;
//! let report = generate_report(&table)?;
//!
//! // Print as JSON
//! let document = ReportDocument::new("data/train.csv", &table, report);
//! println!("{}", serde_json::to_string_pretty(&document)?);
//!
//! // Or write to file
//! let generator = ReportGenerator::new(PathBuf::from("output"));
//! generator.write_report_to_file(&document, "train")?;
//! ```

mod generator;

pub use generator::{ReportDocument, ReportGenerator, generate_report};
