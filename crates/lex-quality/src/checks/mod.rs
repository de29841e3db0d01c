//! The four data-quality checks.
//!
//! Each check is a pure read over a [`Table`](crate::Table) and can be run on
//! its own; [`generate_report`](crate::generate_report) runs all of them.

mod duplicates;
mod missing;
mod outliers;
mod uniformity;

pub use duplicates::check_duplicates;
pub use missing::check_missing_values;
pub use outliers::{IqrFences, check_outliers};
pub use uniformity::{check_uniformity, infer_type_tag};
