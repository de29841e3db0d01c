//! IQR-based outlier check for numeric columns.

use crate::config::IQR_MULTIPLIER;
use crate::error::Result;
use crate::table::Table;
use crate::types::ColumnRows;
use crate::utils::quantile_linear;
use tracing::debug;

/// Lower and upper outlier fences for a column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IqrFences {
    pub q1: f64,
    pub q3: f64,
    pub lower: f64,
    pub upper: f64,
}

impl IqrFences {
    /// Compute fences from the present values of a column.
    ///
    /// Returns `None` when there are no values to take quartiles from.
    pub fn from_values(values: &[f64]) -> Option<Self> {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let q1 = quantile_linear(&sorted, 0.25)?;
        let q3 = quantile_linear(&sorted, 0.75)?;
        let iqr = q3 - q1;

        Some(Self {
            q1,
            q3,
            lower: q1 - IQR_MULTIPLIER * iqr,
            upper: q3 + IQR_MULTIPLIER * iqr,
        })
    }

    /// Strictly outside the fences.
    pub fn is_outlier(&self, value: f64) -> bool {
        value < self.lower || value > self.upper
    }
}

/// Flag values outside `[Q1 - 1.5*IQR, Q3 + 1.5*IQR]` in every numeric column.
///
/// Only numeric columns are checked (see [`Table::numeric_values`]); others are
/// absent from the result. A checked column with no outliers, including one
/// whose cells are all missing, maps to an empty list. Missing cells are
/// ignored for both the quartiles and the flagging. A table without rows
/// yields an empty mapping.
pub fn check_outliers(table: &Table) -> Result<ColumnRows> {
    let mut report = ColumnRows::new();

    for name in table.column_names() {
        let Some(values) = table.numeric_values(&name)? else {
            continue;
        };

        let present: Vec<f64> = values.iter().flatten().copied().collect();
        let Some(fences) = IqrFences::from_values(&present) else {
            if !values.is_empty() {
                debug!("Numeric column '{}' has no present values", name);
                report.insert(name, Vec::new());
            }
            continue;
        };

        let rows: Vec<usize> = values
            .iter()
            .enumerate()
            .filter(|(_, value)| value.is_some_and(|v| fences.is_outlier(v)))
            .map(|(idx, _)| idx)
            .collect();

        debug!(
            "Column '{}': Q1={:.4}, Q3={:.4}, bounds=[{:.4}, {:.4}], {} outliers",
            name,
            fences.q1,
            fences.q3,
            fences.lower,
            fences.upper,
            rows.len()
        );
        report.insert(name, rows);
    }

    Ok(report)
}
