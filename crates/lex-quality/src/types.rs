use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Column name to the row indexes a check flagged in that column.
pub type ColumnRows = BTreeMap<String, Vec<usize>>;

/// Row indexes reported together as duplicates.
pub type DuplicateGroup = Vec<usize>;

/// Scalar type inferred from a cell's textual form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTag {
    Int,
    Float,
    Boolean,
    None,
    String,
}

impl TypeTag {
    /// Int and float count as numeric.
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Int | Self::Float)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::None => "none",
            Self::String => "string",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of one full quality run over a table.
///
/// Built once by [`generate_report`](crate::generate_report) and never
/// modified afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct Report {
    /// Non-uniform columns and their non-numeric rows.
    pub uniformity: ColumnRows,
    /// Zero or one group holding every duplicated row.
    pub duplicate_rows: Vec<DuplicateGroup>,
    /// Rows with at least one missing cell, ascending.
    pub missing_value_rows: Vec<usize>,
    /// Numeric columns and their outlier rows.
    pub outliers: ColumnRows,
}

static_assertions::assert_impl_all!(Report: Send, Sync);

impl Report {
    /// True if no check flagged anything.
    pub fn is_clean(&self) -> bool {
        self.uniformity.is_empty()
            && self.duplicate_rows.is_empty()
            && self.missing_value_rows.is_empty()
            && self.outliers.values().all(Vec::is_empty)
    }

    /// Number of rows reported as duplicates.
    pub fn duplicate_row_count(&self) -> usize {
        self.duplicate_rows.iter().map(Vec::len).sum()
    }

    /// Total number of flagged (column, row) or row entries across all checks.
    pub fn issue_count(&self) -> usize {
        self.uniformity.values().map(Vec::len).sum::<usize>()
            + self.duplicate_row_count()
            + self.missing_value_rows.len()
            + self.outliers.values().map(Vec::len).sum::<usize>()
    }
}
