//! Missing-value check.

use crate::error::Result;
use crate::table::Table;
use tracing::debug;

/// Rows holding at least one missing cell, ascending, each listed once.
pub fn check_missing_values(table: &Table) -> Result<Vec<usize>> {
    let mut any_missing = vec![false; table.height()];

    for name in table.column_names() {
        for (flag, missing) in any_missing.iter_mut().zip(table.missing_mask(&name)?) {
            *flag |= missing;
        }
    }

    let rows: Vec<usize> = any_missing
        .into_iter()
        .enumerate()
        .filter_map(|(idx, missing)| missing.then_some(idx))
        .collect();

    debug!("Found {} rows with missing values", rows.len());
    Ok(rows)
}
