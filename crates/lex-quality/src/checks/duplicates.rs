//! Duplicate-row check.

use crate::error::Result;
use crate::table::Table;
use crate::types::DuplicateGroup;
use std::collections::HashMap;
use tracing::debug;

/// Find rows that exactly repeat at least one other row.
///
/// All such rows are returned as a single group in their original order,
/// regardless of how many distinct value combinations are repeated. A table
/// without duplicates yields an empty list.
pub fn check_duplicates(table: &Table) -> Result<Vec<DuplicateGroup>> {
    if table.width() == 0 {
        return Ok(Vec::new());
    }

    let keys = table.row_keys()?;

    let mut counts: HashMap<&[Option<String>], usize> = HashMap::with_capacity(keys.len());
    for key in &keys {
        *counts.entry(key.as_slice()).or_insert(0) += 1;
    }

    let duplicated: DuplicateGroup = keys
        .iter()
        .enumerate()
        .filter(|(_, key)| counts.get(key.as_slice()).copied().unwrap_or(0) > 1)
        .map(|(idx, _)| idx)
        .collect();

    debug!("Found {} duplicated rows", duplicated.len());

    if duplicated.is_empty() {
        Ok(Vec::new())
    } else {
        Ok(vec![duplicated])
    }
}
