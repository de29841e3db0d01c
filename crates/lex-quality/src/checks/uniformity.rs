//! Column type-uniformity check.

use crate::error::Result;
use crate::table::Table;
use crate::types::{ColumnRows, TypeTag};
use std::collections::BTreeSet;
use tracing::debug;

/// Classify a cell's text into a [`TypeTag`].
///
/// Precedence: integer literal, float literal, `true`/`false`, `none`, then
/// string. Every input resolves to exactly one tag.
pub fn infer_type_tag(value: &str) -> TypeTag {
    if is_integer_literal(value) {
        TypeTag::Int
    } else if value.trim().parse::<f64>().is_ok() {
        TypeTag::Float
    } else if value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("false") {
        TypeTag::Boolean
    } else if value.eq_ignore_ascii_case("none") {
        TypeTag::None
    } else {
        TypeTag::String
    }
}

/// Optional sign followed by one or more ASCII digits, surrounding
/// whitespace ignored. Not bounded by any machine integer width.
fn is_integer_literal(value: &str) -> bool {
    let trimmed = value.trim();
    let digits = trimmed
        .strip_prefix(['+', '-'])
        .unwrap_or(trimmed);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Report columns whose cells do not all share one inferred tag.
///
/// For each such column the rows whose tag is not numeric are listed in
/// ascending order. Uniform columns are omitted.
///
/// A missing cell is tagged [`TypeTag::Float`] (the NaN marker parses as a
/// float), so a gap in a text column makes it non-uniform but is itself never
/// listed.
pub fn check_uniformity(table: &Table) -> Result<ColumnRows> {
    let mut report = ColumnRows::new();

    for name in table.column_names() {
        let tags: Vec<TypeTag> = table
            .text_cells(&name)?
            .into_iter()
            .map(|cell| cell.map_or(TypeTag::Float, infer_type_tag))
            .collect();

        let distinct: BTreeSet<TypeTag> = tags.iter().copied().collect();
        if distinct.len() <= 1 {
            continue;
        }

        let rows: Vec<usize> = tags
            .iter()
            .enumerate()
            .filter(|(_, tag)| !tag.is_numeric())
            .map(|(idx, _)| idx)
            .collect();

        debug!(
            "Column '{}' is not uniform: tags {:?}, {} non-numeric rows",
            name,
            distinct,
            rows.len()
        );
        report.insert(name, rows);
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;
    use pretty_assertions::assert_eq;

    fn table(df: DataFrame) -> Table {
        Table::from_frame(df).unwrap()
    }

    #[test]
    fn test_infer_type_tag_precedence() {
        assert_eq!(infer_type_tag("42"), TypeTag::Int);
        assert_eq!(infer_type_tag("-7"), TypeTag::Int);
        assert_eq!(infer_type_tag(" 12 "), TypeTag::Int);
        assert_eq!(infer_type_tag("3.14"), TypeTag::Float);
        assert_eq!(infer_type_tag("1e5"), TypeTag::Float);
        assert_eq!(infer_type_tag("inf"), TypeTag::Float);
        assert_eq!(infer_type_tag("TRUE"), TypeTag::Boolean);
        assert_eq!(infer_type_tag("False"), TypeTag::Boolean);
        assert_eq!(infer_type_tag("NONE"), TypeTag::None);
        assert_eq!(infer_type_tag("cat"), TypeTag::String);
        assert_eq!(infer_type_tag(""), TypeTag::String);
    }

    #[test]
    fn test_integer_literal_wider_than_i64() {
        assert_eq!(infer_type_tag("123456789012345678901234567890"), TypeTag::Int);
    }

    #[test]
    fn test_sign_alone_is_not_an_integer() {
        assert_eq!(infer_type_tag("-"), TypeTag::String);
        assert_eq!(infer_type_tag("+"), TypeTag::String);
    }

    #[test]
    fn test_mixed_int_string_flags_only_string_rows() {
        let t = table(df!["col" => ["1", "2", "cat"]].unwrap());
        let report = check_uniformity(&t).unwrap();

        assert_eq!(report.get("col"), Some(&vec![2]));
    }

    #[test]
    fn test_uniform_columns_are_omitted() {
        let t = table(
            df![
                "ints" => [1i64, 2, 3],
                "words" => ["a", "b", "c"],
                "flags" => ["true", "False", "TRUE"],
            ]
            .unwrap(),
        );

        assert!(check_uniformity(&t).unwrap().is_empty());
    }

    #[test]
    fn test_int_float_mix_reported_with_no_rows() {
        let t = table(df!["n" => ["1", "2.5", "3"]].unwrap());
        let report = check_uniformity(&t).unwrap();

        assert_eq!(report.get("n"), Some(&vec![]));
    }

    #[test]
    fn test_boolean_and_none_rows_are_flagged() {
        let t = table(df!["v" => ["1", "true", "none", "4"]].unwrap());
        let report = check_uniformity(&t).unwrap();

        assert_eq!(report.get("v"), Some(&vec![1, 2]));
    }

    #[test]
    fn test_gap_in_text_column_makes_it_non_uniform() {
        let t = table(df!["col" => [Some("a"), None, Some("b")]].unwrap());
        let report = check_uniformity(&t).unwrap();

        assert_eq!(report.get("col"), Some(&vec![0, 2]));
    }

    #[test]
    fn test_gap_in_float_column_stays_uniform() {
        let t = table(df!["price" => [Some("1.5"), None, Some("3.5")]].unwrap());
        assert!(check_uniformity(&t).unwrap().is_empty());
    }

    #[test]
    fn test_gap_in_int_column_reported_without_rows() {
        let t = table(df!["n" => [Some("1"), None, Some("3")]].unwrap());
        let report = check_uniformity(&t).unwrap();

        assert_eq!(report.get("n"), Some(&vec![]));
    }

    #[test]
    fn test_empty_table() {
        let t = table(df!["v" => Vec::<&str>::new()].unwrap());
        assert!(check_uniformity(&t).unwrap().is_empty());
    }

    #[test]
    fn test_idempotent() {
        let t = table(df!["col" => ["x", "1", "y"]].unwrap());
        assert_eq!(check_uniformity(&t).unwrap(), check_uniformity(&t).unwrap());
    }
}
