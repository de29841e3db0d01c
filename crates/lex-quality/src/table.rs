//! The loaded table the quality checks read from.
//!
//! A [`Table`] keeps two aligned views of the same data:
//!
//! - the *typed* frame, where polars has inferred a storage dtype per column
//!   (Int64, Float64, Boolean, String, ...), and
//! - the *text* frame, where every column is a string column holding each
//!   cell's original textual form.
//!
//! Type-uniformity works on the text view. Outlier detection works on the typed
//! view, falling back to the text view for columns polars left as text.
//! Neither view is ever mutated after construction.

use crate::checks::infer_type_tag;
use crate::config::LoadOptions;
use crate::error::{QualityError, Result, ResultExt};
use crate::utils::{is_float_dtype, is_numeric_dtype};
use polars::io::csv::read::{CsvParseOptions, CsvReadOptions, NullValues};
use polars::prelude::*;
use std::path::Path;
use tracing::{debug, info};

/// An immutable, column-oriented table with zero-based row indexes.
#[derive(Debug, Clone)]
pub struct Table {
    frame: DataFrame,
    text: DataFrame,
}

static_assertions::assert_impl_all!(Table: Send, Sync);

impl Table {
    /// Load a delimited text file.
    ///
    /// The file is parsed twice: once with dtype inference and once with every
    /// column read as text, so both views share the same null handling.
    pub fn load(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Self> {
        let path = path.as_ref();
        options.validate()?;

        if !path.exists() {
            return Err(QualityError::FileNotFound(path.to_path_buf()));
        }

        info!("Loading table from: {}", path.display());

        let load_failed = |e: PolarsError| QualityError::LoadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        };

        let frame =
            read_delimited(path, options, options.infer_schema_length).map_err(load_failed)?;
        // An inference length of zero makes polars read every column as String.
        let text = read_delimited(path, options, Some(0)).map_err(load_failed)?;

        if frame.shape() != text.shape() {
            return Err(QualityError::LoadFailed {
                path: path.to_path_buf(),
                reason: format!(
                    "typed and text reads disagree on shape: {:?} vs {:?}",
                    frame.shape(),
                    text.shape()
                ),
            });
        }

        info!("Table loaded: {} rows x {} columns", frame.height(), frame.width());
        Ok(Self { frame, text })
    }

    /// Wrap an in-memory frame.
    ///
    /// The text view is derived by casting each column to String, so values
    /// take polars' canonical formatting (e.g. `2.0` for a float two).
    pub fn from_frame(frame: DataFrame) -> Result<Self> {
        let columns = frame
            .get_columns()
            .iter()
            .map(|col| col.cast(&DataType::String))
            .collect::<PolarsResult<Vec<Column>>>()
            .context("Failed to derive text view of frame")?;
        let text = DataFrame::new(columns)?;

        debug!("Wrapped frame: {:?}", frame.shape());
        Ok(Self { frame, text })
    }

    /// Number of rows (N).
    pub fn height(&self) -> usize {
        self.frame.height()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.frame.width()
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        self.frame.shape()
    }

    /// True if the table has no rows or no columns.
    pub fn is_empty(&self) -> bool {
        self.height() == 0 || self.width() == 0
    }

    /// Column names in table order.
    pub fn column_names(&self) -> Vec<String> {
        self.frame
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// The typed series for a column.
    pub fn typed_column(&self, name: &str) -> Result<&Series> {
        self.frame
            .column(name)
            .map(|col| col.as_materialized_series())
            .map_err(|_| QualityError::ColumnNotFound(name.to_string()))
    }

    /// Whether a column holds numbers, see [`Table::numeric_values`].
    pub fn is_numeric_column(&self, name: &str) -> Result<bool> {
        Ok(self.numeric_values(name)?.is_some())
    }

    /// Per-row missing flags for a column.
    ///
    /// A cell is missing when it is null in either view, or NaN in a float column.
    pub fn missing_mask(&self, name: &str) -> Result<Vec<bool>> {
        let series = self.typed_column(name)?;
        let text = self.text_series(name)?;

        let mut mask: Vec<bool> = series
            .is_null()
            .into_iter()
            .zip(text.is_null().into_iter())
            .map(|(typed, raw)| typed.unwrap_or(false) || raw.unwrap_or(false))
            .collect();

        if is_float_dtype(series.dtype()) {
            let floats = series.cast(&DataType::Float64)?;
            for (slot, value) in mask.iter_mut().zip(floats.f64()?.into_iter()) {
                if value.is_some_and(f64::is_nan) {
                    *slot = true;
                }
            }
        }

        Ok(mask)
    }

    /// Original textual form of every cell; `None` is the missing marker.
    pub fn text_cells(&self, name: &str) -> Result<Vec<Option<&str>>> {
        let mask = self.missing_mask(name)?;
        let text = self.text_series(name)?.str()?;

        Ok(text
            .into_iter()
            .zip(mask)
            .map(|(value, missing)| if missing { None } else { value })
            .collect())
    }

    /// Values of a numeric column as f64; `None` for non-numeric columns.
    ///
    /// A column is numeric when its storage dtype is integer or float, or when
    /// it is a text column whose every present cell tags as `int` or `float`
    /// (e.g. whitespace-padded numbers the CSV reader leaves as text). A
    /// non-empty column with no present cells counts as numeric.
    ///
    /// Missing cells come back as `None` entries.
    pub fn numeric_values(&self, name: &str) -> Result<Option<Vec<Option<f64>>>> {
        let series = self.typed_column(name)?;

        if is_numeric_dtype(series.dtype()) {
            let floats = series.cast(&DataType::Float64)?;
            let values = floats
                .f64()?
                .into_iter()
                .map(|v| v.filter(|x| !x.is_nan()))
                .collect();
            return Ok(Some(values));
        }

        if !matches!(series.dtype(), DataType::String | DataType::Null) || self.height() == 0 {
            return Ok(None);
        }

        let cells = self.text_cells(name)?;
        if !cells
            .iter()
            .flatten()
            .all(|cell| infer_type_tag(cell).is_numeric())
        {
            return Ok(None);
        }

        let values = cells
            .into_iter()
            .map(|cell| {
                cell.and_then(|v| v.trim().parse::<f64>().ok())
                    .filter(|x| !x.is_nan())
            })
            .collect();

        debug!("Column '{}' read as numeric from its text", name);
        Ok(Some(values))
    }

    /// Every row rendered as one key per column, for equality comparison.
    ///
    /// Values compare at the storage level, so `1` and `1.0` in a float
    /// column are the same value. Missing cells compare equal to each other.
    pub(crate) fn row_keys(&self) -> Result<Vec<Vec<Option<String>>>> {
        let mut rows: Vec<Vec<Option<String>>> =
            vec![Vec::with_capacity(self.width()); self.height()];

        for col in self.frame.get_columns() {
            let name = col.name().to_string();
            let mask = self.missing_mask(&name)?;
            let as_text = col.as_materialized_series().cast(&DataType::String)?;

            let values = as_text.str()?;

            for ((row, value), missing) in rows.iter_mut().zip(values.into_iter()).zip(mask) {
                row.push(if missing { None } else { value.map(str::to_string) });
            }
        }

        Ok(rows)
    }

    fn text_series(&self, name: &str) -> Result<&Series> {
        self.text
            .column(name)
            .map(|col| col.as_materialized_series())
            .map_err(|_| QualityError::ColumnNotFound(name.to_string()))
    }
}

fn read_delimited(
    path: &Path,
    options: &LoadOptions,
    infer_schema_length: Option<usize>,
) -> PolarsResult<DataFrame> {
    let null_values = NullValues::AllColumns(
        options
            .null_values
            .iter()
            .map(|v| PlSmallStr::from(v.as_str()))
            .collect(),
    );

    CsvReadOptions::default()
        .with_has_header(options.has_header)
        .with_infer_schema_length(infer_schema_length)
        .with_parse_options(
            CsvParseOptions::default()
                .with_separator(options.separator_byte())
                .with_quote_char(Some(b'"'))
                .with_null_values(Some(null_values)),
        )
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()
}
