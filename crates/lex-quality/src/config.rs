//! Configuration types for loading delimited files.
//!
//! The quality checks themselves take no options; the only knobs are the
//! ones needed to turn a delimited text file into a [`Table`](crate::Table).

use serde::{Deserialize, Serialize};

/// Multiplier applied to the interquartile range when computing outlier fences.
pub const IQR_MULTIPLIER: f64 = 1.5;

/// Tokens that are read as the missing marker when they fill an entire field.
pub const DEFAULT_NULL_VALUES: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Options controlling how a delimited file is parsed into a table.
///
/// Use [`LoadOptions::builder()`] to create validated options.
///
/// # Example
///
/// ```rust,ignore
/// use lex_quality::config::LoadOptions;
///
/// let options = LoadOptions::builder()
///     .separator(';')
///     .has_header(true)
///     .build()?;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadOptions {
    /// Field separator. Must be a single ASCII character.
    /// Default: ','
    pub separator: char,

    /// Whether the first line holds column names.
    /// Default: true
    pub has_header: bool,

    /// Field values that are read as missing.
    /// Default: [`DEFAULT_NULL_VALUES`]
    pub null_values: Vec<String>,

    /// Number of rows scanned to infer column dtypes. `None` scans every row.
    /// Default: None
    pub infer_schema_length: Option<usize>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            separator: ',',
            has_header: true,
            null_values: default_null_values(),
            infer_schema_length: None,
        }
    }
}

fn default_null_values() -> Vec<String> {
    DEFAULT_NULL_VALUES.iter().map(|s| s.to_string()).collect()
}

impl LoadOptions {
    /// Create a new options builder.
    pub fn builder() -> LoadOptionsBuilder {
        LoadOptionsBuilder::default()
    }

    /// Validate the options and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if !self.separator.is_ascii() || matches!(self.separator, '\n' | '\r' | '"') {
            return Err(ConfigValidationError::InvalidSeparator(self.separator));
        }

        if self.infer_schema_length == Some(0) {
            return Err(ConfigValidationError::InvalidInferSchemaLength);
        }

        Ok(())
    }

    /// Separator as the single byte polars expects.
    pub(crate) fn separator_byte(&self) -> u8 {
        // validate() guarantees an ASCII separator
        self.separator as u8
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid separator {0:?} (must be a single ASCII character other than a newline or quote)")]
    InvalidSeparator(char),

    #[error("Invalid infer_schema_length: 0 (use None to scan every row)")]
    InvalidInferSchemaLength,
}

/// Builder for [`LoadOptions`] with fluent API.
#[derive(Debug, Default)]
pub struct LoadOptionsBuilder {
    separator: Option<char>,
    has_header: Option<bool>,
    null_values: Option<Vec<String>>,
    infer_schema_length: Option<usize>,
}

impl LoadOptionsBuilder {
    /// Set the field separator.
    pub fn separator(mut self, separator: char) -> Self {
        self.separator = Some(separator);
        self
    }

    /// Set whether the first line is a header row.
    pub fn has_header(mut self, has_header: bool) -> Self {
        self.has_header = Some(has_header);
        self
    }

    /// Replace the list of null tokens.
    pub fn null_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.null_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Limit dtype inference to the first `rows` rows.
    pub fn infer_schema_length(mut self, rows: usize) -> Self {
        self.infer_schema_length = Some(rows);
        self
    }

    /// Build the options.
    ///
    /// Returns validated `LoadOptions` or an error if validation fails.
    pub fn build(self) -> Result<LoadOptions, ConfigValidationError> {
        let options = LoadOptions {
            separator: self.separator.unwrap_or(','),
            has_header: self.has_header.unwrap_or(true),
            null_values: self.null_values.unwrap_or_else(default_null_values),
            infer_schema_length: self.infer_schema_length,
        };

        options.validate()?;
        Ok(options)
    }
}
