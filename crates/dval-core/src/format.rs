//! # Data Format Parsing
//!
//! Turns raw object bytes into a `serde_json::Value` ready for schema
//! validation. The parser is chosen from the object key's suffix
//! (case-sensitive):
//!
//! | Suffix  | Result |
//! |---------|--------|
//! | `.json` | the parsed JSON value, whatever its shape |
//! | `.csv`  | an array of objects, one per data row, keyed by header |
//!
//! ## CSV Row Shape
//!
//! Every CSV value is a string; no type inference is attempted. Rows are
//! read in flexible mode, so ragged rows are accepted:
//!
//! - A row shorter than the header maps its missing trailing columns to
//!   `null`.
//! - A row longer than the header keeps its surplus values, in order, as
//!   an array of strings under [`CSV_OVERFLOW_KEY`].
//! - Blank lines are skipped, and input with no data rows parses to `[]`.
//! - When a header name repeats, the rightmost column wins.
//! - A leading UTF-8 byte order mark is stripped, so the first header
//!   name never starts with `\u{feff}`.
//!
//! ## JSON Literals
//!
//! JSON is parsed strictly: the non-standard `NaN`, `Infinity` and
//! `-Infinity` literals are parse errors, not numbers.

use serde_json::{Map, Value};

use crate::error::FormatError;

/// Key under which values beyond the header width are collected.
pub const CSV_OVERFLOW_KEY: &str = "_extra";

/// A supported data file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataFormat {
    /// A single JSON document.
    Json,
    /// Comma-separated rows with a header line.
    Csv,
}

impl DataFormat {
    /// Select the format for an object key.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::Unsupported`] for any key not ending in
    /// `.json` or `.csv`.
    pub fn from_key(key: &str) -> Result<Self, FormatError> {
        if key.ends_with(".json") {
            Ok(Self::Json)
        } else if key.ends_with(".csv") {
            Ok(Self::Csv)
        } else {
            Err(FormatError::Unsupported {
                key: key.to_string(),
            })
        }
    }

    /// Lowercase format name used in logs and error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }

    /// Parse raw object bytes in this format.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::Parse`] if the bytes are not UTF-8 or are not
    /// well-formed in this format.
    pub fn parse(self, bytes: &[u8]) -> Result<Value, FormatError> {
        let text = std::str::from_utf8(bytes).map_err(|e| self.parse_error(e))?;
        match self {
            Self::Json => serde_json::from_str(text).map_err(|e| self.parse_error(e)),
            Self::Csv => parse_csv(text).map_err(|e| self.parse_error(e)),
        }
    }

    fn parse_error(self, reason: impl ToString) -> FormatError {
        FormatError::Parse {
            format: self.name(),
            reason: reason.to_string(),
        }
    }
}

impl std::fmt::Display for DataFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

fn parse_csv(text: &str) -> Result<Value, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());
    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let mut row = Map::with_capacity(headers.len());
        for (i, name) in headers.iter().enumerate() {
            let value = record
                .get(i)
                .map_or(Value::Null, |v| Value::String(v.to_string()));
            row.insert(name.to_string(), value);
        }
        if record.len() > headers.len() {
            let extra = record
                .iter()
                .skip(headers.len())
                .map(|v| Value::String(v.to_string()))
                .collect();
            row.insert(CSV_OVERFLOW_KEY.to_string(), Value::Array(extra));
        }
        rows.push(Value::Object(row));
    }
    Ok(Value::Array(rows))
}
