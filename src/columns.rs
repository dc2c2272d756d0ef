//! Column lookup and cell coercion for source CSV rows
//!
//! A [`ColumnMap`] indexes the header of one source file. Each data row is
//! then read through a [`Row`], which resolves cells by column name and
//! applies the string/bool/float coercions shared by both converters.

use crate::error::{ConvertError, Result};
use csv::StringRecord;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Column name to index mapping for one CSV file
#[derive(Debug, Clone)]
pub struct ColumnMap {
    path: PathBuf,
    name_to_index: HashMap<String, usize>,
    width: usize,
}

impl ColumnMap {
    /// Index a header record; names are trimmed, first occurrence wins
    pub fn from_headers(path: &Path, headers: &StringRecord) -> Self {
        let mut name_to_index = HashMap::with_capacity(headers.len());
        for (index, header) in headers.iter().enumerate() {
            name_to_index.entry(header.trim().to_string()).or_insert(index);
        }

        Self {
            path: path.to_path_buf(),
            name_to_index,
            width: headers.len(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of header fields, duplicates included
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn get_index(&self, column: &str) -> Option<usize> {
        self.name_to_index.get(column).copied()
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.name_to_index.contains_key(column)
    }

    /// Fail on the first column in `columns` missing from the header
    pub fn require_all(&self, columns: &[&str]) -> Result<()> {
        match columns.iter().find(|column| !self.has_column(column)) {
            Some(column) => Err(ConvertError::missing_column(&self.path, *column)),
            None => Ok(()),
        }
    }

    /// Read a data record through this mapping; `number` is 1-based
    pub fn row<'a>(&'a self, record: &'a StringRecord, number: usize) -> Row<'a> {
        Row {
            columns: self,
            record,
            number,
        }
    }
}

/// One data row with named, typed accessors
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    columns: &'a ColumnMap,
    record: &'a StringRecord,
    number: usize,
}

impl<'a> Row<'a> {
    pub fn number(&self) -> usize {
        self.number
    }

    /// Trimmed cell value, or None when the column is absent from the header
    pub fn cell(&self, column: &str) -> Option<&'a str> {
        self.columns
            .get_index(column)
            .map(|index| self.record.get(index).unwrap_or("").trim())
    }

    fn required_cell(&self, column: &str) -> Result<&'a str> {
        self.cell(column)
            .ok_or_else(|| ConvertError::missing_column(self.columns.path(), column))
    }

    /// Text from a column that must exist; an empty cell is kept as ""
    pub fn string(&self, column: &str) -> Result<String> {
        self.required_cell(column).map(str::to_string)
    }

    /// Text from a column that may be absent
    pub fn optional_string(&self, column: &str) -> String {
        self.cell(column).unwrap_or("").to_string()
    }

    /// Truthiness of a column that must exist
    pub fn flag(&self, column: &str) -> Result<bool> {
        self.required_cell(column).map(is_truthy)
    }

    /// Finite float from a column that must exist and be non-blank
    pub fn float(&self, column: &str) -> Result<f64> {
        let value = self.required_cell(column)?;
        if value.is_empty() {
            return Err(self.invalid(column, value, "value is required"));
        }
        self.parse_float(column, value)
    }

    /// Float from the first candidate column holding a non-blank value.
    ///
    /// Candidates are alternative spellings of one logical column and are
    /// all treated as equally valid. Absent or blank cells yield `default`;
    /// a non-numeric value is an error.
    pub fn float_or(&self, candidates: &[&str], default: f64) -> Result<f64> {
        let found = candidates
            .iter()
            .filter_map(|column| self.cell(column).map(|value| (*column, value)))
            .find(|(_, value)| !value.is_empty());

        match found {
            Some((column, value)) => self.parse_float(column, value),
            None => Ok(default),
        }
    }

    /// Numeric flag that is true when the value is greater than zero.
    /// Absent or blank cells are false.
    pub fn positive_flag(&self, column: &str) -> Result<bool> {
        match self.cell(column) {
            Some(value) if !value.is_empty() => Ok(self.parse_float(column, value)? > 0.0),
            _ => Ok(false),
        }
    }

    fn parse_float(&self, column: &str, value: &str) -> Result<f64> {
        match value.parse::<f64>() {
            Ok(parsed) if parsed.is_finite() => Ok(parsed),
            Ok(_) => Err(self.invalid(column, value, "value must be finite")),
            Err(e) => Err(self.invalid(column, value, e.to_string())),
        }
    }

    fn invalid(&self, column: &str, value: &str, reason: impl Into<String>) -> ConvertError {
        ConvertError::invalid_value(self.columns.path(), self.number, column, value, reason)
    }
}

/// Truthiness of a raw cell value.
///
/// Blank is false, numbers are true when non-zero, `true`/`false` are read
/// case-insensitively, and any other text is true.
pub fn is_truthy(value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() {
        return false;
    }
    if let Ok(number) = value.parse::<f64>() {
        return number != 0.0;
    }
    if value.eq_ignore_ascii_case("false") {
        return false;
    }
    true
}
