//! CSV to JSON conversion pipelines
//!
//! Source CSV → column map → row mapper → record → JSON writer. The shelter
//! and police converters share the CSV reader setup and progress reporting
//! defined here; neither shares state with the other.

pub mod police;
pub mod registry;
pub mod shelter;
pub mod writer;

#[cfg(test)]
pub mod tests;

pub use self::{police::PoliceConverter, shelter::ShelterConverter, writer::JsonWriter};

use crate::columns::ColumnMap;
use crate::error::{ConvertError, Result};

use csv::{Reader, ReaderBuilder, StringRecord};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Open a UTF-8 CSV file with a header row and index its columns
pub(crate) fn open_csv(path: &Path) -> Result<(Reader<File>, ColumnMap)> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| ConvertError::csv(path, e))?;

    let headers = reader
        .headers()
        .map_err(|e| ConvertError::csv(path, e))?
        .clone();
    let columns = ColumnMap::from_headers(path, &headers);

    debug!("Opened {} with {} columns", path.display(), headers.len());
    Ok((reader, columns))
}

/// Iterate data records with 1-based row numbers, attaching the file path
/// to read errors.
///
/// Short rows are accepted and read as blank cells. A row wider than the
/// header is rejected, since its cells no longer line up with the columns.
pub(crate) fn records<'a>(
    reader: &'a mut Reader<File>,
    columns: &'a ColumnMap,
) -> impl Iterator<Item = Result<(usize, StringRecord)>> + 'a {
    reader.records().enumerate().map(move |(index, record)| {
        let number = index + 1;
        let record = record.map_err(|e| ConvertError::csv(columns.path(), e))?;
        if record.len() > columns.width() {
            return Err(ConvertError::InvalidFormat {
                path: columns.path().to_path_buf(),
                row: number,
                expected: columns.width(),
                found: record.len(),
            });
        }
        Ok((number, record))
    })
}

/// Spinner counting rows of one file; hidden when `show` is false
pub(crate) fn row_spinner(show: bool, message: String) -> ProgressBar {
    if !show {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg} [{pos} rows]") {
        pb.set_style(style);
    }
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
