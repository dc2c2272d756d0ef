//! JSON output for converted records
//!
//! Documents are a single object wrapping the record array under a fixed
//! key, pretty-printed with 2-space indentation and non-ASCII left
//! unescaped. Output goes to a temporary file next to the target and is
//! renamed into place, so a failed run never leaves a partial document.

use crate::error::{ConvertError, Result};

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// `{ "<key>": [records...] }`
struct Document<'a, T> {
    key: &'a str,
    records: &'a [T],
}

impl<T: Serialize> Serialize for Document<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(self.key, self.records)?;
        map.end()
    }
}

/// Writes one wrapped JSON document to a fixed path
#[derive(Debug, Clone)]
pub struct JsonWriter {
    output_path: PathBuf,
}

impl JsonWriter {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Write `records` under `key`, replacing any existing file.
    ///
    /// Creates the destination directory if needed and returns the number
    /// of bytes written.
    pub fn write<T: Serialize>(&self, key: &str, records: &[T]) -> Result<u64> {
        let parent = match self.output_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&parent)?;

        let temp = NamedTempFile::new_in(&parent)?;
        {
            let mut writer = BufWriter::new(temp.as_file());
            serde_json::to_writer_pretty(&mut writer, &Document { key, records }).map_err(
                |source| ConvertError::Json {
                    path: self.output_path.clone(),
                    source,
                },
            )?;
            writer.flush()?;
        }
        temp.as_file().sync_all()?;

        temp.persist(&self.output_path)
            .map_err(|e| ConvertError::Persist {
                path: self.output_path.clone(),
                source: e.error,
            })?;

        let bytes = fs::metadata(&self.output_path)?.len();
        debug!(
            "Wrote {} records ({} bytes) to {}",
            records.len(),
            bytes,
            self.output_path.display()
        );
        Ok(bytes)
    }
}
