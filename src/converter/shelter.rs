//! Evacuation shelter conversion
//!
//! One CSV row becomes one [`ShelterRecord`], in source order. Any row that
//! fails coercion aborts the run before the output file is touched.

use super::{JsonWriter, open_csv, records, row_spinner};
use crate::columns::Row;
use crate::constants::{SHELTERS_KEY, shelter_columns as col};
use crate::error::{ConvertError, Result};
use crate::models::{ConversionStats, ShelterRecord};

use colored::*;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

/// Converter for the designated emergency evacuation site registry
#[derive(Debug, Clone)]
pub struct ShelterConverter {
    input_path: PathBuf,
    output_path: PathBuf,
    dry_run: bool,
    show_progress: bool,
}

impl ShelterConverter {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            dry_run: false,
            show_progress: false,
        }
    }

    /// Convert without writing the output file
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Show a row spinner and print progress lines
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Read every shelter row from the input file
    pub fn read_records(&self) -> Result<Vec<ShelterRecord>> {
        if !self.input_path.exists() {
            return Err(ConvertError::MissingInput {
                path: self.input_path.clone(),
            });
        }

        let (mut reader, columns) = open_csv(&self.input_path)?;
        columns.require_all(col::REQUIRED)?;

        let pb = row_spinner(
            self.show_progress,
            format!("Reading {}", self.input_path.display()),
        );
        let mut shelters = Vec::new();
        for entry in records(&mut reader, &columns) {
            let (number, record) = entry?;
            shelters.push(shelter_from_row(&columns.row(&record, number))?);
            pb.inc(1);
        }
        pb.finish_and_clear();

        debug!(
            "Read {} shelters from {}",
            shelters.len(),
            self.input_path.display()
        );
        Ok(shelters)
    }

    /// Convert the input file and write the shelters document
    pub fn run(&self) -> Result<ConversionStats> {
        let start_time = Instant::now();
        info!("Converting shelters from {}", self.input_path.display());

        let shelters = self.read_records()?;

        let output_bytes = if self.dry_run {
            info!("Dry run: not writing {}", self.output_path.display());
            0
        } else {
            JsonWriter::new(&self.output_path).write(SHELTERS_KEY, &shelters)?
        };

        if self.show_progress {
            println!(
                "{} {} shelters to JSON",
                "Successfully converted".bright_green(),
                shelters.len().to_string().bright_white().bold()
            );
        }

        Ok(ConversionStats {
            records_written: shelters.len(),
            output_path: self.output_path.clone(),
            output_bytes,
            dry_run: self.dry_run,
            processing_time: start_time.elapsed(),
            ..Default::default()
        })
    }

    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}

/// Map one source row to a shelter with a fresh identifier
pub fn shelter_from_row(row: &Row<'_>) -> Result<ShelterRecord> {
    Ok(ShelterRecord {
        id: Uuid::new_v4(),
        region_code: row.string(col::REGION_CODE)?,
        region_name: row.string(col::REGION_NAME)?,
        number: row.string(col::NUMBER)?,
        name: row.string(col::NAME)?,
        address: row.string(col::ADDRESS)?,
        general_flooding: row.flag(col::GENERAL_FLOODING)?,
        landslide: row.flag(col::LANDSLIDE)?,
        high_tide: row.flag(col::HIGH_TIDE)?,
        earthquake: row.flag(col::EARTHQUAKE)?,
        tsunami: row.flag(col::TSUNAMI)?,
        fire: row.flag(col::FIRE)?,
        internal_flooding: row.flag(col::INTERNAL_FLOODING)?,
        volcano: row.flag(col::VOLCANO)?,
        is_same_as_evacuation_center: row.flag(col::SAME_AS_EVACUATION_CENTER)?,
        latitude: row.float(col::LATITUDE)?,
        longitude: row.float(col::LONGITUDE)?,
        additional_info: row.optional_string(col::REMARKS),
    })
}
