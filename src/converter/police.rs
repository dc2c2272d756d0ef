//! Police facility conversion
//!
//! Headquarters, stations and koban come from three separate files that are
//! processed in that order. Each tier records its names in a
//! [`ParentRegistry`] so rows of the next tier can point at their parent.
//! A missing file contributes no records; any row error aborts the run.

use super::registry::ParentRegistry;
use super::{JsonWriter, open_csv, records, row_spinner};
use crate::columns::Row;
use crate::constants::{POLICES_KEY, police_columns as col};
use crate::error::{ConvertError, Result};
use crate::models::{ConversionStats, PoliceRecord, PoliceTier, TierCount};

use colored::*;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Source file for each police tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoliceSources {
    pub honbu: PathBuf,
    pub keisatsusho: PathBuf,
    pub koban: PathBuf,
}

impl PoliceSources {
    pub fn path(&self, tier: PoliceTier) -> &Path {
        match tier {
            PoliceTier::Honbu => &self.honbu,
            PoliceTier::Keisatsusho => &self.keisatsusho,
            PoliceTier::Koban => &self.koban,
        }
    }
}

/// Records read from one tier's file
#[derive(Debug, Clone)]
pub struct TierOutput {
    pub tier: PoliceTier,
    pub records: Vec<PoliceRecord>,
    /// Names of this tier's records, for the next tier's parent lookups
    pub registry: ParentRegistry,
    pub parents_resolved: usize,
    pub parents_unresolved: usize,
}

/// All tiers read in one run
#[derive(Debug, Clone, Default)]
pub struct PoliceCollection {
    pub records: Vec<PoliceRecord>,
    pub tiers: Vec<TierCount>,
    pub parents_resolved: usize,
    pub parents_unresolved: usize,
}

/// Converter for the police headquarters, station and koban registries
#[derive(Debug, Clone)]
pub struct PoliceConverter {
    sources: PoliceSources,
    output_path: PathBuf,
    dry_run: bool,
    show_progress: bool,
}

impl PoliceConverter {
    pub fn new(sources: PoliceSources, output_path: impl Into<PathBuf>) -> Self {
        Self {
            sources,
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

    /// Show a row spinner and print the closing summary
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn sources(&self) -> &PoliceSources {
        &self.sources
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Read all available tiers in headquarters → station → koban order
    pub fn read_records(&self) -> Result<PoliceCollection> {
        let mut collection = PoliceCollection::default();
        let mut parents: Option<ParentRegistry> = None;

        for tier in PoliceTier::ALL {
            let output = self
                .read_tier(tier, parents.as_ref())
                .map_err(|e| ConvertError::in_tier(tier, e))?;

            match output {
                Some(output) => {
                    let line = tier_progress_line(tier, output.records.len());
                    println!("{}", line.bright_green());
                    collection.tiers.push(TierCount {
                        tier,
                        records: Some(output.records.len()),
                    });
                    collection.parents_resolved += output.parents_resolved;
                    collection.parents_unresolved += output.parents_unresolved;
                    collection.records.extend(output.records);
                    parents = Some(output.registry);
                }
                None => {
                    collection.tiers.push(TierCount { tier, records: None });
                    parents = None;
                }
            }
        }

        Ok(collection)
    }

    /// Read one tier, or None when its source file does not exist.
    ///
    /// `parents` is the registry of the previous tier, if that tier's file
    /// was present.
    pub fn read_tier(
        &self,
        tier: PoliceTier,
        parents: Option<&ParentRegistry>,
    ) -> Result<Option<TierOutput>> {
        let path = self.sources.path(tier);
        if !path.exists() {
            warn!("Skipping {} ({}): file not found", tier, path.display());
            return Ok(None);
        }

        let (mut reader, columns) = open_csv(path)?;
        columns.require_all(required_columns(tier))?;

        let pb = row_spinner(
            self.show_progress,
            format!("Reading {} {}", tier.display_name(), path.display()),
        );
        let mut output = TierOutput {
            tier,
            records: Vec::new(),
            registry: ParentRegistry::new(tier),
            parents_resolved: 0,
            parents_unresolved: 0,
        };

        for entry in records(&mut reader, &columns) {
            let (number, record) = entry?;
            let row = columns.row(&record, number);

            let parent = match parent_name_column(tier) {
                Some(column) => {
                    let name = row.string(column)?;
                    let parent = parents.and_then(|registry| registry.resolve(&name));
                    if parent.is_some() {
                        output.parents_resolved += 1;
                    } else {
                        output.parents_unresolved += 1;
                        debug!(
                            "Row {} of {}: no {} named '{}'",
                            number,
                            tier,
                            tier.parent().map_or("parent", |parent| parent.as_str()),
                            name
                        );
                    }
                    parent
                }
                None => None,
            };

            let police = police_from_row(tier, &row, parent)?;
            if tier != PoliceTier::Koban {
                output.registry.insert(&police.name, police.id);
            }
            output.records.push(police);
            pb.inc(1);
        }
        pb.finish_and_clear();

        info!(
            "Read {} {} records ({} parents resolved, {} unresolved)",
            output.records.len(),
            tier,
            output.parents_resolved,
            output.parents_unresolved
        );
        Ok(Some(output))
    }

    /// Convert all available tiers and write the polices document
    pub fn run(&self) -> Result<ConversionStats> {
        let start_time = Instant::now();
        info!("Converting police facilities to {}", self.output_path.display());

        let collection = self.read_records()?;

        let output_bytes = if self.dry_run {
            info!("Dry run: not writing {}", self.output_path.display());
            0
        } else {
            JsonWriter::new(&self.output_path).write(POLICES_KEY, &collection.records)?
        };

        if self.show_progress {
            println!(
                "{} {} total records",
                "Successfully created JSON with".bright_green(),
                collection.records.len().to_string().bright_white().bold()
            );
            if !self.dry_run {
                println!(
                    "{} {}",
                    "Output written to:".bright_cyan(),
                    self.output_path.display()
                );
            }
        }

        Ok(ConversionStats {
            records_written: collection.records.len(),
            tiers: collection.tiers,
            parents_resolved: collection.parents_resolved,
            parents_unresolved: collection.parents_unresolved,
            output_path: self.output_path.clone(),
            output_bytes,
            dry_run: self.dry_run,
            processing_time: start_time.elapsed(),
        })
    }
}

/// Per-tier count printed after each tier is read
pub fn tier_progress_line(tier: PoliceTier, count: usize) -> String {
    format!("Processed {} {} records", count, tier)
}

/// Columns a tier's file must carry
pub fn required_columns(tier: PoliceTier) -> &'static [&'static str] {
    match tier {
        PoliceTier::Honbu => &[
            col::NAME,
            col::PREFECTURE,
            col::PHONE,
            col::POSTAL_CODE,
            col::CITY,
            col::GOVERNMENT_CODE,
            col::FULL_NOTATION,
            col::TOWN_ONWARDS,
        ],
        PoliceTier::Keisatsusho => &[
            col::NAME,
            col::PREFECTURE,
            col::HONBU_NAME,
            col::PHONE,
            col::POSTAL_CODE,
            col::CITY,
            col::GOVERNMENT_CODE,
            col::FULL_NOTATION,
            col::TOWN_ONWARDS,
        ],
        PoliceTier::Koban => &[
            col::NAME,
            col::PREFECTURE_NAME,
            col::KOBAN_FURIGANA,
            col::KEISATSUSHO_NAME,
            col::PHONE,
            col::POSTAL_CODE,
            col::CITY,
            col::GOVERNMENT_CODE,
            col::FULL_NOTATION,
            col::TOWN_ONWARDS,
        ],
    }
}

/// Column holding the declared parent name, for tiers that have a parent
pub fn parent_name_column(tier: PoliceTier) -> Option<&'static str> {
    match tier {
        PoliceTier::Honbu => None,
        PoliceTier::Keisatsusho => Some(col::HONBU_NAME),
        PoliceTier::Koban => Some(col::KEISATSUSHO_NAME),
    }
}

/// Map one source row of `tier` to a police record with a fresh identifier
pub fn police_from_row(
    tier: PoliceTier,
    row: &Row<'_>,
    parent: Option<Uuid>,
) -> Result<PoliceRecord> {
    let (prefecture, furigana, remarks) = match tier {
        PoliceTier::Honbu => (
            row.string(col::PREFECTURE)?,
            String::new(),
            row.optional_string(col::REMARKS),
        ),
        PoliceTier::Keisatsusho => (
            row.string(col::PREFECTURE)?,
            row.optional_string(col::FURIGANA),
            row.optional_string(col::REMARKS),
        ),
        PoliceTier::Koban => (
            row.string(col::PREFECTURE_NAME)?,
            row.string(col::KOBAN_FURIGANA)?,
            String::new(),
        ),
    };

    Ok(PoliceRecord {
        id: Uuid::new_v4(),
        police_type: tier,
        name: row.string(col::NAME)?,
        phone_number: row.string(col::PHONE)?,
        furigana,
        postal_code: row.string(col::POSTAL_CODE)?,
        prefecture,
        city_town_village: row.string(col::CITY)?,
        national_local_government_code: row.string(col::GOVERNMENT_CODE)?,
        full_notation: row.string(col::FULL_NOTATION)?,
        town_or_village_onwards: row.string(col::TOWN_ONWARDS)?,
        remarks,
        longitude: row.float_or(col::LONGITUDE, 0.0)?,
        latitude: row.float_or(col::LATITUDE, 0.0)?,
        is_coordinates_trustful: row.positive_flag(col::IS_TRUSTFUL)?,
        parent,
    })
}
