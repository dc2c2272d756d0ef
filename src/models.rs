//! Core data structures for shelter and police conversion.
//!
//! Defines the record types serialized for the app, the police facility
//! tiers, and the per-run statistics returned by the converters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use uuid::Uuid;

/// Designated emergency evacuation site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShelterRecord {
    pub id: Uuid,
    pub region_code: String,
    pub region_name: String,
    pub number: String,
    pub name: String,
    pub address: String,
    pub general_flooding: bool,
    pub landslide: bool,
    pub high_tide: bool,
    pub earthquake: bool,
    pub tsunami: bool,
    pub fire: bool,
    pub internal_flooding: bool,
    pub volcano: bool,
    pub is_same_as_evacuation_center: bool,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub additional_info: String,
}

/// Police facility tier, serialized with the names the app decodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoliceTier {
    /// Prefectural police headquarters (本部)
    Honbu,
    /// Police station (警察署)
    Keisatsusho,
    /// Police box or residential post (交番・駐在所)
    Koban,
}

impl PoliceTier {
    /// Processing order; each tier's parents come from the one before it
    pub const ALL: [PoliceTier; 3] = [PoliceTier::Honbu, PoliceTier::Keisatsusho, PoliceTier::Koban];

    pub fn as_str(&self) -> &'static str {
        match self {
            PoliceTier::Honbu => "honbu",
            PoliceTier::Keisatsusho => "keisatsusho",
            PoliceTier::Koban => "koban",
        }
    }

    /// Japanese facility name, for progress output
    pub fn display_name(&self) -> &'static str {
        match self {
            PoliceTier::Honbu => "本部",
            PoliceTier::Keisatsusho => "警察署",
            PoliceTier::Koban => "交番",
        }
    }

    /// Tier whose records this tier's rows point at
    pub fn parent(&self) -> Option<PoliceTier> {
        match self {
            PoliceTier::Honbu => None,
            PoliceTier::Keisatsusho => Some(PoliceTier::Honbu),
            PoliceTier::Koban => Some(PoliceTier::Keisatsusho),
        }
    }
}

impl fmt::Display for PoliceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Police headquarters, station or koban
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoliceRecord {
    pub id: Uuid,
    pub police_type: PoliceTier,
    pub name: String,
    pub phone_number: String,
    pub furigana: String,
    pub postal_code: String,
    pub prefecture: String,
    pub city_town_village: String,
    pub national_local_government_code: String,
    pub full_notation: String,
    pub town_or_village_onwards: String,
    pub remarks: String,
    pub longitude: f64,
    pub latitude: f64,
    pub is_coordinates_trustful: bool,
    /// None for honbu, honbu id for keisatsusho, keisatsusho id for koban
    pub parent: Option<Uuid>,
}

/// Record count for a single police tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierCount {
    pub tier: PoliceTier,
    /// None when the tier's source file was absent
    pub records: Option<usize>,
}

/// Statistics for one converter run
#[derive(Debug, Clone, Default)]
pub struct ConversionStats {
    /// Total records in the output document
    pub records_written: usize,
    /// Per-tier counts (police runs only)
    pub tiers: Vec<TierCount>,
    /// Rows whose declared parent name matched a known record
    pub parents_resolved: usize,
    /// Rows whose declared parent name matched nothing
    pub parents_unresolved: usize,
    pub output_path: PathBuf,
    /// Bytes written; zero for a dry run
    pub output_bytes: u64,
    pub dry_run: bool,
    pub processing_time: Duration,
}

impl ConversionStats {
    /// Tiers whose source file was missing
    pub fn skipped_tiers(&self) -> Vec<PoliceTier> {
        self.tiers
            .iter()
            .filter(|count| count.records.is_none())
            .map(|count| count.tier)
            .collect()
    }

    /// Format output size in human-readable format
    pub fn format_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.2} {}", size, UNITS[unit_index])
        }
    }
}
