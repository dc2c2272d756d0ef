//! AnshinNavi data converter
//!
//! Converts Japanese government CSV registries into the JSON documents
//! bundled with the AnshinNavi app:
//! - designated emergency evacuation sites → `shelters.json`
//! - police headquarters, stations and koban → `polices.json`, with each
//!   station and koban linked to its parent facility by name

pub mod cli;
pub mod columns;
pub mod commands;
pub mod config;
pub mod constants;
pub mod converter;
pub mod error;
pub mod models;

pub use config::ConverterConfig;
pub use converter::{JsonWriter, PoliceConverter, ShelterConverter};
pub use error::{ConvertError, Result};
pub use models::{ConversionStats, PoliceRecord, PoliceTier, ShelterRecord};
