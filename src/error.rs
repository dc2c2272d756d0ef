//! Error handling for shelter and police conversion runs.
//!
//! Every variant is fatal to the run that raised it. Non-fatal conditions
//! (a missing police tier, an unresolved parent name) never become errors;
//! they are logged and counted in [`crate::models::ConversionStats`].

use crate::models::PoliceTier;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV file not found at: {path}")]
    MissingInput { path: PathBuf },

    #[error("CSV error in file {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Expected {expected} fields at row {row} of {path}, saw {found}")]
    InvalidFormat {
        path: PathBuf,
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Required column '{column}' not found in {path}")]
    MissingColumn { path: PathBuf, column: String },

    #[error("Invalid value '{value}' for column '{column}' at row {row} of {path}: {reason}")]
    InvalidValue {
        path: PathBuf,
        row: usize,
        column: String,
        value: String,
        reason: String,
    },

    #[error("Error creating police object for {tier}: {source}")]
    Tier {
        tier: PoliceTier,
        #[source]
        source: Box<ConvertError>,
    },

    #[error("JSON serialization failed for {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write output file {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl ConvertError {
    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }

    pub fn missing_column(path: impl Into<PathBuf>, column: impl Into<String>) -> Self {
        Self::MissingColumn {
            path: path.into(),
            column: column.into(),
        }
    }

    pub fn invalid_value(
        path: impl Into<PathBuf>,
        row: usize,
        column: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            path: path.into(),
            row,
            column: column.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Wrap an error raised while building a record of `tier`
    pub fn in_tier(tier: PoliceTier, source: ConvertError) -> Self {
        Self::Tier {
            tier,
            source: Box::new(source),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Short variant name used when reporting the error type
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Io(_) => "Io",
            Self::MissingInput { .. } => "MissingInput",
            Self::Csv { .. } => "Csv",
            Self::InvalidFormat { .. } => "InvalidFormat",
            Self::MissingColumn { .. } => "MissingColumn",
            Self::InvalidValue { .. } => "InvalidValue",
            Self::Tier { .. } => "Tier",
            Self::Json { .. } => "Json",
            Self::Persist { .. } => "Persist",
            Self::Configuration { .. } => "Configuration",
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
