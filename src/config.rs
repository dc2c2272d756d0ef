//! Configuration management and validation.
//!
//! Paths default to the fixed locations used by the app repository and can
//! be overridden, in increasing precedence, by a TOML config file, by
//! `ANSHIN_`-prefixed environment variables (`ANSHIN_SHELTER__INPUT`,
//! `ANSHIN_POLICE__OUTPUT`, ...) and by command line arguments.

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_HONBU_INPUT, DEFAULT_KEISATSUSHO_INPUT,
    DEFAULT_KOBAN_INPUT, DEFAULT_POLICE_OUTPUT, DEFAULT_SHELTER_INPUT, DEFAULT_SHELTER_OUTPUT,
    ENV_PREFIX,
};
use crate::converter::police::PoliceSources;
use crate::error::{ConvertError, Result};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Shelter converter paths
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShelterPaths {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Police converter paths, one input per tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicePaths {
    pub honbu: PathBuf,
    pub keisatsusho: PathBuf,
    pub koban: PathBuf,
    pub output: PathBuf,
}

/// Global configuration for a conversion run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterConfig {
    pub shelter: ShelterPaths,
    pub police: PolicePaths,

    /// Convert and report without writing output files
    pub dry_run: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            shelter: ShelterPaths {
                input: PathBuf::from(DEFAULT_SHELTER_INPUT),
                output: PathBuf::from(DEFAULT_SHELTER_OUTPUT),
            },
            police: PolicePaths {
                honbu: PathBuf::from(DEFAULT_HONBU_INPUT),
                keisatsusho: PathBuf::from(DEFAULT_KEISATSUSHO_INPUT),
                koban: PathBuf::from(DEFAULT_KOBAN_INPUT),
                output: PathBuf::from(DEFAULT_POLICE_OUTPUT),
            },
            dry_run: false,
        }
    }
}

impl ConverterConfig {
    /// User-level config file location, if the platform has a config dir
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load defaults, then `config_file` (if any), then the environment
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = config_file {
            if !path.exists() {
                return Err(ConvertError::configuration(format!(
                    "Config file does not exist: {}",
                    path.display()
                )));
            }
            debug!("Merging config file {}", path.display());
            figment = figment.merge(Toml::file(path));
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .map_err(|e| ConvertError::configuration(e.to_string()))
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn police_sources(&self) -> PoliceSources {
        PoliceSources {
            honbu: self.police.honbu.clone(),
            keisatsusho: self.police.keisatsusho.clone(),
            koban: self.police.koban.clone(),
        }
    }

    /// Reject empty paths and outputs that would overwrite an input
    pub fn validate(&self) -> Result<()> {
        let inputs = [
            ("shelter.input", &self.shelter.input),
            ("police.honbu", &self.police.honbu),
            ("police.keisatsusho", &self.police.keisatsusho),
            ("police.koban", &self.police.koban),
        ];
        let outputs = [
            ("shelter.output", &self.shelter.output),
            ("police.output", &self.police.output),
        ];

        for (name, path) in inputs.iter().chain(outputs.iter()) {
            if path.as_os_str().is_empty() {
                return Err(ConvertError::configuration(format!("{} is empty", name)));
            }
        }

        for (output_name, output) in &outputs {
            if let Some((input_name, _)) = inputs.iter().find(|(_, input)| input == output) {
                return Err(ConvertError::configuration(format!(
                    "{} would overwrite {}: {}",
                    output_name,
                    input_name,
                    output.display()
                )));
            }
        }

        if self.shelter.output == self.police.output {
            return Err(ConvertError::configuration(format!(
                "shelter.output and police.output are the same file: {}",
                self.police.output.display()
            )));
        }

        Ok(())
    }
}
