//! Command-line interface components.

use crate::config::ConverterConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Convert shelter and police CSV registries into the app's JSON documents.
///
/// With no subcommand, both converters run against the configured paths.
#[derive(Parser, Debug, Clone)]
#[command(name = "anshin-data")]
#[command(about = "Convert evacuation shelter and police facility CSV data to JSON")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// TOML configuration file (defaults to the user config dir if present)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Convert and report counts without writing any output file
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Convert the evacuation shelter registry
    Shelters {
        /// Shelter CSV file
        #[arg(short, long, value_name = "PATH")]
        input: Option<PathBuf>,

        /// Output JSON file
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Convert the police headquarters, station and koban registries
    Police {
        /// Headquarters (honbu) CSV file
        #[arg(long, value_name = "PATH")]
        honbu: Option<PathBuf>,

        /// Police station (keisatsusho) CSV file
        #[arg(long, value_name = "PATH")]
        keisatsusho: Option<PathBuf>,

        /// Koban and residential post CSV file
        #[arg(long, value_name = "PATH")]
        koban: Option<PathBuf>,

        /// Output JSON file
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Run both converters (the default)
    All,
}

/// Which converters a run invokes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Shelters,
    Police,
    All,
}

impl Args {
    pub fn target(&self) -> Target {
        match self.command {
            Some(Commands::Shelters { .. }) => Target::Shelters,
            Some(Commands::Police { .. }) => Target::Police,
            Some(Commands::All) | None => Target::All,
        }
    }

    /// Log level from the verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Progress lines and spinners are shown unless in quiet mode
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }

    /// Apply explicitly given paths and flags on top of loaded configuration
    pub fn apply_overrides(&self, config: &mut ConverterConfig) {
        if self.dry_run {
            config.dry_run = true;
        }

        match &self.command {
            Some(Commands::Shelters { input, output }) => {
                if let Some(input) = input {
                    config.shelter.input = input.clone();
                }
                if let Some(output) = output {
                    config.shelter.output = output.clone();
                }
            }
            Some(Commands::Police {
                honbu,
                keisatsusho,
                koban,
                output,
            }) => {
                if let Some(honbu) = honbu {
                    config.police.honbu = honbu.clone();
                }
                if let Some(keisatsusho) = keisatsusho {
                    config.police.keisatsusho = keisatsusho.clone();
                }
                if let Some(koban) = koban {
                    config.police.koban = koban.clone();
                }
                if let Some(output) = output {
                    config.police.output = output.clone();
                }
            }
            Some(Commands::All) | None => {}
        }
    }
}
