//! Command implementations for the anshin-data CLI
//!
//! Sets up logging and layered configuration, runs the selected converters
//! and prints their summaries.

use crate::cli::{Args, Target};
use crate::config::ConverterConfig;
use crate::converter::{PoliceConverter, ShelterConverter};
use crate::error::{ConvertError, Result};
use crate::models::ConversionStats;

use colored::*;
use tracing::{debug, info};

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("anshin_data={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
}

/// Load configuration using layered approach (file -> env -> args)
pub fn load_configuration(args: &Args) -> Result<ConverterConfig> {
    let config_file = match &args.config {
        Some(path) => Some(path.clone()),
        None => ConverterConfig::default_config_path().filter(|path| path.exists()),
    };

    match &config_file {
        Some(path) => info!("Using config file: {}", path.display()),
        None => info!("No config file found, using defaults and environment variables"),
    }

    let mut config = ConverterConfig::load_layered(config_file.as_deref())?;
    args.apply_overrides(&mut config);
    config.validate()?;

    debug!("Loaded configuration: {:?}", config);
    Ok(config)
}

/// Convert the shelter registry
pub fn run_shelters(config: &ConverterConfig, show_progress: bool) -> Result<ConversionStats> {
    ShelterConverter::new(&config.shelter.input, &config.shelter.output)
        .with_dry_run(config.dry_run)
        .with_progress(show_progress)
        .run()
}

/// Convert the police registries
pub fn run_police(config: &ConverterConfig, show_progress: bool) -> Result<ConversionStats> {
    PoliceConverter::new(config.police_sources(), &config.police.output)
        .with_dry_run(config.dry_run)
        .with_progress(show_progress)
        .run()
}

/// Print a one-block summary of a converter run
pub fn print_summary(label: &str, stats: &ConversionStats) {
    println!("\n{}", format!("{} summary", label).bright_green().bold());
    println!(
        "  {} {}",
        "Records:".bright_cyan(),
        stats.records_written.to_string().bright_white().bold()
    );

    for count in &stats.tiers {
        let records = match count.records {
            Some(records) => records.to_string(),
            None => "skipped (file not found)".bright_yellow().to_string(),
        };
        println!(
            "    {} ({}): {}",
            count.tier,
            count.tier.display_name(),
            records
        );
    }

    if stats.parents_resolved + stats.parents_unresolved > 0 {
        println!(
            "  {} {} resolved, {} unresolved",
            "Parents:".bright_cyan(),
            stats.parents_resolved,
            stats.parents_unresolved
        );
    }

    if stats.dry_run {
        println!(
            "  {} {} (dry run, not written)",
            "Output:".bright_cyan(),
            stats.output_path.display()
        );
    } else {
        println!(
            "  {} {} ({})",
            "Output:".bright_cyan(),
            stats.output_path.display(),
            ConversionStats::format_size(stats.output_bytes)
        );
    }
    println!(
        "  {} {:.2?}",
        "Time:".bright_cyan(),
        stats.processing_time
    );
}

/// Run the converters selected by `args` with the loaded configuration.
///
/// Shelters run before police; the first failure stops the run.
pub fn run(args: &Args, config: &ConverterConfig) -> Result<Vec<(Target, ConversionStats)>> {
    let show_progress = args.show_progress();
    let mut results = Vec::new();

    if matches!(args.target(), Target::Shelters | Target::All) {
        let stats = run_shelters(config, show_progress)?;
        if show_progress {
            print_summary("Shelter", &stats);
        }
        results.push((Target::Shelters, stats));
    }

    if matches!(args.target(), Target::Police | Target::All) {
        let stats = run_police(config, show_progress)?;
        if show_progress {
            print_summary("Police", &stats);
        }
        results.push((Target::Police, stats));
    }

    Ok(results)
}

/// Variant name of the first [`ConvertError`] in the chain
pub fn error_kind(error: &anyhow::Error) -> &'static str {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<ConvertError>())
        .map(ConvertError::kind)
        .unwrap_or("Unknown")
}

/// Human-readable failure text: error type, message, then the cause chain
pub fn failure_report(error: &anyhow::Error) -> String {
    let mut report = format!("Error type: {}\nError: {}", error_kind(error), error);

    let causes: Vec<_> = error.chain().skip(1).collect();
    if !causes.is_empty() {
        report.push_str("\n\nCaused by:");
        for (i, cause) in causes.iter().enumerate() {
            report.push_str(&format!("\n  {}: {}", i, cause));
        }
    }
    report
}
