use anshin_data::cli::{Args, Target};
use anshin_data::commands;
use anyhow::Context;
use clap::Parser;
use std::process;
use tracing::error;

fn main() {
    let args = Args::parse();
    commands::setup_logging(&args);

    match run(&args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            report_failure(&error);
            process::exit(1);
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let config = commands::load_configuration(args).context("Failed to load configuration")?;

    let context = match args.target() {
        Target::Shelters => "Error converting CSV to JSON",
        Target::Police => "Error in police conversion",
        Target::All => "Conversion failed",
    };
    commands::run(args, &config).context(context)?;
    Ok(())
}

/// Log the failure, then print the error type and cause chain to stdout
fn report_failure(error: &anyhow::Error) {
    error!(kind = commands::error_kind(error), "{}", error);
    println!("{}", commands::failure_report(error));
}
