//! getset - generate getters, setters and interfaces for Go structs
//!
//! Parses Go sources, flattens the selected structs and writes the
//! accessor files next to each source file.

use anyhow::Result;
use clap::Parser;
use std::process;

mod cli;
mod config;
mod error;

use cli::Cli;
use config::FileConfig;
use error::CliError;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .try_init()?;

    let cli = Cli::parse();

    if let Err(err) = execute(&cli) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
    Ok(())
}

fn execute(cli: &Cli) -> Result<(), CliError> {
    let file_config = match &cli.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let options = config::resolve(cli, file_config)?;

    let report = getset_gen::run(&options)?;
    tracing::debug!("wrote {} file(s)", report.written.len());

    if !options.quiet {
        println!("done");
    }
    Ok(())
}
