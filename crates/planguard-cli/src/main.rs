//! Planguard CLI Application
//!
//! Command-line interface for the planguard plan validator.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use planguard_core::ValidatorBuilder;
use renderer::TerminalRenderer;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        rules_file,
        no_color,
        command,
    } = Args::parse();

    let validator = ValidatorBuilder::new()
        .with_rules_path(rules_file)
        .build()
        .context("Failed to initialize validator")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Planguard started");

    let cli = Cli::new(validator, renderer);
    match command {
        Commands::Validate(args) => cli.validate(args),
        Commands::Rules => cli.rules(),
        Commands::Schema => cli.schema(),
    }
}
