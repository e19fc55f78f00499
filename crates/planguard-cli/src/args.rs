use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};

/// Validate task plans for feasibility, dependency and risk problems
///
/// Planguard reads a plan document (JSON with a `task` and a list of
/// `steps`), runs its feasibility, resource, timeline, dependency and risk
/// evaluators, and prints a scored report with recommendations.
#[derive(Parser)]
#[command(version, about, name = "planguard")]
pub struct Args {
    /// Path to a JSON rule file. Defaults to
    /// $XDG_CONFIG_HOME/planguard/rules.json when it exists
    #[arg(long, global = true)]
    pub rules_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the planguard CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Validate a plan document
    #[command(alias = "v")]
    Validate(ValidateArgs),
    /// Print the effective rule tables as JSON
    Rules,
    /// Print the JSON schema of plan documents
    Schema,
}

/// Validate a plan document
///
/// Reads the document from FILE, or from standard input when FILE is omitted
/// or `-`.
#[derive(ClapArgs)]
pub struct ValidateArgs {
    /// Plan document to validate
    #[arg(help = "Path to the plan document (JSON); reads stdin when omitted or '-'")]
    pub file: Option<PathBuf>,

    /// Override the task named in the document
    #[arg(short, long, help = "Task description to validate the plan against")]
    pub task: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Markdown)]
    pub format: OutputFormat,

    /// Fail when the score is below this value
    #[arg(
        long,
        value_parser = clap::value_parser!(u8).range(0..=100),
        help = "Exit with an error when the score is below this value (0-100)"
    )]
    pub min_score: Option<u8>,
}

/// Output format for validation reports
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    /// Markdown report rendered for the terminal
    Markdown,
    /// The raw validation result as JSON
    Json,
}
