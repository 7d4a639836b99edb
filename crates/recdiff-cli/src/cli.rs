use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "recdiff",
    about = "recdiff — after-biased diff of JSON records and keyed collections",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Diff two documents, choosing record or collection diff from the first
    Diff(DiffArgs),
    /// Diff two records
    Records(RecordsArgs),
    /// Diff two collections matched by a key field
    Collections(CollectionsArgs),
}

#[derive(Args)]
pub struct DiffArgs {
    /// Before and after JSON files (`-` for stdin)
    #[arg(value_name = "FILE")]
    pub inputs: Vec<String>,
    /// Field correlating collection entries
    #[arg(short, long)]
    pub key: Option<String>,
}

#[derive(Args)]
pub struct RecordsArgs {
    /// Before and after JSON files (`-` for stdin)
    #[arg(value_name = "FILE")]
    pub inputs: Vec<String>,
}

#[derive(Args)]
pub struct CollectionsArgs {
    /// Before and after JSON files (`-` for stdin)
    #[arg(value_name = "FILE")]
    pub inputs: Vec<String>,
    /// Field correlating collection entries
    #[arg(short, long)]
    pub key: Option<String>,
}
