use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "levelprint",
    about = "levelprint — detect copied levels by object layout",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Fingerprint store file (overrides the config file)
    #[arg(long, global = true)]
    pub store: Option<PathBuf>,

    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Fail instead of warning on degenerate input
    #[arg(long, global = true)]
    pub strict: bool,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fingerprint a level and add it to the store
    Register(RegisterArgs),
    /// Rank stored levels by similarity to a level
    Detect(DetectArgs),
    /// List stored level ids
    List,
    /// Show per-category totals of a stored fingerprint
    Show(ShowArgs),
    /// Fingerprint a level without touching the store
    Inspect(InspectArgs),
    /// Remove a level from the store
    Remove(RemoveArgs),
}

#[derive(Args)]
pub struct RegisterArgs {
    /// Level file: decoded level string, or `.json` point list
    pub file: PathBuf,
    /// Level id to register under
    #[arg(long)]
    pub id: u32,
}

#[derive(Args)]
pub struct DetectArgs {
    /// Level file: decoded level string, or `.json` point list
    pub file: PathBuf,
    /// Minimum similarity (defaults to the configured threshold)
    #[arg(short, long)]
    pub threshold: Option<f64>,
}

#[derive(Args)]
pub struct ShowArgs {
    pub id: u32,
    /// Also print the raw fingerprint as hex
    #[arg(long)]
    pub hex: bool,
}

#[derive(Args)]
pub struct InspectArgs {
    pub file: PathBuf,
}

#[derive(Args)]
pub struct RemoveArgs {
    pub id: u32,
}
