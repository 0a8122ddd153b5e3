//! CLI command definitions

use clap::Args;
use std::path::PathBuf;

/// Run a pipeline
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Path to pipeline file
    #[arg(short, long)]
    pub file: PathBuf,

    /// Values for the pipeline's `read` inputs, in declaration order
    pub args: Vec<String>,

    /// Print the total execution time
    #[arg(long)]
    pub time: bool,

    /// Print the execution time of each command
    #[arg(long)]
    pub time_cmd: bool,

    /// Print only the pipeline output
    #[arg(long)]
    pub output_only: bool,

    /// Write execution logs to this file instead of the console
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Print the full result as JSON
    #[arg(long)]
    pub json: bool,
}

/// List the arguments a pipeline expects
#[derive(Debug, Args, Clone)]
pub struct ArgsCommand {
    /// Path to pipeline file
    #[arg(short, long)]
    pub file: PathBuf,
}

/// Validate a pipeline file
#[derive(Debug, Args, Clone)]
pub struct ValidateCommand {
    /// Path to pipeline file
    #[arg(short, long)]
    pub file: PathBuf,

    /// Output the parsed document in JSON format
    #[arg(long)]
    pub json: bool,
}
