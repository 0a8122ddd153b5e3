//! Command-line interface

pub mod commands;
pub mod logging;
pub mod output;

use clap::{Parser, Subcommand};
use commands::{ArgsCommand, RunCommand, ValidateCommand};
use std::ffi::OsString;

/// Run simple command pipelines described in a small line-oriented language
#[derive(Debug, Parser, Clone)]
#[command(name = "simplepipe")]
#[command(version)]
#[command(about = "Run simple command pipelines", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Run a pipeline
    Run(RunCommand),

    /// Show the arguments a pipeline expects
    Args(ArgsCommand),

    /// Validate a pipeline file
    Validate(ValidateCommand),
}

impl Cli {
    /// Parse CLI arguments from environment
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Parse CLI arguments from a slice
    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(itr)
    }
}
