//! Logging setup for the CLI
//!
//! Console logs go to stderr through a global subscriber. A run started
//! with `--log-file` gets its own [`LogSink`] instead: the file is opened
//! when the run starts, attached to the execution future only, and closed
//! when the sink and the future are dropped.

use anyhow::{Context, Result};
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{Dispatch, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Install the global console subscriber
///
/// `RUST_LOG` takes precedence over `verbose`.
pub fn init(verbose: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set logging subscriber")
}

/// Console level used when `RUST_LOG` is unset
fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "info"
    }
}

/// Append-only log file scoped to a single run
pub struct LogSink {
    path: PathBuf,
    dispatch: Dispatch,
}

impl LogSink {
    /// Open (or create) the log file in append mode
    pub fn open<P: AsRef<Path>>(path: P, verbose: bool) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file: File = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;

        let level = if verbose { Level::DEBUG } else { Level::INFO };
        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .finish();

        Ok(Self {
            path,
            dispatch: Dispatch::new(subscriber),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Dispatcher to attach to the run, e.g. with
    /// [`tracing::instrument::WithSubscriber::with_subscriber`]
    pub fn dispatch(&self) -> Dispatch {
        self.dispatch.clone()
    }
}
