//! Process execution for pipeline commands

pub mod client;
pub mod error;
pub mod subprocess;

use async_trait::async_trait;
pub use client::RunnerConfig;
pub use error::ProcessError;
pub use subprocess::SubprocessRunner;

/// Trait for running external commands - allows for different implementations
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run a command and return its stdout without trailing newlines
    async fn run_captured(&self, command: &str) -> Result<String, ProcessError>;

    /// Run a command, discarding its output
    async fn run(&self, command: &str) -> Result<(), ProcessError>;
}

#[async_trait]
impl<R: CommandRunner + ?Sized> CommandRunner for std::sync::Arc<R> {
    async fn run_captured(&self, command: &str) -> Result<String, ProcessError> {
        (**self).run_captured(command).await
    }

    async fn run(&self, command: &str) -> Result<(), ProcessError> {
        (**self).run(command).await
    }
}
