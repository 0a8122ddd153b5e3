//! Subprocess runner - spawns commands with tokio

use crate::process::{CommandRunner, ProcessError, RunnerConfig};
use async_trait::async_trait;
use std::process::{Output, Stdio};
use tokio::process::Command;
use tracing::{debug, warn};

/// Runs commands as child processes
///
/// A command is split on whitespace into a program and its arguments.
/// There is no quoting, so arguments cannot contain spaces.
#[derive(Debug, Clone, Default)]
pub struct SubprocessRunner {
    config: RunnerConfig,
}

impl SubprocessRunner {
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    fn build(&self, command: &str, stdout: Stdio) -> Result<(String, Command), ProcessError> {
        let mut parts = command.split_whitespace();
        let program = parts.next().ok_or(ProcessError::EmptyCommand)?;

        let mut cmd = Command::new(program);
        cmd.args(parts)
            .stdin(Stdio::null())
            .stdout(stdout)
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        if !self.config.inherit_env {
            cmd.env_clear();
        }
        if let Some(dir) = &self.config.working_dir {
            cmd.current_dir(dir);
        }

        Ok((program.to_string(), cmd))
    }

    async fn spawn(&self, command: &str, stdout: Stdio) -> Result<Output, ProcessError> {
        let (program, mut cmd) = self.build(command, stdout)?;
        debug!("Spawning: {}", command);

        let output = cmd
            .output()
            .await
            .map_err(|source| ProcessError::Spawn { program, source })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!("'{}' exited with {}: {}", command, output.status, stderr);
            return Err(ProcessError::Failed {
                command: command.to_string(),
                code: output.status.code(),
                stderr: (!stderr.is_empty()).then_some(stderr),
            });
        }

        Ok(output)
    }
}

#[async_trait]
impl CommandRunner for SubprocessRunner {
    async fn run_captured(&self, command: &str) -> Result<String, ProcessError> {
        let output = self.spawn(command, Stdio::piped()).await?;
        let stdout = String::from_utf8(output.stdout)?;
        debug!("'{}' returned {} bytes of output", command, stdout.len());
        Ok(strip_line_terminators(stdout))
    }

    async fn run(&self, command: &str) -> Result<(), ProcessError> {
        self.spawn(command, Stdio::null()).await.map(|_| ())
    }
}

/// Remove trailing newline characters from captured output
fn strip_line_terminators(mut text: String) -> String {
    let len = text.trim_end_matches(['\n', '\r']).len();
    text.truncate(len);
    text
}
