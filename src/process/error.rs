//! Process error types

use thiserror::Error;

/// Error types for running external commands
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("empty command")]
    EmptyCommand,

    #[error("failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("command '{command}' exited with {}", exit_description(.code, .stderr))]
    Failed {
        command: String,
        code: Option<i32>,
        stderr: Option<String>,
    },

    #[error("command output is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),
}

fn exit_description(code: &Option<i32>, stderr: &Option<String>) -> String {
    let status = match code {
        Some(code) => format!("code {}", code),
        None => "signal".to_string(),
    };
    match stderr {
        Some(stderr) => format!("{}: {}", status, stderr),
        None => status,
    }
}
