//! Step domain model

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single instruction in the `begin ... end` block of a pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Step {
    /// `target = source`: copy one variable into another
    Assign { target: String, source: String },

    /// `target = (command)`: run a command and store its trimmed stdout
    ExecAssign { target: String, command: String },

    /// `(command)`: run a command, only success or failure matters
    Exec { command: String },
}

/// Discriminant of a [`Step`], used for events and reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Assign,
    ExecAssign,
    Exec,
}

impl Step {
    pub fn kind(&self) -> StepKind {
        match self {
            Step::Assign { .. } => StepKind::Assign,
            Step::ExecAssign { .. } => StepKind::ExecAssign,
            Step::Exec { .. } => StepKind::Exec,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Assign { target, source } => write!(f, "{} = {}", target, source),
            Step::ExecAssign { target, command } => write!(f, "{} = ({})", target, command),
            Step::Exec { command } => write!(f, "({})", command),
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StepKind::Assign => "assign",
            StepKind::ExecAssign => "exec-assign",
            StepKind::Exec => "exec",
        };
        f.write_str(name)
    }
}
