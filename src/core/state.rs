//! Execution result models

use crate::core::{
    context::Variables,
    pipeline::{Arguments, PipelineDocument},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// Record of a single step of a run
///
/// Entries for steps that never ran keep their default value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecStep {
    /// Substituted command text, or the resolved source value for assign steps
    pub command: String,

    /// Error message if the step failed
    pub error: Option<String>,

    /// Wall-clock time spent in this step
    pub elapsed: Duration,
}

impl ExecStep {
    pub fn failed(&self) -> bool {
        self.error.is_some()
    }
}

/// Outcome of one pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineResult {
    /// Unique execution ID
    pub execution_id: Uuid,

    /// When the run started
    pub started_at: DateTime<Utc>,

    /// Environment as of the end of the run (or the failure point)
    pub variables: Variables,

    /// One entry per document step, same order
    pub exec_steps: Vec<ExecStep>,

    /// Wall-clock time of the whole run
    pub total_time: Duration,

    /// Resolved output, empty when the pipeline declares none
    pub output: String,
}

impl PipelineResult {
    /// Initialize a result for a new run of `document`
    ///
    /// Seeds the variables and pre-allocates one empty [`ExecStep`] per
    /// document step.
    pub fn new(document: &PipelineDocument, arguments: &Arguments) -> Self {
        Self {
            execution_id: Uuid::new_v4(),
            started_at: Utc::now(),
            variables: Variables::from_document(document, arguments),
            exec_steps: vec![ExecStep::default(); document.steps.len()],
            total_time: Duration::ZERO,
            output: String::new(),
        }
    }

    /// First failed step, if any
    pub fn failed_step(&self) -> Option<(usize, &ExecStep)> {
        self.exec_steps.iter().enumerate().find(|(_, step)| step.failed())
    }
}
