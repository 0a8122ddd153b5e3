//! Execution error types

use crate::{core::PipelineResult, core::VariableError, process::ProcessError};
use thiserror::Error;

/// Error that stops a pipeline run
#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error(transparent)]
    Variable(#[from] VariableError),

    #[error(transparent)]
    Process(#[from] ProcessError),

    #[error("output variable not found: {0}")]
    OutputNotFound(String),
}

/// A failed run together with everything recorded up to the failure
#[derive(Debug, Error)]
#[error("pipeline {pipeline} failed: {error}")]
pub struct ExecutionFailure {
    /// Name of the pipeline that failed
    pub pipeline: String,

    /// Index of the failing step, `None` when output resolution failed
    pub step: Option<usize>,

    pub error: ExecutionError,

    /// Partial result; steps after the failing one keep their defaults
    pub result: PipelineResult,
}
