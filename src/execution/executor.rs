//! Step executor - runs individual steps against the variable environment

use crate::{
    core::{ExecStep, Step, Variables},
    execution::ExecutionError,
    process::CommandRunner,
};
use std::time::Instant;
use tracing::debug;

/// Result of executing a step
#[derive(Debug)]
pub struct StepOutcome {
    /// What gets stored in the run's step table
    pub record: ExecStep,

    /// Whether the step succeeded
    pub result: Result<(), ExecutionError>,
}

/// Executes a single step
pub struct StepExecutor<R> {
    runner: R,
}

impl<R: CommandRunner> StepExecutor<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Execute a step and time it
    ///
    /// The recorded command is the substituted command text, or the
    /// resolved source value for assign steps. It is recorded even when
    /// the step fails.
    pub async fn execute(&self, step: &Step, variables: &mut Variables) -> StepOutcome {
        let started = Instant::now();
        let mut command = String::new();

        let result = self.dispatch(step, variables, &mut command).await;

        StepOutcome {
            record: ExecStep {
                command,
                error: result.as_ref().err().map(ToString::to_string),
                elapsed: started.elapsed(),
            },
            result,
        }
    }

    async fn dispatch(
        &self,
        step: &Step,
        variables: &mut Variables,
        command: &mut String,
    ) -> Result<(), ExecutionError> {
        match step {
            Step::Assign { target, source } => {
                let value = variables.get(source)?.to_string();
                command.clone_from(&value);
                variables.set(target, value)?;
            }
            Step::ExecAssign { target, command: raw } => {
                *command = variables.interpolate(raw);
                let output = self.runner.run_captured(command.as_str()).await?;
                debug!("captured {} bytes into {}", output.len(), target);
                variables.set(target, output)?;
            }
            Step::Exec { command: raw } => {
                *command = variables.interpolate(raw);
                self.runner.run(command.as_str()).await?;
            }
        }
        Ok(())
    }
}
