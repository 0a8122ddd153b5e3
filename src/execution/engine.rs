//! Main execution engine - runs a pipeline document front to back

use crate::{
    core::{Arguments, PipelineDocument, PipelineResult, StepKind},
    execution::{ExecutionError, ExecutionFailure, StepExecutor},
    process::CommandRunner,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{error, info};
use uuid::Uuid;

/// Events that can occur during pipeline execution
#[derive(Debug, Clone)]
pub enum ExecutionEvent {
    PipelineStarted {
        execution_id: Uuid,
        pipeline_name: String,
    },
    StepStarted {
        index: usize,
        kind: StepKind,
    },
    StepCompleted {
        index: usize,
        command: String,
        elapsed: Duration,
    },
    StepFailed {
        index: usize,
        command: String,
        error: String,
    },
    PipelineCompleted {
        execution_id: Uuid,
        success: bool,
        total_time: Duration,
    },
}

/// Type for event handlers
pub type EventHandler = Arc<dyn Fn(ExecutionEvent) + Send + Sync>;

/// Pipeline execution engine
///
/// Steps run one at a time in document order. The first failing step
/// stops the run; nothing is retried or rolled back.
pub struct ExecutionEngine<R> {
    executor: StepExecutor<R>,
    event_handlers: Vec<EventHandler>,
}

impl<R: CommandRunner> ExecutionEngine<R> {
    pub fn new(runner: R) -> Self {
        Self {
            executor: StepExecutor::new(runner),
            event_handlers: Vec::new(),
        }
    }

    pub fn runner(&self) -> &R {
        self.executor.runner()
    }

    /// Add an event handler
    pub fn add_event_handler<F>(&mut self, handler: F)
    where
        F: Fn(ExecutionEvent) + Send + Sync + 'static,
    {
        self.event_handlers.push(Arc::new(handler));
    }

    fn emit_event(&self, event: ExecutionEvent) {
        for handler in &self.event_handlers {
            handler(event.clone());
        }
    }

    /// Execute a pipeline document with bound arguments
    ///
    /// On failure the partial result is returned inside the
    /// [`ExecutionFailure`].
    pub async fn execute(
        &self,
        document: &PipelineDocument,
        arguments: &Arguments,
    ) -> Result<PipelineResult, ExecutionFailure> {
        let started = Instant::now();
        let mut result = PipelineResult::new(document, arguments);
        let execution_id = result.execution_id;

        info!("Starting pipeline {} ({})", document.name, execution_id);
        self.emit_event(ExecutionEvent::PipelineStarted {
            execution_id,
            pipeline_name: document.name.clone(),
        });

        let mut failure = None;

        for (index, (step, slot)) in document
            .steps
            .iter()
            .zip(result.exec_steps.iter_mut())
            .enumerate()
        {
            info!("Running [{}]", step);
            self.emit_event(ExecutionEvent::StepStarted {
                index,
                kind: step.kind(),
            });

            let outcome = self.executor.execute(step, &mut result.variables).await;
            *slot = outcome.record;

            match outcome.result {
                Ok(()) => {
                    info!("Finished [{}] in {:?}", slot.command, slot.elapsed);
                    self.emit_event(ExecutionEvent::StepCompleted {
                        index,
                        command: slot.command.clone(),
                        elapsed: slot.elapsed,
                    });
                }
                Err(e) => {
                    error!("Step {} failed: {}", index, e);
                    self.emit_event(ExecutionEvent::StepFailed {
                        index,
                        command: slot.command.clone(),
                        error: e.to_string(),
                    });
                    failure = Some((Some(index), e));
                    break;
                }
            }
        }

        if failure.is_none() {
            if let Err(e) = resolve_output(document, &mut result) {
                error!("{}", e);
                failure = Some((None, e));
            }
        }

        result.total_time = started.elapsed();
        info!("Pipeline execution time {:?}", result.total_time);
        self.emit_event(ExecutionEvent::PipelineCompleted {
            execution_id,
            success: failure.is_none(),
            total_time: result.total_time,
        });

        match failure {
            None => Ok(result),
            Some((step, error)) => Err(ExecutionFailure {
                pipeline: document.name.clone(),
                step,
                error,
                result,
            }),
        }
    }
}

/// Copy the declared output variable into the result
fn resolve_output(
    document: &PipelineDocument,
    result: &mut PipelineResult,
) -> Result<(), ExecutionError> {
    let Some(name) = &document.output else {
        return Ok(());
    };

    let value = result
        .variables
        .get(name)
        .map_err(|_| ExecutionError::OutputNotFound(name.clone()))?
        .to_string();
    result.output = value;
    Ok(())
}
