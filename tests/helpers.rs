//! Test utility functions for simplepipe

use async_trait::async_trait;
use simplepipe::core::{ExecStep, PipelineResult};
use simplepipe::execution::{ExecutionEngine, ExecutionFailure};
use simplepipe::process::{CommandRunner, ProcessError};
use simplepipe::parse_str;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Mock runner that returns predefined outputs
///
/// Captured runs consume `responses` in order. Any command starting with
/// the configured failure prefix fails like a non-zero exit.
pub struct MockRunner {
    responses: Vec<String>,
    index: AtomicUsize,
    calls: Mutex<Vec<String>>,
    fail_prefix: Option<String>,
}

impl MockRunner {
    pub fn new(responses: Vec<&str>) -> Self {
        Self {
            responses: responses.into_iter().map(String::from).collect(),
            index: AtomicUsize::new(0),
            calls: Mutex::new(Vec::new()),
            fail_prefix: None,
        }
    }

    /// Fail every command starting with `prefix`
    pub fn failing_on(mut self, prefix: &str) -> Self {
        self.fail_prefix = Some(prefix.to_string());
        self
    }

    /// Commands received so far, after substitution
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, command: &str) -> Result<(), ProcessError> {
        self.calls.lock().unwrap().push(command.to_string());

        match &self.fail_prefix {
            Some(prefix) if command.starts_with(prefix.as_str()) => Err(ProcessError::Failed {
                command: command.to_string(),
                code: Some(1),
                stderr: Some("MockRunner: scripted failure".to_string()),
            }),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl CommandRunner for MockRunner {
    async fn run_captured(&self, command: &str) -> Result<String, ProcessError> {
        self.record(command)?;

        let idx = self.index.fetch_add(1, Ordering::SeqCst);
        self.responses
            .get(idx)
            .cloned()
            .ok_or_else(|| ProcessError::Failed {
                command: command.to_string(),
                code: None,
                stderr: Some(format!("MockRunner: no response for request {}", idx + 1)),
            })
    }

    async fn run(&self, command: &str) -> Result<(), ProcessError> {
        self.record(command)
    }
}

/// Parse `source`, bind `args` and run it with `runner`
pub async fn run_source(
    source: &str,
    args: &[&str],
    runner: MockRunner,
) -> (Result<PipelineResult, ExecutionFailure>, Vec<String>) {
    let document = parse_str(source).expect("pipeline should parse");
    let arguments = document
        .bind_arguments(args.iter().copied())
        .expect("argument count should match");

    let engine = ExecutionEngine::new(runner);
    let outcome = engine.execute(&document, &arguments).await;
    (outcome, engine.runner().calls())
}

/// Assert a run succeeded with the given output
pub fn assert_output(outcome: &Result<PipelineResult, ExecutionFailure>, expected: &str) {
    match outcome {
        Ok(result) => assert_eq!(result.output, expected, "unexpected pipeline output"),
        Err(failure) => panic!("pipeline failed: {}", failure),
    }
}

/// Assert a run failed at `index`, returning the failure
pub fn assert_failed_at(
    outcome: Result<PipelineResult, ExecutionFailure>,
    index: usize,
) -> ExecutionFailure {
    match outcome {
        Ok(result) => panic!("expected failure, got output {:?}", result.output),
        Err(failure) => {
            assert_eq!(failure.step, Some(index), "failure at unexpected step");
            failure
        }
    }
}

/// Assert a step entry was never filled in
pub fn assert_step_untouched(step: &ExecStep) {
    assert_eq!(*step, ExecStep::default(), "step should not have run");
}
