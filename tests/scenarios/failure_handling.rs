//! Test: Failure Handling - first failure stops the run, partial results kept

use crate::helpers::*;
use simplepipe::{parse_str, ExecutionError, ParseError};

/// A failing exec step halts before any later step runs
#[tokio::test]
async fn test_failing_exec_halts_pipeline() {
    let source = r#"
pipeline p
use a
begin
a = (echo ok)
(fail now)
(echo never)
end a
"#;

    let (outcome, calls) =
        run_source(source, &[], MockRunner::new(vec!["ok"]).failing_on("fail")).await;

    let failure = assert_failed_at(outcome, 1);
    assert!(matches!(failure.error, ExecutionError::Process(_)));
    assert_eq!(calls, vec!["echo ok", "fail now"]);

    let steps = &failure.result.exec_steps;
    assert_eq!(steps.len(), 3);
    assert!(steps[0].error.is_none());
    assert_eq!(steps[1].command, "fail now");
    assert!(steps[1].error.as_ref().is_some_and(|e| !e.is_empty()));
    assert_step_untouched(&steps[2]);

    // Environment as of the failure point, output never resolved
    assert_eq!(failure.result.variables.get("a"), Ok("ok"));
    assert_eq!(failure.result.output, "");
}

/// Reading an undeclared variable is a binding error at run time
#[tokio::test]
async fn test_undeclared_source_variable() {
    let source = "pipeline p\nuse b\nbegin\nb = missing\n(echo $b)\nend b\n";

    let (outcome, calls) = run_source(source, &[], MockRunner::new(vec![])).await;

    let failure = assert_failed_at(outcome, 0);
    assert!(matches!(failure.error, ExecutionError::Variable(_)));
    assert_eq!(
        failure.result.exec_steps[0].error.as_deref(),
        Some("undeclared variable: missing")
    );
    assert_step_untouched(&failure.result.exec_steps[1]);
    assert!(calls.is_empty());
}

/// Writing to an undeclared variable fails even though the command ran
#[tokio::test]
async fn test_undeclared_target_variable() {
    let source = "pipeline p\nbegin\nghost = (echo boo)\nend\n";

    let (outcome, calls) = run_source(source, &[], MockRunner::new(vec!["boo"])).await;

    let failure = assert_failed_at(outcome, 0);
    assert!(matches!(failure.error, ExecutionError::Variable(_)));
    assert_eq!(calls, vec!["echo boo"]);
}

/// Capturing into a name that was never declared with `use` fails
/// after the command ran, with the substituted command still recorded
#[tokio::test]
async fn test_capture_into_undeclared_output() {
    let source = "pipeline greet\nread name\nbegin\ngreeting = (echo hello $name)\nend greeting\n";

    let (outcome, calls) =
        run_source(source, &["world"], MockRunner::new(vec!["hello world"])).await;

    let failure = assert_failed_at(outcome, 0);
    assert!(matches!(failure.error, ExecutionError::Variable(_)));
    assert_eq!(failure.error.to_string(), "undeclared variable: greeting");
    assert_eq!(calls, vec!["echo hello world"]);

    let step = &failure.result.exec_steps[0];
    assert_eq!(step.command, "echo hello world");
    assert_eq!(step.error.as_deref(), Some("undeclared variable: greeting"));
    assert_eq!(failure.result.output, "");
}

/// All steps succeed but the output name has no slot
#[tokio::test]
async fn test_output_variable_not_found() {
    let source = "pipeline p\nbegin\n(true)\nend result\n";

    let (outcome, _) = run_source(source, &[], MockRunner::new(vec![])).await;

    let failure = outcome.unwrap_err();
    assert_eq!(failure.step, None);
    assert!(matches!(failure.error, ExecutionError::OutputNotFound(ref name) if name == "result"));
    assert!(failure.result.exec_steps[0].error.is_none());
    assert!(failure.to_string().contains("output variable not found: result"));
}

/// Argument count mismatch is rejected before anything runs
#[test]
fn test_argument_count_mismatch() {
    let document = parse_str("pipeline p\nread a\nread b\nbegin\n(echo $a $b)\nend\n").unwrap();

    let err = document.bind_arguments(["only-one"]).unwrap_err();
    assert_eq!(err.to_string(), "invalid argument count: 1 provided, 2 needed");
    assert!(document.bind_arguments(Vec::<String>::new()).is_err());
}

/// A malformed step line is a syntax error and adds no step
#[test]
fn test_malformed_step_line() {
    let err = parse_str("pipeline p\nbegin\nfoo bar baz\nend\n").unwrap_err();
    assert!(matches!(err, ParseError::Syntax { ref line, .. } if line == "foo bar baz"));
    assert!(err.to_string().contains("foo bar baz"));
}
