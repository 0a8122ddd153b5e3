//! Test: Variable Substitution in Commands
//!
//! Inputs, declarations, random tokens and captured outputs are all
//! substituted into later commands.

use crate::helpers::*;
use simplepipe::parse_str;

#[tokio::test]
async fn test_substitution_of_inputs_and_declarations() {
    let source = r#"
pipeline deploy
read env
read version "1.0"
use artifact
begin
artifact = (build $env $version)
(upload $artifact $env)
end artifact
"#;

    let (outcome, calls) = run_source(source, &["prod", "2.1"], MockRunner::new(vec!["app.tar"])).await;

    assert_output(&outcome, "app.tar");
    assert_eq!(calls, vec!["build prod 2.1", "upload app.tar prod"]);
}

/// A random token is drawn once per parse and reused by every step
#[tokio::test]
async fn test_rand_token_is_stable_within_a_run() {
    let source = "pipeline p\nrand id\nbegin\n(mkdir /tmp/$id)\n(rmdir /tmp/$id)\nend\n";
    let document = parse_str(source).unwrap();
    let token = document.declarations["id"].clone();

    let engine = simplepipe::ExecutionEngine::new(MockRunner::new(vec![]));
    engine
        .execute(&document, &document.default_arguments())
        .await
        .unwrap();

    let calls = engine.runner().calls();
    assert_eq!(calls[0], format!("mkdir /tmp/{}", token));
    assert_eq!(calls[1], format!("rmdir /tmp/{}", token));
}

/// Separate parses draw independent tokens
#[test]
fn test_rand_differs_between_parses() {
    let source = "pipeline p\nrand a\nrand b\nbegin\nend\n";
    let first = parse_str(source).unwrap();
    let second = parse_str(source).unwrap();

    assert_eq!(first.declarations["a"].len(), 10);
    assert_ne!(first.declarations["a"], first.declarations["b"]);
    assert_ne!(first.declarations["a"], second.declarations["a"]);
}

/// Longer names win when one variable name prefixes another
#[tokio::test]
async fn test_prefix_names_resolve_to_longest() {
    let source = "pipeline p\nread a\nread abc\nbegin\n(show $abc $a $ab)\nend\n";

    let (outcome, calls) = run_source(source, &["short", "long"], MockRunner::new(vec![])).await;

    assert!(outcome.is_ok());
    assert_eq!(calls, vec!["show long short shortb"]);
}

/// Captured values containing `$` are not substituted again
#[tokio::test]
async fn test_captured_values_are_not_rescanned() {
    let source = "pipeline p\nuse price\nuse other\nbegin\nprice = (quote)\n(print $price)\nend price\n";
    let mut document = parse_str(source).unwrap();
    document
        .declarations
        .insert("other".to_string(), "SHOULD-NOT-APPEAR".to_string());

    let engine = simplepipe::ExecutionEngine::new(MockRunner::new(vec!["$other"]));
    let result = engine
        .execute(&document, &document.default_arguments())
        .await
        .unwrap();

    assert_eq!(engine.runner().calls(), vec!["quote", "print $other"]);
    assert_eq!(result.output, "$other");
}

/// Captured output overwrites a declared slot seen by later steps
#[tokio::test]
async fn test_reassignment_is_visible_downstream() {
    let source = "pipeline p\nread x\nbegin\nx = (double $x)\nx = (double $x)\nend x\n";

    let (outcome, calls) = run_source(source, &["1"], MockRunner::new(vec!["2", "4"])).await;

    assert_output(&outcome, "4");
    assert_eq!(calls, vec!["double 1", "double 2"]);
}
