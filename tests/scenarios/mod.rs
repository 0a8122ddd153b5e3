//! Scenario-based tests for simplepipe

mod failure_handling;
mod variable_substitution;
