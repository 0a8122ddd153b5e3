//! Pipeline document model

use crate::core::step::Step;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// A parsed pipeline definition
///
/// Built once by the parser and never mutated afterwards. Every run gets
/// its own [`crate::core::PipelineResult`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineDocument {
    /// Pipeline name from the `pipeline <name>` line
    pub name: String,

    /// `read` inputs, in the order positional arguments bind to them
    pub inputs: Vec<Input>,

    /// `use` and `rand` declarations with their initial values
    pub declarations: BTreeMap<String, String>,

    /// Steps between `begin` and `end`, in execution order
    pub steps: Vec<Step>,

    /// Variable named by `end <name>`, if any
    pub output: Option<String>,
}

/// An input declared with `read <name> ["default"]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Input {
    pub name: String,

    /// Quoted default text, empty when none was given
    #[serde(default)]
    pub default: String,
}

/// Error binding positional arguments to a document's inputs
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgumentError {
    #[error("invalid argument count: {provided} provided, {expected} needed")]
    Count { expected: usize, provided: usize },
}

/// Values bound to a document's inputs, in input order
///
/// Only obtainable through [`PipelineDocument::bind_arguments`] or
/// [`PipelineDocument::default_arguments`], so a run can never start with
/// the wrong number of arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arguments {
    values: Vec<String>,
}

impl Arguments {
    pub fn values(&self) -> &[String] {
        &self.values
    }
}

impl PipelineDocument {
    /// Create an empty document with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Bind user-supplied positional arguments to the declared inputs
    ///
    /// The count must match the number of inputs exactly.
    pub fn bind_arguments<I, S>(&self, args: I) -> Result<Arguments, ArgumentError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = args.into_iter().map(Into::into).collect();
        if values.len() != self.inputs.len() {
            return Err(ArgumentError::Count {
                expected: self.inputs.len(),
                provided: values.len(),
            });
        }
        Ok(Arguments { values })
    }

    /// Arguments made of each input's declared default
    pub fn default_arguments(&self) -> Arguments {
        Arguments {
            values: self.inputs.iter().map(|input| input.default.clone()).collect(),
        }
    }
}
