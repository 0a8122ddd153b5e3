//! Variable environment - the live name → value mapping of a run

use crate::core::pipeline::{Arguments, PipelineDocument};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Binding error raised when a step touches a name that has no slot
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VariableError {
    #[error("undeclared variable: {0}")]
    Undeclared(String),
}

/// Variables available to a pipeline run
///
/// Slots are created once from the document's inputs and declarations;
/// steps may only update existing slots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Variables {
    values: BTreeMap<String, String>,
}

impl Variables {
    /// Seed the environment from a document and the bound arguments
    ///
    /// Inputs take the supplied argument, falling back to their default;
    /// declarations are inserted afterwards and shadow an input of the
    /// same name.
    pub fn from_document(document: &PipelineDocument, arguments: &Arguments) -> Self {
        let mut values = BTreeMap::new();

        for (i, input) in document.inputs.iter().enumerate() {
            let value = arguments
                .values()
                .get(i)
                .cloned()
                .unwrap_or_else(|| input.default.clone());
            values.insert(input.name.clone(), value);
        }

        for (name, value) in &document.declarations {
            values.insert(name.clone(), value.clone());
        }

        Self { values }
    }

    /// Get a variable
    pub fn get(&self, name: &str) -> Result<&str, VariableError> {
        self.values
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| VariableError::Undeclared(name.to_string()))
    }

    /// Overwrite an existing variable
    pub fn set(&mut self, name: &str, value: String) -> Result<(), VariableError> {
        match self.values.get_mut(name) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(VariableError::Undeclared(name.to_string())),
        }
    }

    /// Replace `$name` tokens in a command with the current values
    ///
    /// The text is scanned once, left to right. At each `$` the longest
    /// bound name that follows wins, so `$abc` prefers `abc` over `a`.
    /// Substituted values are copied verbatim and never re-scanned. A `$`
    /// not followed by a bound name is kept as is.
    pub fn interpolate(&self, command: &str) -> String {
        let mut names: Vec<&str> = self.values.keys().map(String::as_str).collect();
        names.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let mut rendered = String::with_capacity(command.len());
        let mut rest = command;

        while let Some(pos) = rest.find('$') {
            rendered.push_str(&rest[..pos]);
            let after = &rest[pos + 1..];

            match names.iter().find(|name| !name.is_empty() && after.starts_with(**name)) {
                Some(name) => {
                    rendered.push_str(&self.values[*name]);
                    rest = &after[name.len()..];
                }
                None => {
                    rendered.push('$');
                    rest = after;
                }
            }
        }

        rendered.push_str(rest);
        rendered
    }
}

impl FromIterator<(String, String)> for Variables {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
