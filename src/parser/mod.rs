//! Pipeline language parser
//!
//! A pipeline file looks like:
//!
//! ```text
//! ; comments start with a semicolon
//! pipeline greet
//! read name "world"
//! use greeting
//! rand tmp_id
//! begin
//! greeting = (echo hello $name)
//! (touch /tmp/$tmp_id)
//! copy = greeting
//! end greeting
//! ```
//!
//! Blank lines and comment lines are dropped before the remaining lines
//! are fed, trimmed and in order, to a four-state machine (see
//! [`machine::ParserState`]).

pub mod grammar;
pub mod machine;

use crate::core::PipelineDocument;
use grammar::Grammar;
use machine::{ParserState, StateMachine};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Default length of tokens generated for `rand` declarations
pub const RANDOM_TOKEN_LEN: usize = 10;

/// Marker that starts a comment line
pub const COMMENT_MARKER: char = ';';

/// Error types for parsing
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read pipeline file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {number}: syntax error in {state} section: {line}")]
    Syntax {
        state: ParserState,
        number: usize,
        line: String,
    },

    #[error("pipeline is empty")]
    Empty,

    #[error("missing 'begin' after declarations")]
    MissingBegin,

    #[error("missing 'end' after pipeline steps")]
    MissingEnd,

    #[error("invalid grammar pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Options for the parser
#[derive(Debug, Clone)]
pub struct ParserOptions {
    /// Length of tokens generated for `rand` declarations
    pub random_token_len: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            random_token_len: RANDOM_TOKEN_LEN,
        }
    }
}

impl ParserOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_random_token_len(mut self, len: usize) -> Self {
        self.random_token_len = len;
        self
    }
}

/// A significant source line, trimmed, with its 1-based line number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    pub number: usize,
    pub text: &'a str,
}

/// Drop blank and comment lines, trimming the rest
pub fn clean_lines(source: &str) -> Vec<SourceLine<'_>> {
    source
        .lines()
        .enumerate()
        .map(|(i, line)| SourceLine {
            number: i + 1,
            text: line.trim(),
        })
        .filter(|line| !line.text.is_empty() && !line.text.starts_with(COMMENT_MARKER))
        .collect()
}

/// Parses pipeline source into a [`PipelineDocument`]
#[derive(Debug, Clone)]
pub struct Parser {
    grammar: Grammar,
    options: ParserOptions,
}

impl Parser {
    pub fn new() -> Result<Self, ParseError> {
        Self::with_options(ParserOptions::default())
    }

    pub fn with_options(options: ParserOptions) -> Result<Self, ParseError> {
        Ok(Self {
            grammar: Grammar::new()?,
            options,
        })
    }

    /// Parse pipeline source text
    pub fn parse_str(&self, source: &str) -> Result<PipelineDocument, ParseError> {
        let lines = clean_lines(source);
        debug!("parsing {} significant lines", lines.len());
        StateMachine::new(&self.grammar, &self.options).run(&lines)
    }

    /// Load and parse a pipeline file
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<PipelineDocument, ParseError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse_str(&source)
    }
}

/// Parse pipeline source text with default options
pub fn parse_str(source: &str) -> Result<PipelineDocument, ParseError> {
    Parser::new()?.parse_str(source)
}

/// Load and parse a pipeline file with default options
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<PipelineDocument, ParseError> {
    Parser::new()?.parse_file(path)
}
