//! Four-state parser: define → declaration → pipeline → end

use crate::core::PipelineDocument;
use crate::parser::{
    grammar::{random_token, Declaration, Grammar},
    ParseError, ParserOptions, SourceLine,
};
use std::fmt;
use tracing::trace;

/// Section of the document the parser is in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserState {
    /// Expecting `pipeline <name>`
    Define,
    /// `use` / `rand` / `read` lines until `begin`
    Declaration,
    /// Steps until `end`
    Pipeline,
    /// After `end`
    End,
}

impl fmt::Display for ParserState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParserState::Define => "definition",
            ParserState::Declaration => "declaration",
            ParserState::Pipeline => "pipeline",
            ParserState::End => "end",
        };
        f.write_str(name)
    }
}

/// What the driver loop does after a handler accepted a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    /// Move to the next line in the given state
    Advance(ParserState),
    /// Feed the same line again to the given state
    Reconsume(ParserState),
}

/// Drives cleaned source lines through the state machine
pub(crate) struct StateMachine<'a> {
    grammar: &'a Grammar,
    options: &'a ParserOptions,
    state: ParserState,
    document: PipelineDocument,
}

impl<'a> StateMachine<'a> {
    pub(crate) fn new(grammar: &'a Grammar, options: &'a ParserOptions) -> Self {
        Self {
            grammar,
            options,
            state: ParserState::Define,
            document: PipelineDocument::default(),
        }
    }

    pub(crate) fn run(mut self, lines: &[SourceLine<'_>]) -> Result<PipelineDocument, ParseError> {
        let mut cursor = 0;

        while let Some(line) = lines.get(cursor) {
            let transition = match self.state {
                ParserState::Define => self.define(line)?,
                ParserState::Declaration => self.declaration(line)?,
                ParserState::Pipeline => self.pipeline(line)?,
                ParserState::End => self.end(line)?,
            };

            match transition {
                Transition::Advance(next) => {
                    self.state = next;
                    cursor += 1;
                }
                Transition::Reconsume(next) => self.state = next,
            }
        }

        match self.state {
            ParserState::Define => Err(ParseError::Empty),
            ParserState::Declaration => Err(ParseError::MissingBegin),
            ParserState::Pipeline => Err(ParseError::MissingEnd),
            ParserState::End => Ok(self.document),
        }
    }

    fn define(&mut self, line: &SourceLine<'_>) -> Result<Transition, ParseError> {
        let name = self
            .grammar
            .definition(line.text)
            .ok_or_else(|| self.syntax_error(line))?;
        trace!("pipeline {}", name);
        self.document.name = name;
        Ok(Transition::Advance(ParserState::Declaration))
    }

    fn declaration(&mut self, line: &SourceLine<'_>) -> Result<Transition, ParseError> {
        let declaration = self
            .grammar
            .declaration(line.text)
            .ok_or_else(|| self.syntax_error(line))?;

        match declaration {
            Declaration::Begin => return Ok(Transition::Advance(ParserState::Pipeline)),
            Declaration::Use(name) => {
                self.document.declarations.insert(name, String::new());
            }
            Declaration::Rand(name) => {
                let token = random_token(self.options.random_token_len);
                self.document.declarations.insert(name, token);
            }
            Declaration::Read(input) => self.document.inputs.push(input),
        }

        Ok(Transition::Advance(ParserState::Declaration))
    }

    fn pipeline(&mut self, line: &SourceLine<'_>) -> Result<Transition, ParseError> {
        // The terminating line carries the output name, so END handles it
        if self.grammar.end(line.text).is_some() {
            return Ok(Transition::Reconsume(ParserState::End));
        }

        let step = self
            .grammar
            .step(line.text)
            .ok_or_else(|| self.syntax_error(line))?;
        trace!("step {}: {}", self.document.steps.len(), step);
        self.document.steps.push(step);
        Ok(Transition::Advance(ParserState::Pipeline))
    }

    fn end(&mut self, line: &SourceLine<'_>) -> Result<Transition, ParseError> {
        let output = self
            .grammar
            .end(line.text)
            .ok_or_else(|| self.syntax_error(line))?;
        self.document.output = output;
        Ok(Transition::Advance(ParserState::End))
    }

    fn syntax_error(&self, line: &SourceLine<'_>) -> ParseError {
        ParseError::Syntax {
            state: self.state,
            number: line.number,
            line: line.text.to_string(),
        }
    }
}
