//! simplepipe - run straight-line command pipelines written in a tiny DSL

pub mod cli;
pub mod core;
pub mod execution;
pub mod parser;
pub mod process;

// Re-export commonly used types
pub use crate::core::{Arguments, PipelineDocument, PipelineResult, Step, StepKind, Variables};
pub use execution::{ExecutionEngine, ExecutionError, ExecutionEvent, ExecutionFailure};
pub use parser::{parse_file, parse_str, ParseError, Parser, ParserOptions};
pub use process::{CommandRunner, ProcessError, RunnerConfig, SubprocessRunner};
