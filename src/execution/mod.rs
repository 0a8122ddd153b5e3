//! Pipeline execution engine

pub mod engine;
pub mod error;
pub mod executor;

pub use engine::{EventHandler, ExecutionEngine, ExecutionEvent};
pub use error::{ExecutionError, ExecutionFailure};
pub use executor::{StepExecutor, StepOutcome};
