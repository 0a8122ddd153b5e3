//! Core domain models for simplepipe
//!
//! This module defines the parsed pipeline document, the variable
//! environment used while running it, and the result of a run.

pub mod context;
pub mod pipeline;
pub mod state;
pub mod step;

pub use context::*;
pub use pipeline::*;
pub use state::*;
pub use step::*;
