//! Builder API for transition tables and machines.
//!
//! This module provides fluent builders and the vocabulary macro used to
//! declare states and events.

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
pub use transition::TransitionTableBuilder;
