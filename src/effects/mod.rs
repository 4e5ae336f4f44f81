//! Applying events to a connection.
//!
//! This module holds everything that changes a machine:
//! - **Transitions**: the (state, event) lookup table and its side effects
//! - **State Machine**: applies events and tracks counters and history
//!
//! Side effects are tags in the table, not callbacks. The machine interprets
//! them, so a table stays a plain comparable value.

mod machine;
mod transition;

pub use machine::{ConnectionStateMachine, MachineSnapshot, Outcome};
pub use transition::{
    SideEffect, Transition, TransitionError, TransitionRow, TransitionTable, STANDARD_TRANSITIONS,
};
