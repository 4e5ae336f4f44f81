//! Build errors for transition table and state machine builders.

use crate::core::{ConnectionState, EventKind};
use thiserror::Error;

/// Errors that can occur when building tables and machines.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Duplicate transition for event {event} in state {state}")]
    DuplicateTransition {
        state: ConnectionState,
        event: EventKind,
    },

    #[error("No transitions defined. Add at least one transition")]
    NoTransitions,
}
