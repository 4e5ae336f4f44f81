//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::effects::{ConnectionStateMachine, TransitionTable};

/// Builder for constructing connection machines with a fluent API.
///
/// Defaults to the standard table with history tracking on.
pub struct StateMachineBuilder {
    table: Option<TransitionTable>,
    track_history: bool,
}

impl StateMachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            table: None,
            track_history: true,
        }
    }

    /// Use a custom transition table instead of the standard one.
    pub fn table(mut self, table: TransitionTable) -> Self {
        self.table = Some(table);
        self
    }

    /// Enable or disable recording of accepted transitions.
    pub fn track_history(mut self, enabled: bool) -> Self {
        self.track_history = enabled;
        self
    }

    /// Build the state machine.
    /// Returns an error if the supplied table is empty.
    pub fn build(self) -> Result<ConnectionStateMachine, BuildError> {
        let table = self.table.unwrap_or_default();

        if table.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        Ok(ConnectionStateMachine::with_table(table, self.track_history))
    }
}

impl Default for StateMachineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
