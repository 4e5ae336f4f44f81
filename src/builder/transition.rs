//! Builder for constructing transition tables.

use crate::builder::error::BuildError;
use crate::core::{ConnectionState, EventKind};
use crate::effects::{SideEffect, Transition, TransitionRow, TransitionTable};
use std::collections::HashMap;

/// Builder for constructing transition tables with a fluent API.
///
/// Rows are collected in order and validated at `build()`; the first
/// duplicate (state, event) key is reported.
///
/// # Example
///
/// ```
/// use tcp_fsm::builder::TransitionTableBuilder;
/// use tcp_fsm::core::{ConnectionState, EventKind};
///
/// let table = TransitionTableBuilder::new()
///     .on(ConnectionState::Closed, EventKind::Active, ConnectionState::SynSent)
///     .on(ConnectionState::SynSent, EventKind::Close, ConnectionState::Closed)
///     .build()
///     .unwrap();
///
/// assert_eq!(table.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct TransitionTableBuilder {
    rows: Vec<TransitionRow>,
}

impl TransitionTableBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Add a transition without a side effect.
    pub fn on(self, from: ConnectionState, event: EventKind, to: ConnectionState) -> Self {
        self.row((from, event, to, None))
    }

    /// Add a transition that runs `effect` before the state changes.
    pub fn on_with(
        self,
        from: ConnectionState,
        event: EventKind,
        to: ConnectionState,
        effect: SideEffect,
    ) -> Self {
        self.row((from, event, to, Some(effect)))
    }

    /// Add a single row.
    pub fn row(mut self, row: TransitionRow) -> Self {
        self.rows.push(row);
        self
    }

    /// Add multiple rows at once.
    pub fn rows<I>(mut self, rows: I) -> Self
    where
        I: IntoIterator<Item = TransitionRow>,
    {
        self.rows.extend(rows);
        self
    }

    /// Build the table.
    /// Returns an error if the table is empty or a key repeats.
    pub fn build(self) -> Result<TransitionTable, BuildError> {
        if self.rows.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        let mut entries = HashMap::with_capacity(self.rows.len());
        for (from, event, to, effect) in self.rows {
            if entries.insert((from, event), Transition { to, effect }).is_some() {
                return Err(BuildError::DuplicateTransition { state: from, event });
            }
        }

        Ok(TransitionTable::from_entries(entries))
    }
}
