//! Transition descriptors and the lookup table keyed by (state, event).

use crate::builder::TransitionTableBuilder;
use crate::core::{ConnectionState, EventKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Counter mutation attached to a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SideEffect {
    /// Increment the received-data counter
    IncrementReceived,

    /// Increment the sent-data counter
    IncrementSent,
}

/// Where a legal (state, event) pair leads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub to: ConnectionState,
    pub effect: Option<SideEffect>,
}

/// Errors that can occur when applying an event
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    #[error("Error: Invalid state transition")]
    IllegalTransition {
        state: ConnectionState,
        event: EventKind,
    },
}

/// One row of a transition table: from, event, to, side effect.
pub type TransitionRow = (
    ConnectionState,
    EventKind,
    ConnectionState,
    Option<SideEffect>,
);

/// The legal transitions of the TCP connection diagram.
///
/// LISTEN has no entry for a locally-initiated send; simultaneous open is
/// not modeled.
pub const STANDARD_TRANSITIONS: [TransitionRow; 20] = {
    use ConnectionState::*;
    use EventKind::*;
    [
        (Closed, Active, SynSent, None),
        (Closed, Passive, Listen, None),
        (Listen, Close, Closed, None),
        (Listen, Syn, SynRcvd, None),
        (SynSent, Close, Closed, None),
        (SynSent, Syn, SynRcvd, None),
        (SynSent, SynAck, Established, None),
        (SynRcvd, Ack, Established, None),
        (SynRcvd, Close, FinWait1, None),
        (Established, Close, FinWait1, None),
        (Established, RData, Established, Some(SideEffect::IncrementReceived)),
        (Established, SData, Established, Some(SideEffect::IncrementSent)),
        (Established, Fin, CloseWait, None),
        (FinWait1, Ack, FinWait2, None),
        (FinWait1, Fin, Closing, None),
        (FinWait2, Fin, TimeWait, None),
        (Closing, Ack, TimeWait, None),
        (TimeWait, Timeout, Closed, None),
        (CloseWait, Close, LastAck, None),
        (LastAck, Ack, Closed, None),
    ]
};

/// Immutable mapping from (state, event) to a [`Transition`].
///
/// A pair with no entry is illegal in that state.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionTable {
    entries: HashMap<(ConnectionState, EventKind), Transition>,
}

impl TransitionTable {
    pub(crate) fn from_entries(entries: HashMap<(ConnectionState, EventKind), Transition>) -> Self {
        Self { entries }
    }

    /// The table of [`STANDARD_TRANSITIONS`].
    pub fn standard() -> Self {
        TransitionTableBuilder::new()
            .rows(STANDARD_TRANSITIONS)
            .build()
            .expect("Standard transition table should always build")
    }

    /// Look up the transition for `event` in `state` (pure).
    pub fn get(&self, state: ConnectionState, event: EventKind) -> Option<&Transition> {
        self.entries.get(&(state, event))
    }

    /// Events with an entry for `state`, in vocabulary order.
    pub fn events_from(&self, state: ConnectionState) -> Vec<EventKind> {
        EventKind::ALL
            .iter()
            .copied()
            .filter(|event| self.entries.contains_key(&(state, *event)))
            .collect()
    }

    /// All entries as rows, sorted by state then event.
    pub fn iter(&self) -> impl Iterator<Item = TransitionRow> {
        let mut rows: Vec<TransitionRow> = self
            .entries
            .iter()
            .map(|(&(from, event), t)| (from, event, t.to, t.effect))
            .collect();
        rows.sort_by_key(|&(from, event, _, _)| (from, event));
        rows.into_iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for TransitionTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_has_every_row() {
        let table = TransitionTable::standard();
        assert_eq!(table.len(), STANDARD_TRANSITIONS.len());

        for (from, event, to, effect) in STANDARD_TRANSITIONS {
            let transition = table.get(from, event).unwrap();
            assert_eq!(transition.to, to);
            assert_eq!(transition.effect, effect);
        }
    }

    #[test]
    fn missing_pairs_have_no_entry() {
        let table = TransitionTable::standard();
        assert!(table.get(ConnectionState::Closed, EventKind::Ack).is_none());
        assert!(table.get(ConnectionState::Listen, EventKind::RData).is_none());
        assert!(table.get(ConnectionState::TimeWait, EventKind::Close).is_none());
    }

    #[test]
    fn only_data_events_carry_effects() {
        let with_effects: Vec<_> = TransitionTable::standard()
            .iter()
            .filter(|(_, _, _, effect)| effect.is_some())
            .map(|(from, event, to, _)| (from, event, to))
            .collect();

        assert_eq!(
            with_effects,
            vec![
                (
                    ConnectionState::Established,
                    EventKind::RData,
                    ConnectionState::Established
                ),
                (
                    ConnectionState::Established,
                    EventKind::SData,
                    ConnectionState::Established
                ),
            ]
        );
    }

    #[test]
    fn listen_does_not_open_simultaneously() {
        let table = TransitionTable::standard();
        assert_eq!(
            table.events_from(ConnectionState::Listen),
            vec![EventKind::Syn, EventKind::Close]
        );
    }

    #[test]
    fn events_from_follows_vocabulary_order() {
        let table = TransitionTable::standard();
        assert_eq!(
            table.events_from(ConnectionState::Established),
            vec![
                EventKind::RData,
                EventKind::SData,
                EventKind::Fin,
                EventKind::Close
            ]
        );
    }

    #[test]
    fn every_state_has_a_way_out() {
        let table = TransitionTable::standard();
        for state in ConnectionState::ALL {
            assert!(!table.events_from(*state).is_empty(), "{state} is a dead end");
        }
    }

    #[test]
    fn illegal_transition_message() {
        let err = TransitionError::IllegalTransition {
            state: ConnectionState::Closed,
            event: EventKind::Ack,
        };
        assert_eq!(err.to_string(), "Error: Invalid state transition");
    }
}
