//! Transition history tracking.
//!
//! Records the accepted transitions of a connection in order. Rejected
//! events never appear here.

use super::event::EventKind;
use super::state::ConnectionState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single accepted transition.
///
/// # Example
///
/// ```rust
/// use tcp_fsm::core::{ConnectionState, EventKind, StateTransition};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: ConnectionState::Closed,
///     to: ConnectionState::Listen,
///     event: EventKind::Passive,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.to, ConnectionState::Listen);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition {
    /// The state being transitioned from
    pub from: ConnectionState,
    /// The state being transitioned to
    pub to: ConnectionState,
    /// The event that triggered the transition
    pub event: EventKind,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of accepted transitions.
///
/// `record` consumes the history and returns it with the transition
/// appended, so callers thread it through by value.
///
/// # Example
///
/// ```rust
/// use tcp_fsm::core::{ConnectionState, EventKind, StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: ConnectionState::Closed,
///         to: ConnectionState::SynSent,
///         event: EventKind::Active,
///         timestamp: Utc::now(),
///     })
///     .record(StateTransition {
///         from: ConnectionState::SynSent,
///         to: ConnectionState::Established,
///         event: EventKind::SynAck,
///         timestamp: Utc::now(),
///     });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3); // CLOSED -> SYN_SENT -> ESTABLISHED
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StateHistory {
    transitions: Vec<StateTransition>,
}

impl StateHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning the extended history.
    pub fn record(mut self, transition: StateTransition) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the first transition followed by the `to`
    /// state of each transition. Empty if nothing was recorded.
    pub fn get_path(&self) -> Vec<&ConnectionState> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all transitions in the order they were accepted.
    pub fn transitions(&self) -> &[StateTransition] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
