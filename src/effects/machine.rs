//! Connection state machine that applies events against a transition table.

use crate::core::{ConnectionState, Event, EventKind, StateHistory, StateTransition};
use crate::effects::transition::{SideEffect, Transition, TransitionError, TransitionTable};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Result of applying one event
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// The event was legal; the machine is now in `new_state`
    Transitioned {
        new_state: ConnectionState,
        message: String,
    },

    /// The event was illegal in the current state; nothing changed
    Rejected {
        message: String,
        error: TransitionError,
    },
}

impl Outcome {
    /// The message to report for this outcome.
    pub fn message(&self) -> &str {
        match self {
            Self::Transitioned { message, .. } | Self::Rejected { message, .. } => message,
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

/// Point-in-time view of a machine's observable fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineSnapshot {
    pub state: ConnectionState,
    pub received_data_events: u64,
    pub sent_data_events: u64,
}

/// Table-driven TCP connection state machine.
///
/// Starts in CLOSED with both data counters at zero. Every call to
/// [`apply`](Self::apply) either performs one legal transition completely or
/// leaves the machine untouched.
///
/// # Example
///
/// ```rust
/// use tcp_fsm::core::{ConnectionState, Event};
/// use tcp_fsm::effects::ConnectionStateMachine;
///
/// let mut machine = ConnectionStateMachine::new();
/// for token in ["PASSIVE", "SYN", "ACK", "SDATA"] {
///     machine.apply(Event::new(token).unwrap());
/// }
///
/// assert_eq!(machine.state(), ConnectionState::Established);
/// assert_eq!(machine.sent_data_events(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct ConnectionStateMachine {
    current: ConnectionState,
    table: TransitionTable,
    received_data_events: u64,
    sent_data_events: u64,
    history: Option<StateHistory>,
}

impl ConnectionStateMachine {
    /// Create a machine in CLOSED over the standard table, tracking history.
    pub fn new() -> Self {
        Self::with_table(TransitionTable::standard(), true)
    }

    pub(crate) fn with_table(table: TransitionTable, track_history: bool) -> Self {
        Self {
            current: ConnectionState::INITIAL,
            table,
            received_data_events: 0,
            sent_data_events: 0,
            history: track_history.then(StateHistory::new),
        }
    }

    /// Get current state (pure)
    pub fn state(&self) -> ConnectionState {
        self.current
    }

    pub fn received_data_events(&self) -> u64 {
        self.received_data_events
    }

    pub fn sent_data_events(&self) -> u64 {
        self.sent_data_events
    }

    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    /// Get transition history, if tracking is enabled (pure)
    pub fn history(&self) -> Option<&StateHistory> {
        self.history.as_ref()
    }

    pub fn snapshot(&self) -> MachineSnapshot {
        MachineSnapshot {
            state: self.current,
            received_data_events: self.received_data_events,
            sent_data_events: self.sent_data_events,
        }
    }

    /// Check if `event` has a transition from the current state (pure)
    pub fn can_apply(&self, event: EventKind) -> bool {
        self.table.get(self.current, event).is_some()
    }

    /// Events accepted from the current state, in vocabulary order (pure)
    pub fn legal_events(&self) -> Vec<EventKind> {
        self.table.events_from(self.current)
    }

    /// Apply `event`, reporting an illegal pair as an error.
    ///
    /// On success the side effect (if any) has run, the state has been
    /// updated and the confirmation message is returned. On error nothing
    /// has changed.
    pub fn try_apply(&mut self, event: impl Into<Event>) -> Result<String, TransitionError> {
        let event = event.into().kind();
        let from = self.current;

        let Some(&Transition { to, effect }) = self.table.get(from, event) else {
            debug!(state = %from, event = %event, "rejected illegal transition");
            return Err(TransitionError::IllegalTransition { state: from, event });
        };

        if let Some(effect) = effect {
            self.run_effect(effect);
        }
        self.current = to;

        if let Some(history) = self.history.take() {
            self.history = Some(history.record(StateTransition {
                from,
                to,
                event,
                timestamp: Utc::now(),
            }));
        }

        debug!(from = %from, to = %to, event = %event, "transition applied");
        Ok(self.message_for(event))
    }

    /// Apply `event` and describe the result.
    ///
    /// Illegal events are reported as [`Outcome::Rejected`]; they never
    /// abort the caller.
    pub fn apply(&mut self, event: impl Into<Event>) -> Outcome {
        match self.try_apply(event) {
            Ok(message) => Outcome::Transitioned {
                new_state: self.current,
                message,
            },
            Err(error) => Outcome::Rejected {
                message: error.to_string(),
                error,
            },
        }
    }

    fn run_effect(&mut self, effect: SideEffect) {
        match effect {
            SideEffect::IncrementReceived => {
                self.received_data_events = self.received_data_events.saturating_add(1)
            }
            SideEffect::IncrementSent => {
                self.sent_data_events = self.sent_data_events.saturating_add(1)
            }
        }
    }

    fn message_for(&self, event: EventKind) -> String {
        match event {
            EventKind::RData => format!("DATA received {}", self.received_data_events),
            EventKind::SData => format!("DATA sent {}", self.sent_data_events),
            _ => format!("Event {event} received, current state is {}", self.current),
        }
    }
}

impl Default for ConnectionStateMachine {
    fn default() -> Self {
        Self::new()
    }
}
