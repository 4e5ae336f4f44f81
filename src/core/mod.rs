//! Core vocabulary types.
//!
//! This module contains the values the connection machine operates on:
//! - Connection states
//! - Events and token validation
//! - History of accepted transitions
//!
//! Nothing here mutates a machine; these are plain values.

mod event;
mod history;
mod state;

pub use event::{parse_event, Event, EventKind, UnrecognizedEvent};
pub use history::{StateHistory, StateTransition};
pub use state::ConnectionState;
