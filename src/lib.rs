//! tcp-fsm: a table-driven TCP connection state machine
//!
//! The machine is driven by named events instead of packets. Each event is
//! looked up in a fixed (state, event) table; a hit moves the machine and a
//! miss is reported without touching it.
//!
//! # Core Concepts
//!
//! - **State**: one of the eleven phases of the TCP connection diagram
//! - **Event**: a validated token from the ten-name vocabulary
//! - **Transition table**: the only source of legal moves
//! - **Counters**: data events received and sent while ESTABLISHED
//!
//! # Example
//!
//! ```rust
//! use tcp_fsm::core::{parse_event, ConnectionState};
//! use tcp_fsm::effects::{ConnectionStateMachine, Outcome};
//!
//! let mut machine = ConnectionStateMachine::new();
//!
//! let outcome = machine.apply(parse_event("ACK").unwrap());
//! assert!(outcome.is_rejected());
//! assert_eq!(machine.state(), ConnectionState::Closed);
//!
//! let outcome = machine.apply(parse_event("ACTIVE").unwrap());
//! assert_eq!(
//!     outcome,
//!     Outcome::Transitioned {
//!         new_state: ConnectionState::SynSent,
//!         message: "Event ACTIVE received, current state is SYN_SENT".to_string(),
//!     }
//! );
//! ```

// `named_enum!` names serde through this crate so callers need no serde dependency.
extern crate self as tcp_fsm;

#[doc(hidden)]
pub use serde as __serde;

pub mod builder;
pub mod core;
pub mod driver;
pub mod effects;

// Re-export commonly used types
pub use self::core::{parse_event, ConnectionState, Event, EventKind, UnrecognizedEvent};
pub use driver::Session;
pub use effects::{ConnectionStateMachine, Outcome, TransitionError, TransitionTable};
