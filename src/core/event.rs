//! Event vocabulary and token validation.

use std::str::FromStr;
use thiserror::Error;

crate::named_enum! {
    /// The kind of a discrete input understood by the connection machine.
    pub enum EventKind {
        Passive => "PASSIVE",
        Active => "ACTIVE",
        Syn => "SYN",
        SynAck => "SYNACK",
        Ack => "ACK",
        RData => "RDATA",
        SData => "SDATA",
        Fin => "FIN",
        Close => "CLOSE",
        Timeout => "TIMEOUT",
    }
}

/// A token that is not part of the event vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error: unexpected Event: {token}")]
pub struct UnrecognizedEvent {
    pub token: String,
}

/// Parse a raw token into an [`EventKind`].
///
/// Matching is exact and case-sensitive; the token is not trimmed.
///
/// # Example
///
/// ```rust
/// use tcp_fsm::core::{parse_event, EventKind};
///
/// assert_eq!(parse_event("SYNACK"), Ok(EventKind::SynAck));
/// assert!(parse_event("syn").is_err());
/// ```
pub fn parse_event(token: &str) -> Result<EventKind, UnrecognizedEvent> {
    EventKind::from_name(token).ok_or_else(|| UnrecognizedEvent {
        token: token.to_string(),
    })
}

impl FromStr for EventKind {
    type Err = UnrecognizedEvent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_event(s)
    }
}

/// A validated, immutable event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Event {
    kind: EventKind,
}

impl Event {
    /// Validate `token` and wrap the resulting kind.
    pub fn new(token: &str) -> Result<Self, UnrecognizedEvent> {
        parse_event(token).map(Self::from)
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }
}

impl From<EventKind> for Event {
    fn from(kind: EventKind) -> Self {
        Self { kind }
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.kind, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_vocabulary_name_parses() {
        for kind in EventKind::ALL {
            assert_eq!(parse_event(kind.name()), Ok(*kind));
        }
    }

    #[test]
    fn unknown_tokens_are_rejected() {
        for token in ["bad event", "", "syn", "Syn", " SYN", "SYN ", "SEND", "SYN_ACK"] {
            let err = parse_event(token).unwrap_err();
            assert_eq!(err.token, token);
        }
    }

    #[test]
    fn unrecognized_event_message_names_token() {
        let err = Event::new("bad").unwrap_err();
        assert_eq!(err.to_string(), "Error: unexpected Event: bad");
    }

    #[test]
    fn parsing_is_idempotent() {
        assert_eq!(parse_event("FIN"), parse_event("FIN"));
        assert_eq!(parse_event("nope"), parse_event("nope"));
    }

    #[test]
    fn event_wraps_kind() {
        let event = Event::new("RDATA").unwrap();
        assert_eq!(event.kind(), EventKind::RData);
        assert_eq!(event.to_string(), "RDATA");
        assert_eq!(Event::from(EventKind::RData), event);
    }

    #[test]
    fn from_str_matches_parse_event() {
        assert_eq!("TIMEOUT".parse::<EventKind>(), Ok(EventKind::Timeout));
        assert!("timeout".parse::<EventKind>().is_err());
    }
}
