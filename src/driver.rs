//! Line-oriented session that feeds event tokens to a machine.
//!
//! Each whitespace-delimited token yields exactly one message: the
//! confirmation from the machine, or one of the two error messages.

use crate::core::Event;
use crate::effects::{ConnectionStateMachine, TransitionTable};
use std::io::{self, BufRead, Write};
use tracing::{info, trace};

/// Printed once before any input is read.
pub const BANNER: &str = "Starting up TCP finite state machine";

/// A machine plus the token handling around it.
///
/// The default session does not record transition history, so a long input
/// stream runs in constant memory.
#[derive(Debug)]
pub struct Session {
    machine: ConnectionStateMachine,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(ConnectionStateMachine::with_table(
            TransitionTable::standard(),
            false,
        ))
    }
}

impl Session {
    pub fn new(machine: ConnectionStateMachine) -> Self {
        Self { machine }
    }

    pub fn machine(&self) -> &ConnectionStateMachine {
        &self.machine
    }

    pub fn into_machine(self) -> ConnectionStateMachine {
        self.machine
    }

    /// Parse and apply one token, returning the message to report.
    pub fn handle_token(&mut self, token: &str) -> String {
        trace!(token, state = %self.machine.state(), "handling token");
        match Event::new(token) {
            Ok(event) => self.machine.apply(event).message().to_string(),
            Err(err) => err.to_string(),
        }
    }

    /// Handle every token on `line` in order.
    pub fn handle_line(&mut self, line: &str) -> Vec<String> {
        line.split_whitespace()
            .map(|token| self.handle_token(token))
            .collect()
    }

    /// Read lines until EOF, writing one message per token.
    ///
    /// Bytes that are not valid UTF-8 are decoded lossily, so they surface
    /// as unrecognized tokens instead of ending the session.
    pub fn run<R, W>(&mut self, mut input: R, mut output: W) -> io::Result<()>
    where
        R: BufRead,
        W: Write,
    {
        writeln!(output, "{BANNER}")?;
        info!("session started");

        let mut handled = 0usize;
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            for message in self.handle_line(&line) {
                writeln!(output, "{message}")?;
                handled += 1;
            }
            output.flush()?;
        }

        info!(
            tokens = handled,
            state = %self.machine.state(),
            "session finished"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConnectionState;

    #[test]
    fn unknown_token_reports_unexpected_event() {
        let mut session = Session::default();
        assert_eq!(
            session.handle_token("bogus"),
            "Error: unexpected Event: bogus"
        );
        assert_eq!(session.machine().state(), ConnectionState::Closed);
    }

    #[test]
    fn illegal_token_reports_invalid_transition() {
        let mut session = Session::default();
        assert_eq!(session.handle_token("ACK"), "Error: Invalid state transition");
    }

    #[test]
    fn line_yields_one_message_per_token() {
        let mut session = Session::default();
        let messages = session.handle_line("  ACTIVE\tsyn  SYNACK SDATA ");

        assert_eq!(
            messages,
            vec![
                "Event ACTIVE received, current state is SYN_SENT",
                "Error: unexpected Event: syn",
                "Event SYNACK received, current state is ESTABLISHED",
                "DATA sent 1",
            ]
        );
    }

    #[test]
    fn blank_line_yields_nothing() {
        let mut session = Session::default();
        assert!(session.handle_line("   ").is_empty());
        assert!(session.handle_line("").is_empty());
    }

    #[test]
    fn run_writes_banner_and_messages() {
        let input = "PASSIVE SYN\nACK\n\nFIN CLOSE ACK\n";
        let mut output = Vec::new();
        let mut session = Session::default();

        session.run(input.as_bytes(), &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                BANNER,
                "Event PASSIVE received, current state is LISTEN",
                "Event SYN received, current state is SYN_RCVD",
                "Event ACK received, current state is ESTABLISHED",
                "Event FIN received, current state is CLOSE_WAIT",
                "Event CLOSE received, current state is LAST_ACK",
                "Event ACK received, current state is CLOSED",
            ]
        );
        assert_eq!(session.into_machine().state(), ConnectionState::Closed);
    }

    #[test]
    fn invalid_utf8_is_an_unexpected_event() {
        let input: &[u8] = b"PASSIVE\n\xff\nSYN\n";
        let mut output = Vec::new();
        let mut session = Session::default();

        session.run(input, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                BANNER,
                "Event PASSIVE received, current state is LISTEN",
                "Error: unexpected Event: \u{FFFD}",
                "Event SYN received, current state is SYN_RCVD",
            ]
        );
        assert_eq!(session.machine().state(), ConnectionState::SynRcvd);
    }

    #[test]
    fn last_line_without_newline_is_handled() {
        let mut output = Vec::new();
        let mut session = Session::default();

        session.run("ACTIVE\r\nSYNACK".as_bytes(), &mut output).unwrap();

        assert_eq!(session.machine().state(), ConnectionState::Established);
    }

    #[test]
    fn default_session_keeps_no_history() {
        let mut session = Session::default();
        session.handle_line("ACTIVE SYNACK");
        for _ in 0..1_000 {
            session.handle_line("SDATA");
        }

        assert!(session.machine().history().is_none());
        assert_eq!(session.machine().sent_data_events(), 1_000);
    }
}
