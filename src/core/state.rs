//! Connection states of the TCP lifecycle.
//!
//! States are plain values: they carry no data and have no behaviour of their
//! own beyond naming. Which moves between them are legal is decided solely by
//! the [`TransitionTable`](crate::effects::TransitionTable).

crate::named_enum! {
    /// One of the eleven phases of a modeled connection.
    ///
    /// No state is terminal. `Closed` is both the starting point and the
    /// endpoint of every close sequence, so a machine can be reused for a new
    /// connection once it returns there.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tcp_fsm::core::ConnectionState;
    ///
    /// assert_eq!(ConnectionState::default(), ConnectionState::Closed);
    /// assert_eq!(ConnectionState::FinWait1.to_string(), "FIN_WAIT_1");
    /// ```
    pub enum ConnectionState {
        Closed => "CLOSED",
        SynSent => "SYN_SENT",
        Listen => "LISTEN",
        SynRcvd => "SYN_RCVD",
        Established => "ESTABLISHED",
        CloseWait => "CLOSE_WAIT",
        FinWait1 => "FIN_WAIT_1",
        FinWait2 => "FIN_WAIT_2",
        TimeWait => "TIME_WAIT",
        Closing => "CLOSING",
        LastAck => "LAST_ACK",
    }
}

impl ConnectionState {
    /// The state every machine starts in.
    pub const INITIAL: ConnectionState = ConnectionState::Closed;
}

impl Default for ConnectionState {
    fn default() -> Self {
        Self::INITIAL
    }
}
