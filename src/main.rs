//! Entry point for `tcp-fsm`.
//!
//! Reads event tokens from stdin and prints one message per token to stdout.
//! Diagnostics go to stderr; set `RUST_LOG` to control verbosity.

use std::io;
use tcp_fsm::Session;
use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::default().run(stdin.lock(), stdout.lock())
}
