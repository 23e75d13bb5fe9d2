//! Telemetry utilities for command timing and log correlation.

use std::time::Instant;
use tracing::trace;

/// Guard for timing command execution.
///
/// Emits the command latency as a trace event when dropped.
pub struct CommandTimer {
    command: &'static str,
    start: Instant,
}

impl CommandTimer {
    /// Start timing a command.
    pub fn new(command: &'static str) -> Self {
        Self {
            command,
            start: Instant::now(),
        }
    }
}

impl Drop for CommandTimer {
    fn drop(&mut self) {
        let micros = self.start.elapsed().as_micros() as u64;
        trace!(command = self.command, micros, "Command finished");
    }
}

/// Standardized span constructors.
pub mod spans {
    use tracing::{Span, debug_span, info_span};

    /// Create a span for a client connection.
    pub fn connection(session: &str, addr: &str) -> Span {
        info_span!("connection", session = %session, addr = %addr)
    }

    /// Create a span for a command execution.
    pub fn command(name: &str, session: &str, nick: &str) -> Span {
        debug_span!("command", command = %name, session = %session, nick = %nick)
    }
}
