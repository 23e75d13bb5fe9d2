//! In-process harness for handler tests.
//!
//! Sessions are registered without sinks; tests inspect the returned
//! [`Outbox`] directly.

use crate::config::Config;
use crate::handlers::Registry;
use crate::state::{Matrix, Outbox, SessionId};
use relay_proto::ParsedLine;

pub(crate) struct Harness {
    pub matrix: Matrix,
    registry: Registry,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            matrix: Matrix::new(&Config::default()),
            registry: Registry::new(),
        }
    }

    /// A fresh anonymous session.
    pub fn connect(&self) -> SessionId {
        self.matrix.register()
    }

    /// A session that sent `NICK <nick>` and `USER <nick> 0 localhost :<nick> Test`.
    pub fn connect_as(&self, nick: &str) -> SessionId {
        let id = self.connect();
        self.run(id, &format!("NICK {nick}"));
        self.run(id, &format!("USER {nick} 0 localhost :{nick} Test"));
        id
    }

    pub fn run(&self, id: SessionId, line: &str) -> Outbox {
        self.registry
            .dispatch(&self.matrix, id, &ParsedLine::parse(line))
    }
}
