//! Command handler registry and dispatch.

use super::context::{Context, Handler};
use crate::error::HandlerError;
use crate::handlers::{
    channel::{JoinHandler, PartHandler},
    connection::{NickHandler, UserHandler},
    messaging::PrivmsgHandler,
    user_query::WhoHandler,
};
use crate::state::{Matrix, Outbox, SessionId};
use crate::telemetry::{CommandTimer, spans};
use relay_proto::{ParsedLine, Verb};
use std::collections::HashMap;
use tracing::debug;

/// Registry of command handlers, keyed by verb.
pub struct Registry {
    handlers: HashMap<Verb, Box<dyn Handler>>,
}

impl Registry {
    /// Create a new registry with all handlers registered.
    pub fn new() -> Self {
        let mut handlers: HashMap<Verb, Box<dyn Handler>> = HashMap::new();

        // Connection/registration handlers
        handlers.insert(Verb::Nick, Box::new(NickHandler));
        handlers.insert(Verb::User, Box::new(UserHandler));

        // Channel handlers
        handlers.insert(Verb::Join, Box::new(JoinHandler));
        handlers.insert(Verb::Part, Box::new(PartHandler));

        // User query handlers
        handlers.insert(Verb::Who, Box::new(WhoHandler));

        // Messaging handlers
        handlers.insert(Verb::Privmsg, Box::new(PrivmsgHandler));

        Self { handlers }
    }

    /// Run one client line for `uid` and return every line it produced.
    ///
    /// A line with no parameters or an unsupported verb gets the
    /// invalid-command notice. Handler errors are turned into their reply
    /// here, so callers only ever deliver.
    pub fn dispatch(&self, matrix: &Matrix, uid: SessionId, line: &ParsedLine) -> Outbox {
        let mut ctx = Context::new(uid, matrix);

        let result = match line.verb.parse::<Verb>() {
            Ok(verb) if !line.params.is_empty() => match self.handlers.get(&verb) {
                Some(handler) => {
                    let nick = matrix
                        .lock()
                        .session(uid)
                        .map(|s| s.nick_or_star().to_string())
                        .unwrap_or_default();
                    let cmd_span = spans::command(verb.as_str(), &uid.to_string(), &nick);
                    let _enter = cmd_span.enter();
                    let _timer = CommandTimer::new(verb.as_str());
                    handler.handle(&mut ctx, &line.params)
                }
                None => Err(HandlerError::UnknownCommand(line.verb.clone())),
            },
            _ => Err(HandlerError::UnknownCommand(line.verb.clone())),
        };

        if let Err(e) = result {
            debug!(
                command = %line.verb,
                session = %uid,
                error = %e,
                kind = e.error_code(),
                "Command error"
            );
            let nick = matrix
                .lock()
                .session(uid)
                .map(|s| s.nick_or_star().to_string());
            // A session removed mid-command has nobody left to answer
            if let Some(nick) = nick
                && let Some(reply) = e.to_reply(&matrix.server_info.name, &nick)
            {
                ctx.send(reply);
            }
        }

        ctx.into_outbox()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
