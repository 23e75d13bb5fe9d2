//! Command handler context and the `Handler` trait.

use crate::error::HandlerResult;
use crate::state::{Matrix, Outbox, SessionId};
use relay_proto::{Message, Response};

/// Handler context passed to each command handler.
///
/// Replies are collected in `outbox`; nothing is written to a socket until the
/// handler has returned and the directory lock is released.
pub struct Context<'a> {
    /// The requesting session.
    pub uid: SessionId,
    /// Shared server state.
    pub matrix: &'a Matrix,
    /// Lines produced so far.
    pub outbox: Outbox,
}

impl<'a> Context<'a> {
    pub fn new(uid: SessionId, matrix: &'a Matrix) -> Self {
        Self {
            uid,
            matrix,
            outbox: Outbox::new(),
        }
    }

    pub fn server_name(&self) -> &str {
        &self.matrix.server_info.name
    }

    /// Queue a numeric reply to the requester.
    pub fn reply(&mut self, response: Response, params: Vec<String>) {
        let msg = crate::handlers::server_reply(&self.matrix.server_info.name, response, params);
        self.outbox.push(self.uid, msg);
    }

    /// Queue a line to the requester as-is.
    pub fn send(&mut self, msg: Message) {
        self.outbox.push(self.uid, msg);
    }

    /// Hand back the collected lines.
    pub fn into_outbox(self) -> Outbox {
        self.outbox
    }
}

/// A command handler.
///
/// Handlers run on worker tasks. They take [`Matrix::lock`] for the whole
/// read-modify-write they need, queue output in the context, and return.
pub trait Handler: Send + Sync {
    /// `params` are the line's tokens after the verb, exactly as split.
    fn handle(&self, ctx: &mut Context<'_>, params: &[String]) -> HandlerResult;
}
