//! PRIVMSG command handler.

use crate::error::{HandlerError, HandlerResult};
use crate::handlers::{Context, Handler, trailing_text};
use relay_proto::{Message, room_name};
use tracing::trace;

/// Handler for PRIVMSG command.
///
/// `PRIVMSG <target> <text...>`
///
/// A `#` target relays to every other member of the room, provided the sender
/// is one. Any other target is a nickname. Unknown targets are dropped.
pub struct PrivmsgHandler;

impl Handler for PrivmsgHandler {
    fn handle(&self, ctx: &mut Context<'_>, params: &[String]) -> HandlerResult {
        let [target, text @ ..] = params else {
            return Ok(());
        };
        if text.is_empty() {
            return Ok(());
        }
        let text = trailing_text(text);

        let matrix = ctx.matrix;
        let dir = matrix.lock();
        let sender = dir.require(ctx.uid)?;
        let msg = Message::privmsg(target.as_str(), text).with_prefix(sender.prefix());

        if target.starts_with('#') {
            let Some(room) = dir.find_room(room_name(target)) else {
                return Ok(());
            };
            if !room.contains(ctx.uid) {
                return Err(HandlerError::NotOnChannel(target.clone()));
            }
            let recipients: Vec<_> = room
                .members()
                .iter()
                .copied()
                .filter(|id| *id != ctx.uid)
                .collect();
            drop(dir);

            trace!(target = %target, recipients = recipients.len(), "Relaying to room");
            ctx.outbox.broadcast(recipients, msg);
        } else {
            let Some(recipient) = dir.find_by_nickname(target).map(|s| s.id) else {
                return Ok(());
            };
            drop(dir);
            ctx.outbox.push(recipient, msg);
        }
        Ok(())
    }
}
