//! PART command handler.

use crate::error::HandlerResult;
use crate::handlers::{Context, Handler};
use relay_proto::{Command, Message, room_name};
use tracing::debug;

/// Handler for PART command.
///
/// `PART <#room>`
///
/// Unknown rooms and non-members are ignored silently. The announcement goes
/// to every member, the parting session included, before it is removed.
pub struct PartHandler;

impl Handler for PartHandler {
    fn handle(&self, ctx: &mut Context<'_>, params: &[String]) -> HandlerResult {
        let Some(target) = params.first() else {
            return Ok(());
        };
        let name = room_name(target);

        let matrix = ctx.matrix;
        let (members, announce) = {
            let mut dir = matrix.lock();
            let Some(room) = dir.find_room(name) else {
                return Ok(());
            };
            if !room.contains(ctx.uid) {
                return Ok(());
            }
            let members = room.members().to_vec();
            let session = dir.require(ctx.uid)?;
            let announce = Message::from(Command::PART(format!("#{name}"), session.nick.clone()))
                .with_prefix(session.prefix());

            dir.part(name, ctx.uid);
            let emptied = dir.find_room(name).is_some_and(|room| room.is_empty());
            debug!(room = %name, session = %ctx.uid, emptied, "Left room");
            (members, announce)
        };

        ctx.outbox.broadcast(members, announce);
        Ok(())
    }
}
