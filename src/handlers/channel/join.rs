//! JOIN command handler.

use crate::error::HandlerResult;
use crate::handlers::{Context, Handler};
use relay_proto::{Command, Message, Response, room_name};
use tracing::debug;

/// Handler for JOIN command.
///
/// `JOIN <#room>`
///
/// Creates the room on first use. The JOIN announcement goes to every member
/// including the joiner, then the joiner gets NAMES (353) and its end (366).
pub struct JoinHandler;

impl Handler for JoinHandler {
    fn handle(&self, ctx: &mut Context<'_>, params: &[String]) -> HandlerResult {
        let Some(target) = params.first() else {
            return Ok(());
        };
        let name = room_name(target);
        if name.is_empty() {
            return Ok(());
        }

        let matrix = ctx.matrix;
        let (members, names, announce, nick) = {
            let mut dir = matrix.lock();
            let added = dir.join(name, ctx.uid)?;
            let session = dir.require(ctx.uid)?;
            let prefix = session.prefix();
            let nick = session.nick_or_star().to_string();

            let Some(room) = dir.find_room(name) else {
                return Ok(());
            };
            let names = dir
                .members(room)
                .map(|member| format!("@{}", member.nick))
                .collect::<Vec<_>>()
                .join(" ");
            let announce = Message::from(Command::JOIN(room.wire_name())).with_prefix(prefix);
            debug!(room = %name, session = %ctx.uid, added, members = room.len(), "Joined room");

            (room.members().to_vec(), names, announce, nick)
        };

        let wire_name = format!("#{name}");
        ctx.outbox.broadcast(members, announce);
        ctx.reply(
            Response::RPL_NAMREPLY,
            vec![nick.clone(), "=".to_string(), wire_name.clone(), names],
        );
        ctx.reply(
            Response::RPL_ENDOFNAMES,
            vec![nick, wire_name, "End of NAMES list".to_string()],
        );
        Ok(())
    }
}
