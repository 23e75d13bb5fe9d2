//! NICK command handler.

use super::welcome::welcome_burst;
use crate::error::{HandlerError, HandlerResult};
use crate::handlers::{Context, Handler};
use relay_proto::Verb;
use tracing::info;

/// Handler for NICK command.
///
/// `NICK <nickname>`
///
/// Every successful call, renames included, is answered with the welcome
/// burst.
pub struct NickHandler;

impl Handler for NickHandler {
    fn handle(&self, ctx: &mut Context<'_>, params: &[String]) -> HandlerResult {
        let [nick] = params else {
            return Err(HandlerError::NeedMoreParams(Verb::Nick));
        };
        if nick.is_empty() {
            return Err(HandlerError::NeedMoreParams(Verb::Nick));
        }

        let matrix = ctx.matrix;
        let burst = {
            let mut dir = matrix.lock();
            let old_nick = dir.require(ctx.uid)?.nick.clone();
            dir.set_nickname(ctx.uid, nick)?;
            let session = dir.require(ctx.uid)?;
            info!(
                session = %ctx.uid,
                old_nick = %old_nick,
                new_nick = %nick,
                state = ?session.state(),
                "Nickname set"
            );
            welcome_burst(&matrix.server_info, session)
        };

        for msg in burst {
            ctx.send(msg);
        }
        Ok(())
    }
}
