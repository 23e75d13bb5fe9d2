//! USER command handler.

use crate::error::{HandlerError, HandlerResult};
use crate::handlers::{Context, Handler, trailing_text};
use relay_proto::Verb;
use tracing::debug;

/// Handler for USER command.
///
/// `USER <username> <unused> <hostname> <realname>`
///
/// The realname may be a `:`-led trailing spanning several tokens. Fields are
/// overwritten on every call and no reply is sent.
pub struct UserHandler;

impl Handler for UserHandler {
    fn handle(&self, ctx: &mut Context<'_>, params: &[String]) -> HandlerResult {
        let [user, _, host, realname @ ..] = params else {
            return Err(HandlerError::NeedMoreParams(Verb::User));
        };
        let multiword = realname.len() > 1 && realname[0].starts_with(':');
        if realname.len() != 1 && !multiword {
            return Err(HandlerError::NeedMoreParams(Verb::User));
        }
        let realname = trailing_text(realname);

        ctx.matrix
            .lock()
            .set_identity(ctx.uid, user, &realname, host)?;
        debug!(session = %ctx.uid, user = %user, host = %host, "Identity set");
        Ok(())
    }
}
