//! WHO handler for listing the members of a room.

use crate::error::HandlerResult;
use crate::handlers::{Context, Handler};
use relay_proto::{Response, room_name};

/// Handler for WHO command.
///
/// `WHO <#room>`
///
/// One RPL_WHOREPLY per member in join order, the first flagged `H@` and the
/// rest `H`, then RPL_ENDOFWHO. An unknown room gets only the end marker.
pub struct WhoHandler;

/// Placeholder for identity fields USER never set.
fn or_star(field: &str) -> String {
    if field.is_empty() {
        "*".to_string()
    } else {
        field.to_string()
    }
}

impl Handler for WhoHandler {
    fn handle(&self, ctx: &mut Context<'_>, params: &[String]) -> HandlerResult {
        let [target] = params else {
            return Ok(());
        };
        let name = room_name(target);
        let wire_name = format!("#{name}");
        let server_name = ctx.server_name().to_string();

        let matrix = ctx.matrix;
        let (nick, rows) = {
            let dir = matrix.lock();
            let nick = dir.require(ctx.uid)?.nick_or_star().to_string();

            let rows: Vec<Vec<String>> = match dir.find_room(name) {
                Some(room) => dir
                    .members(room)
                    .enumerate()
                    .map(|(i, member)| {
                        vec![
                            nick.clone(),
                            wire_name.clone(),
                            or_star(&member.user),
                            or_star(&member.host),
                            server_name.clone(),
                            member.nick.clone(),
                            if i == 0 { "H@" } else { "H" }.to_string(),
                            format!("0 {}", member.realname),
                        ]
                    })
                    .collect(),
                None => Vec::new(),
            };
            (nick, rows)
        };

        for row in rows {
            ctx.reply(Response::RPL_WHOREPLY, row);
        }
        ctx.reply(
            Response::RPL_ENDOFWHO,
            vec![nick, wire_name, "End of WHO list".to_string()],
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::handlers::testing::Harness;

    #[test]
    fn test_who_lists_members_in_join_order() {
        let h = Harness::new();
        let a = h.connect_as("alice");
        let b = h.connect_as("bob");
        h.run(a, "JOIN #test");
        h.run(b, "JOIN #test");

        let out = h.run(b, "WHO #test");
        assert_eq!(
            out.lines_for(b),
            vec![
                ":irc.example.com 352 bob #test alice localhost irc.example.com alice H@ :0 alice Test",
                ":irc.example.com 352 bob #test bob localhost irc.example.com bob H :0 bob Test",
                ":irc.example.com 315 bob #test :End of WHO list",
            ]
        );
    }

    #[test]
    fn test_who_unknown_room_sends_only_end() {
        let h = Harness::new();
        let a = h.connect_as("alice");
        let out = h.run(a, "WHO #nowhere");
        assert_eq!(
            out.lines_for(a),
            vec![":irc.example.com 315 alice #nowhere :End of WHO list"]
        );
    }

    #[test]
    fn test_who_wrong_arity_is_silent() {
        let h = Harness::new();
        let a = h.connect_as("alice");
        assert!(h.run(a, "WHO #test o").is_empty());
    }

    #[test]
    fn test_who_without_user_fields() {
        let h = Harness::new();
        let a = h.connect();
        h.run(a, "NICK alice");
        h.run(a, "JOIN #test");

        let out = h.run(a, "WHO #test");
        assert_eq!(
            out.lines_for(a)[0],
            ":irc.example.com 352 alice #test * * irc.example.com alice H@ :0 "
        );
    }
}
