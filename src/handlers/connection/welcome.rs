//! Welcome burst sent after a successful NICK.

use crate::handlers::server_reply;
use crate::state::{ServerInfo, Session};
use relay_proto::{Message, Response};

/// Build RPL_WELCOME through RPL_MYINFO followed by ERR_NOMOTD.
pub fn welcome_burst(info: &ServerInfo, session: &Session) -> Vec<Message> {
    let nick = session.nick.clone();
    let server_name = info.name.as_str();

    vec![
        server_reply(
            server_name,
            Response::RPL_WELCOME,
            vec![
                nick.clone(),
                format!("Welcome to the Internet Relay Network {}", session.prefix()),
            ],
        ),
        server_reply(
            server_name,
            Response::RPL_YOURHOST,
            vec![
                nick.clone(),
                format!("Your host is {}, running version {}", info.name, info.version),
            ],
        ),
        server_reply(
            server_name,
            Response::RPL_CREATED,
            vec![
                nick.clone(),
                format!(
                    "This server was created {}",
                    info.created.format("%a %b %d %Y at %H:%M:%S UTC")
                ),
            ],
        ),
        server_reply(
            server_name,
            Response::RPL_MYINFO,
            vec![
                nick.clone(),
                info.name.clone(),
                info.version.clone(),
                info.user_modes.clone(),
                info.channel_modes.clone(),
            ],
        ),
        server_reply(
            server_name,
            Response::ERR_NOMOTD,
            vec![nick, "MOTD file is missing".to_string()],
        ),
    ]
}
