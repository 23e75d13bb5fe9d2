//! Reply builders shared across handlers.

use relay_proto::{Command, Message, Prefix, Response};

/// Helper to create a server reply message (numeric response).
pub fn server_reply(server_name: &str, response: Response, params: Vec<String>) -> Message {
    Message {
        prefix: Some(Prefix::ServerName(server_name.to_string())),
        command: Command::Response(response, params),
    }
}

/// Helper to create a server NOTICE message.
pub fn server_notice<T: Into<String>>(server_name: &str, target: &str, text: T) -> Message {
    Message::notice(target, text).with_prefix(Prefix::ServerName(server_name.to_string()))
}

/// Join message tokens back into text, dropping one leading `:` sentinel.
///
/// Tokens were split on single spaces, so rejoining with single spaces
/// restores the original text.
pub fn trailing_text(tokens: &[String]) -> String {
    let text = tokens.join(" ");
    relay_proto::strip_trailing_sentinel(&text).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_reply_prefix() {
        let msg = server_reply(
            "irc.example.com",
            Response::RPL_ENDOFWHO,
            vec!["alice".into(), "#test".into(), "End of WHO list".into()],
        );
        assert_eq!(
            msg.to_string(),
            ":irc.example.com 315 alice #test :End of WHO list"
        );
    }

    #[test]
    fn test_trailing_text_restores_spacing() {
        let tokens: Vec<String> = [":hello", "", "world"].map(String::from).to_vec();
        assert_eq!(trailing_text(&tokens), "hello  world");

        let bare: Vec<String> = vec!["hi".into()];
        assert_eq!(trailing_text(&bare), "hi");
    }
}
