//! Client line parsing and the table of supported verbs.

use std::fmt;
use std::str::FromStr;

use crate::error::ProtocolError;

/// The closed set of verbs the relay dispatches.
///
/// Matching is case-sensitive: `join` is not `JOIN`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verb {
    /// `NICK <nickname>`
    Nick,
    /// `USER <username> <unused> <hostname> :<realname>`
    User,
    /// `JOIN <#room>`
    Join,
    /// `PART <#room>`
    Part,
    /// `WHO <#room>`
    Who,
    /// `PRIVMSG <target> :<text>`
    Privmsg,
}

impl Verb {
    /// Every supported verb, in table order.
    pub const ALL: [Verb; 6] = [
        Verb::Nick,
        Verb::User,
        Verb::Join,
        Verb::Part,
        Verb::Who,
        Verb::Privmsg,
    ];

    /// The wire spelling of this verb.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Nick => "NICK",
            Verb::User => "USER",
            Verb::Join => "JOIN",
            Verb::Part => "PART",
            Verb::Who => "WHO",
            Verb::Privmsg => "PRIVMSG",
        }
    }
}

impl FromStr for Verb {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Verb::ALL
            .into_iter()
            .find(|verb| verb.as_str() == s)
            .ok_or_else(|| ProtocolError::UnknownVerb(s.to_owned()))
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A client line split into its verb and raw parameter tokens.
///
/// Splitting happens on every single space, so consecutive spaces yield empty
/// tokens and a `:`-led trailing stays split into words. Handlers that accept
/// free text rejoin the tokens themselves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedLine {
    /// First token of the line.
    pub verb: String,
    /// Remaining tokens, in order.
    pub params: Vec<String>,
}

impl ParsedLine {
    /// Split a line (terminator already stripped) into verb and parameters.
    pub fn parse(line: &str) -> Self {
        let mut tokens = line.split(' ');
        let verb = tokens.next().unwrap_or_default().to_owned();
        let params = tokens.map(str::to_owned).collect();
        Self { verb, params }
    }

    /// True if the verb is `QUIT`, which the transport handles itself.
    pub fn is_quit(&self) -> bool {
        self.verb == "QUIT"
    }
}
