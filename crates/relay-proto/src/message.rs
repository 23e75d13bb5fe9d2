//! Server-to-client messages and their wire encoding.
//!
//! `Display` produces exactly one protocol line without the CRLF terminator;
//! the transport's [`LineCodec`](crate::LineCodec) appends it.

use std::fmt::{self, Display, Formatter, Write};

use crate::prefix::Prefix;
use crate::response::Response;

/// Commands the server emits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Numeric reply with its arguments (first argument is the target nick or `*`).
    Response(Response, Vec<String>),
    /// `JOIN <channel>`
    JOIN(String),
    /// `PART <channel> :<reason>`
    PART(String, String),
    /// `PRIVMSG <target> :<text>`
    PRIVMSG(String, String),
    /// `NOTICE <target> :<text>`
    NOTICE(String, String),
    /// `PING :<token>`
    PING(String),
    /// `PONG <server> :<token>`
    PONG(String, String),
}

/// A single outbound protocol line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    /// Origin of the message, if any.
    pub prefix: Option<Prefix>,
    /// The command and its arguments.
    pub command: Command,
}

impl Message {
    /// Create a PRIVMSG without prefix.
    pub fn privmsg(target: impl Into<String>, text: impl Into<String>) -> Self {
        Self::from(Command::PRIVMSG(target.into(), text.into()))
    }

    /// Create a NOTICE without prefix.
    pub fn notice(target: impl Into<String>, text: impl Into<String>) -> Self {
        Self::from(Command::NOTICE(target.into(), text.into()))
    }

    /// Set the prefix, consuming and returning the message.
    pub fn with_prefix(mut self, prefix: Prefix) -> Self {
        self.prefix = Some(prefix);
        self
    }

    /// The numeric code if this is a numeric reply.
    pub fn response(&self) -> Option<Response> {
        match &self.command {
            Command::Response(resp, _) => Some(*resp),
            _ => None,
        }
    }
}

impl From<Command> for Message {
    fn from(command: Command) -> Self {
        Self {
            prefix: None,
            command,
        }
    }
}

/// Check if a string needs colon-prefixing as a trailing argument.
pub fn needs_colon_prefix(s: &str) -> bool {
    s.is_empty() || s.contains(' ') || s.starts_with(':')
}

/// Write `cmd` followed by its arguments; the last one becomes a trailing
/// argument only when it has to.
fn write_cmd(f: &mut Formatter<'_>, cmd: &str, args: &[&str]) -> fmt::Result {
    f.write_str(cmd)?;
    if let Some((last, rest)) = args.split_last() {
        for arg in rest {
            f.write_char(' ')?;
            f.write_str(arg)?;
        }
        f.write_char(' ')?;
        if needs_colon_prefix(last) {
            f.write_char(':')?;
        }
        f.write_str(last)?;
    }
    Ok(())
}

/// Write `cmd` followed by its arguments; the last one is always trailing.
fn write_cmd_freeform(f: &mut Formatter<'_>, cmd: &str, args: &[&str]) -> fmt::Result {
    f.write_str(cmd)?;
    if let Some((last, rest)) = args.split_last() {
        for arg in rest {
            f.write_char(' ')?;
            f.write_str(arg)?;
        }
        f.write_str(" :")?;
        f.write_str(last)?;
    }
    Ok(())
}

impl Display for Command {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Command::Response(resp, args) => {
                let code = resp.to_string();
                let args: Vec<&str> = args.iter().map(String::as_str).collect();
                write_cmd(f, &code, &args)
            }
            Command::JOIN(c) => write_cmd(f, "JOIN", &[c.as_str()]),
            Command::PART(c, m) => write_cmd_freeform(f, "PART", &[c.as_str(), m.as_str()]),
            Command::PRIVMSG(t, m) => write_cmd_freeform(f, "PRIVMSG", &[t.as_str(), m.as_str()]),
            Command::NOTICE(t, m) => write_cmd_freeform(f, "NOTICE", &[t.as_str(), m.as_str()]),
            Command::PING(s) => write_cmd_freeform(f, "PING", &[s.as_str()]),
            Command::PONG(s, t) => write_cmd_freeform(f, "PONG", &[s.as_str(), t.as_str()]),
        }
    }
}

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(ref prefix) = self.prefix {
            write!(f, ":{} ", prefix)?;
        }
        write!(f, "{}", self.command)
    }
}
