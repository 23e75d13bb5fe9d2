//! # relay-proto
//!
//! Protocol layer for the relayd chat relay: splitting client lines into a
//! verb and parameters, the closed table of supported verbs, numeric reply
//! codes, and encoding of server-to-client lines.
//!
//! ## Quick Start
//!
//! ```rust
//! use relay_proto::{Message, ParsedLine, Prefix, Verb};
//!
//! let line = ParsedLine::parse("JOIN #rust");
//! assert_eq!(line.verb.parse::<Verb>().ok(), Some(Verb::Join));
//!
//! let msg = Message::privmsg("#rust", "hello")
//!     .with_prefix(Prefix::new("alice", "alice", "localhost"));
//! assert_eq!(msg.to_string(), ":alice!alice@localhost PRIVMSG #rust :hello");
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod command;
pub mod error;
#[cfg(feature = "tokio")]
pub mod line;
pub mod message;
pub mod prefix;
pub mod response;

pub use self::command::{ParsedLine, Verb};
pub use self::error::{ProtocolError, Result};
#[cfg(feature = "tokio")]
pub use self::line::LineCodec;
pub use self::message::{Command, Message};
pub use self::prefix::Prefix;
pub use self::response::Response;

/// Strip a single leading `#` from a room target, if present.
///
/// Rooms are stored without the sigil; the wire form always re-adds it.
pub fn room_name(target: &str) -> &str {
    target.strip_prefix('#').unwrap_or(target)
}

/// Strip a single leading `:` trailing-parameter sentinel, if present.
pub fn strip_trailing_sentinel(token: &str) -> &str {
    token.strip_prefix(':').unwrap_or(token)
}
