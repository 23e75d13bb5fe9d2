//! Unified error handling for relayd.
//!
//! Directory operations fail with [`SessionError`]; command handlers fail
//! with [`HandlerError`], which knows the client-visible reply (if any) for
//! each failure.

use crate::handlers::{server_notice, server_reply};
use crate::state::SessionId;
use relay_proto::{Message, Response, Verb};
use thiserror::Error;

// ============================================================================
// Session Errors (directory operations)
// ============================================================================

/// Errors from the session/room directory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("nickname in use: {0}")]
    NicknameInUse(String),

    /// The session was removed (disconnect) while a command was in flight.
    #[error("no such session: {0}")]
    NoSuchSession(SessionId),
}

// ============================================================================
// Handler Errors (command processing)
// ============================================================================

/// Errors that can occur during command handling.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// Wrong parameter count.
    #[error("invalid syntax for {0}")]
    NeedMoreParams(Verb),

    #[error("nickname in use: {0}")]
    NicknameInUse(String),

    /// PRIVMSG to a room the sender has not joined.
    #[error("not on channel: {0}")]
    NotOnChannel(String),

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("session gone: {0}")]
    SessionGone(SessionId),
}

impl HandlerError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NeedMoreParams(_) => "need_more_params",
            Self::NicknameInUse(_) => "nickname_in_use",
            Self::NotOnChannel(_) => "not_on_channel",
            Self::UnknownCommand(_) => "unknown_command",
            Self::SessionGone(_) => "session_gone",
        }
    }

    /// Convert to the reply sent back to the requester.
    ///
    /// Returns `None` for errors that don't warrant a client-visible reply.
    pub fn to_reply(&self, server_name: &str, nick: &str) -> Option<Message> {
        let msg = match self {
            Self::NeedMoreParams(_) => server_notice(server_name, nick, "Invalid syntax"),
            Self::NicknameInUse(bad_nick) => server_reply(
                server_name,
                Response::ERR_NICKNAMEINUSE,
                vec![
                    nick.to_string(),
                    bad_nick.clone(),
                    "Nickname is already in use".to_string(),
                ],
            ),
            Self::NotOnChannel(_) => server_notice(server_name, nick, "Not part of this channel"),
            Self::UnknownCommand(_) => server_notice(server_name, nick, "Invalid command"),

            // Nobody left to tell
            Self::SessionGone(_) => return None,
        };
        Some(msg)
    }
}

impl From<SessionError> for HandlerError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::NicknameInUse(nick) => Self::NicknameInUse(nick),
            SessionError::NoSuchSession(id) => Self::SessionGone(id),
        }
    }
}

/// Result type for command handlers.
pub type HandlerResult = Result<(), HandlerError>;
