//! Per-connection identity.
//!
//! A `Session` only records who a connection is and which rooms it joined.
//! Its output sink lives in [`Matrix`](super::Matrix) keyed by the same id,
//! so identity changes never contend with delivery.

use super::uid::SessionId;
use relay_proto::Prefix;
use std::collections::BTreeSet;

/// Registration progress, derived from which fields are set.
///
/// Handlers never gate on this; it exists for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No nickname yet.
    Unregistered,
    /// Nickname set, USER fields possibly missing.
    Identified,
    /// Nickname, username and hostname all set.
    Registered,
}

/// Identity of one connected client.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: SessionId,
    /// Empty until the first successful NICK.
    pub nick: String,
    pub user: String,
    pub realname: String,
    pub host: String,
    /// Names of joined rooms (without `#`).
    pub rooms: BTreeSet<String>,
}

impl Session {
    pub fn new(id: SessionId) -> Self {
        Self {
            id,
            nick: String::new(),
            user: String::new(),
            realname: String::new(),
            host: String::new(),
            rooms: BTreeSet::new(),
        }
    }

    /// Nickname for numeric replies, `*` before one is set.
    pub fn nick_or_star(&self) -> &str {
        if self.nick.is_empty() { "*" } else { &self.nick }
    }

    /// The `nick!user@host` prefix for messages this session originates.
    pub fn prefix(&self) -> Prefix {
        Prefix::new(self.nick.as_str(), self.user.as_str(), self.host.as_str())
    }

    pub fn state(&self) -> SessionState {
        if self.nick.is_empty() {
            SessionState::Unregistered
        } else if self.user.is_empty() || self.host.is_empty() {
            SessionState::Identified
        } else {
            SessionState::Registered
        }
    }
}
