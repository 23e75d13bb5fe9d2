//! The session/room directory guarded by the Matrix lock.
//!
//! Session -> rooms and room -> members are two plain indexes; every method
//! that touches one keeps the other consistent, so callers holding the lock
//! never see a half-applied join, part or removal.

use super::room::Room;
use super::session::Session;
use super::uid::SessionId;
use crate::error::SessionError;
use std::collections::HashMap;

/// All sessions and rooms known to the server.
#[derive(Debug, Default)]
pub struct Directory {
    sessions: HashMap<SessionId, Session>,
    /// Nick -> id, exact (case-sensitive) match.
    nicks: HashMap<String, SessionId>,
    /// Room name (without `#`) -> room.
    rooms: HashMap<String, Room>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Sessions
    // ------------------------------------------------------------------

    /// Add a session with empty identity fields.
    pub fn register(&mut self, id: SessionId) {
        self.sessions.insert(id, Session::new(id));
    }

    pub fn session(&self, id: SessionId) -> Option<&Session> {
        self.sessions.get(&id)
    }

    /// Like [`session`](Self::session) but for callers that must have it.
    pub fn require(&self, id: SessionId) -> Result<&Session, SessionError> {
        self.sessions
            .get(&id)
            .ok_or(SessionError::NoSuchSession(id))
    }

    /// Assign a nickname if no other session holds it.
    ///
    /// Re-taking one's own nickname succeeds.
    pub fn set_nickname(&mut self, id: SessionId, nick: &str) -> Result<(), SessionError> {
        if let Some(holder) = self.nicks.get(nick)
            && *holder != id
        {
            return Err(SessionError::NicknameInUse(nick.to_string()));
        }

        let session = self
            .sessions
            .get_mut(&id)
            .ok_or(SessionError::NoSuchSession(id))?;
        if !session.nick.is_empty() {
            self.nicks.remove(&session.nick);
        }
        session.nick = nick.to_string();
        self.nicks.insert(session.nick.clone(), id);
        Ok(())
    }

    /// Record USER fields, overwriting earlier values.
    pub fn set_identity(
        &mut self,
        id: SessionId,
        user: &str,
        realname: &str,
        host: &str,
    ) -> Result<(), SessionError> {
        let session = self
            .sessions
            .get_mut(&id)
            .ok_or(SessionError::NoSuchSession(id))?;
        session.user = user.to_string();
        session.realname = realname.to_string();
        session.host = host.to_string();
        Ok(())
    }

    pub fn find_by_nickname(&self, nick: &str) -> Option<&Session> {
        self.nicks.get(nick).and_then(|id| self.sessions.get(id))
    }

    /// Remove a session from the directory and from every room it joined.
    pub fn remove(&mut self, id: SessionId) -> Option<Session> {
        let session = self.sessions.remove(&id)?;
        if !session.nick.is_empty() {
            self.nicks.remove(&session.nick);
        }
        for name in &session.rooms {
            if let Some(room) = self.rooms.get_mut(name) {
                room.remove(id);
            }
        }
        Some(session)
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    // ------------------------------------------------------------------
    // Rooms
    // ------------------------------------------------------------------

    pub fn find_room(&self, name: &str) -> Option<&Room> {
        self.rooms.get(name)
    }

    /// Return the room, creating an empty one first if needed.
    ///
    /// Rooms are never removed, even once empty.
    pub fn get_or_create_room(&mut self, name: &str) -> &mut Room {
        self.rooms
            .entry(name.to_string())
            .or_insert_with(|| Room::new(name))
    }

    /// Add a session to a room, creating the room on first use.
    ///
    /// Returns false if the session was already a member.
    pub fn join(&mut self, name: &str, id: SessionId) -> Result<bool, SessionError> {
        let session = self
            .sessions
            .get_mut(&id)
            .ok_or(SessionError::NoSuchSession(id))?;
        session.rooms.insert(name.to_string());
        Ok(self.get_or_create_room(name).add(id))
    }

    /// Remove a session from a room. No-op if either is unknown.
    pub fn part(&mut self, name: &str, id: SessionId) -> bool {
        if let Some(session) = self.sessions.get_mut(&id) {
            session.rooms.remove(name);
        }
        self.rooms
            .get_mut(name)
            .is_some_and(|room| room.remove(id))
    }

    /// Sessions in a room, in join order.
    pub fn members<'a>(&'a self, room: &'a Room) -> impl Iterator<Item = &'a Session> + 'a {
        room.members()
            .iter()
            .filter_map(|id| self.sessions.get(id))
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }
}
