//! Rooms (channels) and their membership.

use super::uid::SessionId;

/// A named room.
///
/// Members are kept in join order; WHO marks the first one as operator.
#[derive(Debug, Clone)]
pub struct Room {
    /// Room name without the leading `#`.
    pub name: String,
    members: Vec<SessionId>,
}

impl Room {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Add a member. Returns false if it was already present.
    pub fn add(&mut self, id: SessionId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.members.push(id);
        true
    }

    /// Remove a member. Returns false if it was not present.
    pub fn remove(&mut self, id: SessionId) -> bool {
        let before = self.members.len();
        self.members.retain(|member| *member != id);
        self.members.len() != before
    }

    pub fn contains(&self, id: SessionId) -> bool {
        self.members.contains(&id)
    }

    pub fn members(&self) -> &[SessionId] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// The `#name` form used on the wire.
    pub fn wire_name(&self) -> String {
        format!("#{}", self.name)
    }
}
