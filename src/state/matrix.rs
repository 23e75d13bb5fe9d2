//! The Matrix - Central shared state for the relay.
//!
//! Identity and membership live in one [`Directory`] behind a single
//! `parking_lot::Mutex`. Output sinks live beside it in a `DashMap` so that
//! delivery never needs the directory lock: handlers compute recipients while
//! locked, and [`Matrix::deliver`] writes after the guard is dropped.

use super::directory::Directory;
use super::outbox::Outbox;
use super::uid::{SessionId, SessionIdGenerator};
use crate::config::Config;
use dashmap::DashMap;
use parking_lot::{Mutex, MutexGuard};
use relay_proto::{Command, Message};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tracing::{debug, warn};

/// Write half of a session: bounded queue drained by its connection's writer.
pub type Sink = mpsc::Sender<Arc<Message>>;

/// This server's identity, fixed at startup.
#[derive(Debug, Clone)]
pub struct ServerInfo {
    pub name: String,
    pub version: String,
    pub user_modes: String,
    pub channel_modes: String,
    /// Startup time, reported in RPL_CREATED.
    pub created: chrono::DateTime<chrono::Utc>,
}

impl ServerInfo {
    pub fn from_config(config: &Config) -> Self {
        Self {
            name: config.server.name.clone(),
            version: config.server.version.clone(),
            user_modes: config.server.user_modes.clone(),
            channel_modes: config.server.channel_modes.clone(),
            created: chrono::Utc::now(),
        }
    }
}

/// Central shared state container.
///
/// Shared as `Arc<Matrix>` between the gateway, connections and workers.
pub struct Matrix {
    directory: Mutex<Directory>,

    /// SessionId -> output sink, for routing.
    senders: DashMap<SessionId, Sink>,

    pub server_info: ServerInfo,

    /// Id generator for new connections.
    pub uid_gen: SessionIdGenerator,
}

impl Matrix {
    pub fn new(config: &Config) -> Self {
        Self {
            directory: Mutex::new(Directory::new()),
            senders: DashMap::new(),
            server_info: ServerInfo::from_config(config),
            uid_gen: SessionIdGenerator::new(),
        }
    }

    /// Take the directory lock.
    ///
    /// Never hold the guard across an `.await` or a sink write.
    pub fn lock(&self) -> MutexGuard<'_, Directory> {
        self.directory.lock()
    }

    /// Allocate an id and add an anonymous session for it.
    pub fn register(&self) -> SessionId {
        let id = self.uid_gen.next();
        self.directory.lock().register(id);
        id
    }

    pub fn attach_sink(&self, id: SessionId, sink: Sink) {
        self.senders.insert(id, sink);
    }

    /// Remove a session from every index and drop its sink.
    ///
    /// Idempotent; returns false if the session was already gone.
    pub fn disconnect(&self, id: SessionId) -> bool {
        let (removed, remaining) = {
            let mut dir = self.directory.lock();
            let removed = dir.remove(id);
            (removed, (dir.session_count(), dir.room_count()))
        };
        self.senders.remove(&id);
        match removed {
            Some(session) => {
                debug!(
                    session = %id,
                    nick = %session.nick,
                    joined = session.rooms.len(),
                    sessions = remaining.0,
                    rooms = remaining.1,
                    "Session removed"
                );
                true
            }
            None => false,
        }
    }

    /// Write every delivery to its target's sink.
    ///
    /// Never blocks. Lines for sessions that are gone or not reading are
    /// dropped.
    pub fn deliver(&self, outbox: Outbox) {
        for delivery in outbox {
            self.send_to(delivery.to, delivery.message);
        }
    }

    /// Queue one line for one session. Returns false if it was dropped.
    pub fn send_to(&self, id: SessionId, message: Arc<Message>) -> bool {
        let Some(sender) = self.senders.get(&id) else {
            debug!(session = %id, "Dropping line for unknown session");
            return false;
        };
        match sender.try_send(message) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                warn!(session = %id, "SendQ full, dropping line");
                false
            }
            Err(TrySendError::Closed(_)) => {
                debug!(session = %id, "Sink closed, dropping line");
                false
            }
        }
    }

    /// Send a keep-alive `PING :<server>` to every session.
    ///
    /// Returns the number of sinks that accepted it.
    pub fn ping_all(&self) -> usize {
        let ping = Arc::new(Message::from(Command::PING(self.server_info.name.clone())));
        self.senders
            .iter()
            .filter(|entry| entry.value().try_send(Arc::clone(&ping)).is_ok())
            .count()
    }

    pub fn session_count(&self) -> usize {
        self.senders.len()
    }
}
