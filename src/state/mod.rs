//! State management module.
//!
//! Contains the Matrix (shared server state) and the directory of sessions
//! and rooms it guards.

mod directory;
mod matrix;
mod outbox;
mod room;
mod session;
mod uid;

pub use directory::Directory;
pub use matrix::{Matrix, ServerInfo, Sink};
pub use outbox::{Delivery, Outbox};
pub use room::Room;
pub use session::{Session, SessionState};
pub use uid::{SessionId, SessionIdGenerator};
