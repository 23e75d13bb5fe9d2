//! Command handlers.
//!
//! This module contains the Handler trait and the command registry that
//! dispatches parsed client lines to the handler for their verb.
//!
//! Handlers are synchronous: each takes the directory lock once, computes
//! its recipients, releases the lock and returns an [`Outbox`] for the
//! worker to deliver.
//!
//! [`Outbox`]: crate::state::Outbox

mod channel;
mod connection;
mod core;
mod helpers;
mod messaging;
mod user_query;

#[cfg(test)]
pub(crate) mod testing;

pub use self::core::{Context, Handler, Registry};
pub use helpers::{server_notice, server_reply, trailing_text};

pub use channel::{JoinHandler, PartHandler};
pub use connection::{NickHandler, UserHandler};
pub use messaging::PrivmsgHandler;
pub use user_query::WhoHandler;
