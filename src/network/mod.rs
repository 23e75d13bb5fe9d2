//! Network layer: listener, per-client connections and keep-alive.

mod connection;
mod gateway;
mod keepalive;

pub use connection::Connection;
pub use gateway::Gateway;
pub use keepalive::spawn_keepalive;
