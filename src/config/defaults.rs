//! Default value functions for configuration.
//!
//! Separated into its own module for clarity and reuse.

use std::net::SocketAddr;

// =============================================================================
// Server Defaults
// =============================================================================

pub fn default_server_name() -> String {
    "irc.example.com".to_string()
}

pub fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

pub fn default_user_modes() -> String {
    "aio".to_string()
}

pub fn default_channel_modes() -> String {
    "beIikntPpTl".to_string()
}

pub fn default_ping_interval() -> u64 {
    120
}

// =============================================================================
// Listener Defaults
// =============================================================================

pub fn default_listen_address() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 6667))
}

// =============================================================================
// Worker Pool Defaults
// =============================================================================

pub fn default_worker_count() -> usize {
    4
}

pub fn default_intake_capacity() -> usize {
    1024
}

// =============================================================================
// Limits Defaults
// =============================================================================

pub fn default_sendq() -> usize {
    256
}

pub fn default_max_line_length() -> usize {
    512
}
