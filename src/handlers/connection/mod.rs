//! Connection registration handlers (NICK, USER).
//!
//! QUIT, PING and PONG never reach the registry; the transport handles them.

mod nick;
mod user;
mod welcome;

pub use nick::NickHandler;
pub use user::UserHandler;
