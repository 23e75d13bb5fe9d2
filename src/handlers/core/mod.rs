//! Core handler infrastructure.
//!
//! The [`Registry`] maps each supported verb to its [`Handler`] and turns
//! handler errors into replies. Handlers see a [`Context`] that collects
//! their output.

pub mod context;
pub mod registry;

pub use context::{Context, Handler};
pub use registry::Registry;
