//! Configuration loading and management.
//!
//! This module is split into logical submodules:
//! - [`types`]: Config struct definitions (Config, ServerConfig, ListenConfig, ...)
//! - [`defaults`]: serde default value functions
//! - [`validation`]: startup checks that reject unusable values

mod defaults;
mod types;
mod validation;

pub use types::{Config, LimitsConfig, WorkersConfig};
pub use validation::validate;
