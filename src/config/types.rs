//! Core configuration types and loading.

use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;
use thiserror::Error;

use super::defaults::*;
use super::validation::ValidationError;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {}", format_errors(.0))]
    Invalid(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Server configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Server information.
    #[serde(default)]
    pub server: ServerConfig,
    /// Network listen configuration.
    #[serde(default)]
    pub listen: ListenConfig,
    /// Intake queue and worker pool sizing.
    #[serde(default)]
    pub workers: WorkersConfig,
    /// Per-session buffer limits.
    #[serde(default)]
    pub limits: LimitsConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        super::validate(&config).map_err(ConfigError::Invalid)?;
        Ok(config)
    }
}

/// Server identity configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server name used as the prefix of numeric replies (e.g., "irc.example.com").
    #[serde(default = "default_server_name")]
    pub name: String,
    /// Version string reported in RPL_YOURHOST and RPL_MYINFO.
    #[serde(default = "default_version")]
    pub version: String,
    /// User modes advertised in RPL_MYINFO. Advertised only; never applied.
    #[serde(default = "default_user_modes")]
    pub user_modes: String,
    /// Channel modes advertised in RPL_MYINFO. Advertised only; never applied.
    #[serde(default = "default_channel_modes")]
    pub channel_modes: String,
    /// Keep-alive configuration.
    #[serde(default)]
    pub idle_timeouts: IdleTimeoutsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: default_server_name(),
            version: default_version(),
            user_modes: default_user_modes(),
            channel_modes: default_channel_modes(),
            idle_timeouts: IdleTimeoutsConfig::default(),
        }
    }
}

/// Keep-alive configuration.
///
/// The server sends `PING :<server-name>` to every session on this interval.
/// Probes are best-effort: nothing is disconnected for a missing PONG.
#[derive(Debug, Clone, Deserialize)]
pub struct IdleTimeoutsConfig {
    /// Seconds between keep-alive PINGs (default: 120, 0 disables).
    #[serde(default = "default_ping_interval")]
    pub ping: u64,
}

impl Default for IdleTimeoutsConfig {
    fn default() -> Self {
        Self {
            ping: default_ping_interval(),
        }
    }
}

/// Network listener configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ListenConfig {
    /// Address to bind to (e.g., "0.0.0.0:6667").
    #[serde(default = "default_listen_address")]
    pub address: SocketAddr,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            address: default_listen_address(),
        }
    }
}

/// Worker pool configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkersConfig {
    /// Number of worker tasks executing handlers.
    #[serde(default = "default_worker_count")]
    pub count: usize,
    /// Capacity of the shared intake queue.
    #[serde(default = "default_intake_capacity")]
    pub intake_capacity: usize,
}

impl Default for WorkersConfig {
    fn default() -> Self {
        Self {
            count: default_worker_count(),
            intake_capacity: default_intake_capacity(),
        }
    }
}

/// Per-session limits.
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    /// Outbound lines buffered per session before new lines are dropped.
    #[serde(default = "default_sendq")]
    pub sendq: usize,
    /// Maximum inbound line length in bytes, terminator included.
    #[serde(default = "default_max_line_length")]
    pub max_line_length: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            sendq: default_sendq(),
            max_line_length: default_max_line_length(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.server.name, "irc.example.com");
        assert_eq!(config.listen.address.port(), 6667);
        assert_eq!(config.workers.count, 4);
        assert_eq!(config.limits.max_line_length, 512);
        assert_eq!(config.server.idle_timeouts.ping, 120);
    }

    #[test]
    fn test_parse_overrides() {
        let config = Config::parse(
            r#"
[server]
name = "relay.test"

[server.idle_timeouts]
ping = 0

[listen]
address = "127.0.0.1:7000"

[workers]
count = 2
"#,
        )
        .unwrap();
        assert_eq!(config.server.name, "relay.test");
        assert_eq!(config.server.user_modes, "aio");
        assert_eq!(config.server.idle_timeouts.ping, 0);
        assert_eq!(config.listen.address.to_string(), "127.0.0.1:7000");
        assert_eq!(config.workers.count, 2);
        assert_eq!(config.workers.intake_capacity, 1024);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = Config::parse("[workers]\ncount = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ref errors) if errors.len() == 1));
        assert!(err.to_string().contains("workers.count"));
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            Config::parse("[server"),
            Err(ConfigError::Parse(_))
        ));
    }
}
