//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use super::Config;
use thiserror::Error;

/// Validation errors for configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("server.name is required")]
    MissingServerName,
    #[error("server.name must be a single token, got '{0}'")]
    InvalidServerName(String),
    #[error("workers.count must be at least 1")]
    NoWorkers,
    #[error("workers.intake_capacity must be at least 1")]
    NoIntakeCapacity,
    #[error("limits.sendq must be at least 1")]
    NoSendq,
    #[error("limits.max_line_length must be at least {min}, got {got}")]
    LineLengthTooSmall { min: usize, got: usize },
}

/// Shortest line limit that still fits a verb, a parameter and CRLF.
const MIN_LINE_LENGTH: usize = 16;

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let name = &config.server.name;
    if name.is_empty() {
        errors.push(ValidationError::MissingServerName);
    } else if name.contains(char::is_whitespace) || name.starts_with(':') {
        errors.push(ValidationError::InvalidServerName(name.clone()));
    }

    if config.workers.count == 0 {
        errors.push(ValidationError::NoWorkers);
    }
    if config.workers.intake_capacity == 0 {
        errors.push(ValidationError::NoIntakeCapacity);
    }
    if config.limits.sendq == 0 {
        errors.push(ValidationError::NoSendq);
    }
    if config.limits.max_line_length < MIN_LINE_LENGTH {
        errors.push(ValidationError::LineLengthTooSmall {
            min: MIN_LINE_LENGTH,
            got: config.limits.max_line_length,
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_collects_every_error() {
        let mut config = Config::default();
        config.server.name = "bad name".into();
        config.limits.sendq = 0;
        config.limits.max_line_length = 4;

        let errors = validate(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(matches!(errors[0], ValidationError::InvalidServerName(_)));
        assert!(matches!(errors[1], ValidationError::NoSendq));
        assert!(matches!(
            errors[2],
            ValidationError::LineLengthTooSmall { min: 16, got: 4 }
        ));
    }
}
