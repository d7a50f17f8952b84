//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid database URL format")]
    InvalidDatabaseUrl,

    #[error("Pool min_connections exceeds max_connections")]
    InvalidPoolSize,

    #[error("Pool size exceeds maximum allowed (20)")]
    PoolSizeTooLarge,

    #[error("Invalid default timezone: {0}")]
    InvalidTimezone(String),

    #[error("Fallback offset must be a multiple of 15 minutes between -720 and 840, got {0}")]
    InvalidFallbackOffset(i32),

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),
}
