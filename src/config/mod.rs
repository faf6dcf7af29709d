pub mod app;
pub mod auth;

use thiserror::Error;

pub use app::{AppConfig, AppMetadata, DatabaseConfig, ServerConfig};
pub use auth::{Argon2Config, AuthConfig};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Source(#[from] config::ConfigError),
    #[error("{0}")]
    Validation(String),
}

/// Configuration sections validate themselves after deserialization.
pub trait Validate {
    fn validate(&self) -> Result<(), ConfigError>;
}

/// Load the application configuration from files and environment variables
pub fn load() -> Result<AppConfig, ConfigError> {
    app::load_config()
}
