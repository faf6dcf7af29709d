use serde::{Deserialize, Serialize};

use super::{ConfigError, Validate};

/// Authentication configuration
///
/// Constructed once at process start and handed to the hasher and token
/// issuer; never a module-level mutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Token lifetime in seconds
    #[serde(default = "default_token_lifetime")]
    pub token_lifetime: u64,
    /// Token signing secret
    ///
    /// The default is only acceptable for this demonstration service; a
    /// real deployment must source the secret from an external store.
    #[serde(default = "default_secret")]
    pub secret: String,
    /// Argon2 configuration
    #[serde(default = "Argon2Config::default")]
    pub argon2: Argon2Config,
}

/// Argon2 password hashing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Argon2Config {
    /// Memory cost in KB (64MB = 65536 KB)
    #[serde(default = "default_argon2_memory_cost")]
    pub memory_cost: u32,
    /// Time cost (iterations)
    #[serde(default = "default_argon2_time_cost")]
    pub time_cost: u32,
    /// Parallelism (number of threads)
    #[serde(default = "default_argon2_parallelism")]
    pub parallelism: u32,
    /// Hash length in bytes
    #[serde(default = "default_argon2_hash_length")]
    pub hash_length: u32,
    /// Salt length in bytes
    #[serde(default = "default_argon2_salt_length")]
    pub salt_length: u32,
}

fn default_token_lifetime() -> u64 {
    3600 // 1 hour
}

fn default_secret() -> String {
    "your-secret-key-change-in-production".to_string()
}

fn default_argon2_memory_cost() -> u32 {
    65536 // 64 MB
}

fn default_argon2_time_cost() -> u32 {
    3
}

fn default_argon2_parallelism() -> u32 {
    4
}

fn default_argon2_hash_length() -> u32 {
    32
}

fn default_argon2_salt_length() -> u32 {
    16
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_lifetime: default_token_lifetime(),
            secret: default_secret(),
            argon2: Argon2Config::default(),
        }
    }
}

impl Default for Argon2Config {
    fn default() -> Self {
        Self {
            memory_cost: default_argon2_memory_cost(),
            time_cost: default_argon2_time_cost(),
            parallelism: default_argon2_parallelism(),
            hash_length: default_argon2_hash_length(),
            salt_length: default_argon2_salt_length(),
        }
    }
}

impl Validate for AuthConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.token_lifetime == 0 {
            return Err(ConfigError::Validation(
                "auth.token_lifetime must be > 0".to_string(),
            ));
        }
        if self.secret.is_empty() {
            return Err(ConfigError::Validation(
                "auth.secret cannot be empty".to_string(),
            ));
        }
        self.argon2.validate()?;
        Ok(())
    }
}

impl Validate for Argon2Config {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.memory_cost == 0 {
            return Err(ConfigError::Validation(
                "auth.argon2.memory_cost must be > 0".to_string(),
            ));
        }
        if self.time_cost == 0 {
            return Err(ConfigError::Validation(
                "auth.argon2.time_cost must be > 0".to_string(),
            ));
        }
        if self.parallelism == 0 {
            return Err(ConfigError::Validation(
                "auth.argon2.parallelism must be > 0".to_string(),
            ));
        }
        if self.hash_length == 0 {
            return Err(ConfigError::Validation(
                "auth.argon2.hash_length must be > 0".to_string(),
            ));
        }
        if self.salt_length == 0 {
            return Err(ConfigError::Validation(
                "auth.argon2.salt_length must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}
