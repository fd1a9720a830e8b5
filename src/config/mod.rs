//! Configuration loading and management
//!
//! Configuration comes from an optional YAML file, then `HOST`/`PORT`
//! environment variables override the listen address.
//!
//! ```yaml
//! server:
//!   host: 0.0.0.0
//!   port: 5000
//! seed:
//!   dishes:
//!     - id: "90c3d873684bf381dfab29034b5bba73"
//!       name: "Falafel and tahini bagel"
//!       description: "A warm bagel filled with falafel and tahini"
//!       price: 6
//!       image_url: "https://images.example.com/falafel.jpg"
//!   orders: []
//! ```

use crate::core::{ApiResult, Entity};
use crate::entities::{Dish, DishDraft, Order, OrderDraft};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use thiserror::Error;

/// Environment variable naming the YAML configuration file
pub const CONFIG_PATH_ENV: &str = "GRUBDASH_CONFIG";

/// Errors raised while checking a loaded configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid value in configuration
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    /// Two seed records share an id
    #[error("Duplicate {resource} id in seed data: {id}")]
    DuplicateSeedId { resource: &'static str, id: String },
}

/// Listen address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "ServerConfig::default_host")]
    pub host: String,

    #[serde(default = "ServerConfig::default_port")]
    pub port: u16,
}

impl ServerConfig {
    fn default_host() -> String {
        "127.0.0.1".to_string()
    }

    fn default_port() -> u16 {
        5000
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

/// Records loaded into the in-memory stores at startup
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedConfig {
    #[serde(default)]
    pub dishes: Vec<Dish>,

    #[serde(default)]
    pub orders: Vec<Order>,
}

/// Complete application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub seed: SeedConfig,
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file '{}'", path))?;
        Self::from_yaml_str(&content).with_context(|| format!("invalid config file '{}'", path))
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `GRUBDASH_CONFIG` if set, otherwise use defaults, then apply
    /// environment overrides
    pub fn load() -> Result<Self> {
        let config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_yaml_file(&path)?,
            Err(_) => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())
    }

    /// Apply `HOST` and `PORT` overrides read through `lookup`
    pub fn apply_env_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }

        if let Some(port) = lookup("PORT") {
            self.server.port = port.parse().map_err(|_| ConfigError::InvalidValue {
                field: "PORT".to_string(),
                message: format!("'{}' is not a valid port", port),
            })?;
        }

        Ok(self)
    }

    /// The `host:port` string to bind
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Check seed records for empty or duplicate ids, then hold each one to
    /// the same field rules as a create request
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_seed_ids(&self.seed.dishes)?;
        check_seed_ids(&self.seed.orders)?;
        check_seed_records(&self.seed.dishes, DishDraft::validate)?;
        check_seed_records(&self.seed.orders, OrderDraft::validate)?;
        Ok(())
    }
}

fn check_seed_records<T: Entity, D>(
    records: &[T],
    validate: impl Fn(&Value) -> ApiResult<D>,
) -> Result<(), ConfigError> {
    for (index, record) in records.iter().enumerate() {
        let invalid = |message: String| ConfigError::InvalidValue {
            field: format!("seed.{}[{}]", T::resource_name(), index),
            message,
        };

        let payload = serde_json::to_value(record).map_err(|e| invalid(e.to_string()))?;
        validate(&payload).map_err(|e| invalid(e.to_string()))?;
    }

    Ok(())
}

fn check_seed_ids<T: Entity>(records: &[T]) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();

    for record in records {
        if record.id().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: format!("seed.{}", T::resource_name()),
                message: "every record needs a non-empty id".to_string(),
            });
        }
        if !seen.insert(record.id()) {
            return Err(ConfigError::DuplicateSeedId {
                resource: T::resource_name_singular(),
                id: record.id().to_string(),
            });
        }
    }

    Ok(())
}
