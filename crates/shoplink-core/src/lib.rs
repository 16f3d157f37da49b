pub mod app_config;
pub mod config;
pub mod records;

use thiserror::Error;

pub use app_config::{AppConfig, HttpConfig};
pub use config::{load_app_config, load_app_config_from_env, load_http_config};
pub use records::{CollectionEntry, Item, Variant};

/// Upper bound on fields a single chat card can carry.
pub const MAX_CARD_FIELDS: usize = 25;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
