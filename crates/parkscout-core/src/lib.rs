use thiserror::Error;

mod app_config;
mod cache;
mod config;
mod site;

pub use app_config::AppConfig;
pub use cache::{CacheStore, CacheValue, SnapshotError, SnapshotStatus, STATE_INDEX_KEY};
pub use config::{load_app_config, load_app_config_from_env};
pub use site::{Site, StateIndex};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
