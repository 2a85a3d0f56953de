//! Core domain types and configuration for tickersent.

use thiserror::Error;

mod app_config;
mod config;
mod document;
mod ticker;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use document::Document;
pub use ticker::Ticker;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("ticker must not be empty")]
    EmptyTicker,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
