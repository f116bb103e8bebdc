//! Merge rules: defaults, override order, conflict handling.

use crate::config::{DEFAULT_API_BASE_URL, DEFAULT_DATA_API_BASE_URL, DEFAULT_FIREBASE_COMMAND};
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("line.api_base_url", DEFAULT_API_BASE_URL)?
        .set_default("line.data_api_base_url", DEFAULT_DATA_API_BASE_URL)?
        .set_default("firebase.command", DEFAULT_FIREBASE_COMMAND)
}
