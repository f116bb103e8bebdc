//! Configuration System
//!
//! Local tool settings: where the LINE API lives, which command manages Firebase Functions
//! configuration, and how to log. Layered with the `config` crate (defaults, global file,
//! workspace file, environment). Channel credentials are NOT stored here; they live in the
//! Firebase Functions configuration (see `functions_config`).

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Serializes tests that read or write `FLIFF_*` environment variables.
#[cfg(test)]
pub(crate) fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

pub const DEFAULT_API_BASE_URL: &str = "https://api.line.me";
pub const DEFAULT_DATA_API_BASE_URL: &str = "https://api-data.line.me";
pub const DEFAULT_FIREBASE_COMMAND: &str = "firebase";

/// Root settings structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FliffConfig {
    /// LINE API endpoints
    #[serde(default)]
    pub line: LineApiConfig,

    /// External configuration service
    #[serde(default)]
    pub firebase: FirebaseConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// LINE API base URLs. Request paths are appended verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineApiConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Host serving binary content (rich menu images)
    #[serde(default = "default_data_api_base_url")]
    pub data_api_base_url: String,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_data_api_base_url() -> String {
    DEFAULT_DATA_API_BASE_URL.to_string()
}

impl Default for LineApiConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            data_api_base_url: default_data_api_base_url(),
        }
    }
}

/// Firebase CLI invocation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirebaseConfig {
    /// Program used for `functions:config:*` (default: firebase)
    #[serde(default = "default_firebase_command")]
    pub command: String,

    /// Optional `--project` passed to every invocation
    #[serde(default)]
    pub project: Option<String>,
}

fn default_firebase_command() -> String {
    DEFAULT_FIREBASE_COMMAND.to_string()
}

impl Default for FirebaseConfig {
    fn default() -> Self {
        Self {
            command: default_firebase_command(),
            project: None,
        }
    }
}

impl FliffConfig {
    /// Validate the settings; returns every problem found.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        for (key, value) in [
            ("line.api_base_url", &self.line.api_base_url),
            ("line.data_api_base_url", &self.line.data_api_base_url),
        ] {
            match url::Url::parse(value) {
                Ok(parsed) if parsed.scheme() == "http" || parsed.scheme() == "https" => {}
                Ok(parsed) => errors.push(format!(
                    "{}: unsupported scheme '{}'",
                    key,
                    parsed.scheme()
                )),
                Err(e) => errors.push(format!("{}: {}", key, e)),
            }
        }

        if self.firebase.command.trim().is_empty() {
            errors.push("firebase.command cannot be empty".to_string());
        }
        if let Some(project) = &self.firebase.project {
            if project.trim().is_empty() {
                errors.push("firebase.project cannot be empty when set".to_string());
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
