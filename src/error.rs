//! Error types for the fliff LINE resource manager.

use std::path::PathBuf;
use thiserror::Error;

/// Failures of the external configuration service (`firebase functions:config:*`).
///
/// The external command only reports failures as text, so the classification into
/// these kinds happens once, where its output is read (see `functions_config`).
#[derive(Debug, Error)]
pub enum ConfigStoreError {
    #[error("Failed to get configuration: credentials are no longer valid ({0})")]
    AuthenticationExpired(String),

    #[error("Failed to get configuration: {0}")]
    UnknownProject(String),

    #[error("Failed to run `{command}`: {source}")]
    CommandUnavailable {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration output is not valid JSON: {0}")]
    InvalidOutput(String),

    #[error("Failed to run `{command}`: {detail}")]
    WriteFailed { command: String, detail: String },
}

impl ConfigStoreError {
    /// Remediation printed under the error message.
    pub fn hint(&self) -> Option<Vec<String>> {
        match self {
            ConfigStoreError::AuthenticationExpired(_) => Some(vec![
                "Your credentials are no longer valid. Please run `firebase login --reauth`"
                    .to_string(),
            ]),
            ConfigStoreError::UnknownProject(_) => Some(vec![
                "Run `firebase init` to start a project directory in the current folder."
                    .to_string(),
                "Run `firebase use --add` to set active project.".to_string(),
            ]),
            ConfigStoreError::CommandUnavailable { .. } => Some(vec![
                "Install the Firebase CLI (`npm install -g firebase-tools`) or set firebase.command in the fliff config."
                    .to_string(),
            ]),
            ConfigStoreError::InvalidOutput(_) | ConfigStoreError::WriteFailed { .. } => None,
        }
    }
}

/// Local preconditions that must hold before any request is sent.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Configuration group '{0}' not found in Functions configuration. Run `fliff config` first.")]
    MissingConfigGroup(String),

    #[error("Missing '{0}' in Functions configuration")]
    MissingCredential(&'static str),

    #[error("Invalid credential '{0}': {1}")]
    InvalidCredential(&'static str, String),

    #[error("{0}")]
    MissingFlag(String),

    #[error("Failed to retrieve ID using name '{name}' in group '{group}'")]
    UnresolvedName { group: String, name: String },

    #[error("{what} must exist: {path:?}")]
    MissingFile { what: &'static str, path: PathBuf },

    #[error("Unsupported image {0:?}: only .png, .jpg and .jpeg are accepted")]
    UnsupportedImage(PathBuf),

    #[error("Invalid data file {path:?}: {reason}")]
    InvalidData { path: PathBuf, reason: String },

    #[error("Invalid view type '{0}' (must be compact, tall or full)")]
    InvalidViewType(String),

    #[error("Endpoint {endpoint} expects {expected} path parameter(s), got {got}")]
    PathParameters {
        endpoint: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("Endpoint {endpoint} does not accept a {payload} payload")]
    PayloadMismatch {
        endpoint: &'static str,
        payload: &'static str,
    },
}

/// Crate-wide error.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Config(#[from] ConfigStoreError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{operation} failed: {detail}")]
    Transport {
        operation: &'static str,
        status: Option<u16>,
        /// `message` field of the LINE error body, when present.
        message: Option<String>,
        detail: String,
    },

    #[error("Unexpected response from {operation}: {detail}")]
    UnexpectedResponse {
        operation: &'static str,
        detail: String,
    },

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("{step}: {failed}")]
    StepFailed {
        completed: Vec<String>,
        step: String,
        failed: Box<ApiError>,
        hint: Vec<String>,
    },
}

impl ApiError {
    /// Build a transport error from a non-success response.
    pub fn from_status(operation: &'static str, status: u16, body: &[u8]) -> Self {
        let text = String::from_utf8_lossy(body).trim().to_string();
        let message = serde_json::from_slice::<serde_json::Value>(body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from));
        let detail = match (&message, text.is_empty()) {
            (Some(m), _) => format!("status {}: {}", status, m),
            (None, false) => format!("status {}: {}", status, text),
            (None, true) => format!("status {}", status),
        };
        ApiError::Transport {
            operation,
            status: Some(status),
            message,
            detail,
        }
    }

    /// Message of a 404 response carrying a LINE error body. Such results are
    /// reported to the user but are not fatal.
    pub fn not_found_message(&self) -> Option<&str> {
        match self {
            ApiError::Transport {
                status: Some(404),
                message: Some(message),
                ..
            } => Some(message.as_str()),
            _ => None,
        }
    }

    /// Wrap a failure that happened after some steps of a command already succeeded.
    pub fn step_failed(
        completed: Vec<String>,
        step: impl Into<String>,
        failed: ApiError,
        hint: Vec<String>,
    ) -> Self {
        ApiError::StepFailed {
            completed,
            step: step.into(),
            failed: Box::new(failed),
            hint,
        }
    }
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::Settings(err.to_string())
    }
}
