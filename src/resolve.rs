//! Pre-flight validation and name → id resolution.
//!
//! Runs before any request that needs a channel identity, so a client is never built
//! with an undefined credential.

use crate::config::LineApiConfig;
use crate::error::{ApiError, ValidationError};
use crate::functions_config::{ConfigRecord, Credentials, FunctionsConfig, LINE_GROUP};
use crate::line::LineClient;
use tracing::debug;

/// Configuration snapshot plus a client bound to its access token.
pub struct Session {
    pub record: ConfigRecord,
    pub client: LineClient,
}

/// Load the Functions configuration once and build an authenticated client from it.
pub async fn open_session(
    store: &FunctionsConfig,
    settings: &LineApiConfig,
) -> Result<Session, ApiError> {
    let record = store.load().await?;
    let credentials = validate_config(&record)?;
    let token = require_access_token(&credentials)?;
    let client = LineClient::new(Some(token), settings)?;
    Ok(Session { record, client })
}

/// A remote resource addressed either by id or by configured name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Target {
    pub id: Option<String>,
    pub name: Option<String>,
}

impl Target {
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: None,
        }
    }

    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
        }
    }
}

/// The `line` group must exist; yields its credentials.
pub fn validate_config(record: &ConfigRecord) -> Result<Credentials, ValidationError> {
    record
        .credentials()
        .ok_or_else(|| ValidationError::MissingConfigGroup(LINE_GROUP.to_string()))
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.trim().is_empty())
}

pub fn require_access_token(credentials: &Credentials) -> Result<&str, ValidationError> {
    non_empty(credentials.access_token.as_ref())
        .ok_or(ValidationError::MissingCredential("access_token"))
}

/// Channel id and secret, needed to issue a token.
pub fn require_channel_credentials(
    credentials: &Credentials,
) -> Result<(&str, &str), ValidationError> {
    let id = non_empty(credentials.channel_id.as_ref())
        .ok_or(ValidationError::MissingCredential("channel_id"))?;
    let secret = non_empty(credentials.channel_secret.as_ref())
        .ok_or(ValidationError::MissingCredential("channel_secret"))?;
    Ok((id, secret))
}

/// Resolve a target to a remote id. An explicit id wins; a name must map to a string id
/// in `group`, otherwise the command fails. No partial matching.
pub async fn resolve_id(
    store: &FunctionsConfig,
    group: &str,
    target: &Target,
    record: &ConfigRecord,
    command: &str,
) -> Result<String, ApiError> {
    if let Some(id) = &target.id {
        return Ok(id.clone());
    }
    let Some(name) = &target.name else {
        return Err(ValidationError::MissingFlag(format!(
            "Command `{}` requires --id or --name",
            command
        ))
        .into());
    };

    let id = store
        .get_id_by_name(group, name, Some(record))
        .await?
        .ok_or_else(|| ValidationError::UnresolvedName {
            group: group.to_string(),
            name: name.clone(),
        })?;
    debug!(group, name = %name, id = %id, "Resolved name to id");
    Ok(id)
}
