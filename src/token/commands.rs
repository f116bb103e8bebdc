use crate::config::LineApiConfig;
use crate::error::{ApiError, ValidationError};
use crate::functions_config::{FunctionsConfig, ACCESS_TOKEN_KEY, LINE_GROUP};
use crate::line::{Endpoint, IssuedToken, OAuthClient};
use crate::resolve::{require_channel_credentials, validate_config};
use chrono::{DateTime, Duration, Utc};
use tracing::info;

pub struct TokenCommandService;

#[derive(Debug, Clone)]
pub struct TokenIssueResult {
    pub token: IssuedToken,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    /// Stored as `line.access_token`.
    pub saved: bool,
}

#[derive(Debug, Clone)]
pub struct TokenRevokeResult {
    pub revoked: bool,
}

/// `issued_at + expires_in`; a negative or unrepresentable lifetime is a malformed response.
fn expiry(issued_at: DateTime<Utc>, expires_in: i64) -> Result<DateTime<Utc>, ApiError> {
    let unexpected = |detail: String| ApiError::UnexpectedResponse {
        operation: Endpoint::IssueToken.label(),
        detail,
    };
    if expires_in < 0 {
        return Err(unexpected(format!("negative expires_in {}", expires_in)));
    }
    Duration::try_seconds(expires_in)
        .and_then(|lifetime| issued_at.checked_add_signed(lifetime))
        .ok_or_else(|| unexpected(format!("expires_in {} is out of range", expires_in)))
}

impl TokenCommandService {
    /// Issue a short-lived token from the configured channel id and secret.
    pub async fn run_issue(
        store: &FunctionsConfig,
        settings: &LineApiConfig,
        save: bool,
    ) -> Result<TokenIssueResult, ApiError> {
        let record = store.load().await?;
        let credentials = validate_config(&record)?;
        let (channel_id, channel_secret) = require_channel_credentials(&credentials)?;

        let client = OAuthClient::new(settings)?;
        let token = client.issue_token(channel_id, channel_secret).await?;
        let issued_at = Utc::now();
        let expires_at = expiry(issued_at, token.expires_in)?;
        info!(channel_id, expires_in = token.expires_in, "Channel access token issued");

        if save {
            let key = format!("{}.{}", LINE_GROUP, ACCESS_TOKEN_KEY);
            if let Err(e) = store.set(&key, &token.access_token).await {
                return Err(ApiError::step_failed(
                    vec![format!(
                        "Issued channel access token (expires {})",
                        expires_at.to_rfc3339()
                    )],
                    "Failed to save the access token in Functions configuration",
                    e.into(),
                    vec![
                        "Try re-run with the following command".to_string(),
                        store.describe_set(&key, &token.access_token),
                    ],
                ));
            }
        }

        Ok(TokenIssueResult {
            token,
            issued_at,
            expires_at,
            saved: save,
        })
    }

    /// Revoke a token. Nothing is written to the Functions configuration.
    pub async fn run_revoke(
        settings: &LineApiConfig,
        access_token: &str,
    ) -> Result<TokenRevokeResult, ApiError> {
        if access_token.trim().is_empty() {
            return Err(ValidationError::MissingFlag(
                "Command `fliff token --revoke` requires the token to revoke".to_string(),
            )
            .into());
        }
        let client = OAuthClient::new(settings)?;
        client.revoke_token(access_token).await?;
        info!("Channel access token revoked");
        Ok(TokenRevokeResult { revoked: true })
    }
}
