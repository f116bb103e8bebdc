//! HTTP clients for the LINE API.

use super::endpoint::{Endpoint, Host, PayloadKind};
use crate::config::LineApiConfig;
use crate::error::{ApiError, ValidationError};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Request body for one call.
#[derive(Debug, Clone)]
pub enum Payload {
    None,
    Json(serde_json::Value),
    Form(Vec<(String, String)>),
    Binary { bytes: Vec<u8>, content_type: String },
}

impl Payload {
    pub fn kind(&self) -> PayloadKind {
        match self {
            Payload::None => PayloadKind::None,
            Payload::Json(_) => PayloadKind::Json,
            Payload::Form(_) => PayloadKind::Form,
            Payload::Binary { .. } => PayloadKind::Binary,
        }
    }
}

/// Raw upstream response of a successful call.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ApiResponse {
    /// Decode the body into the shape the caller expects.
    pub fn json<T: DeserializeOwned>(&self, operation: &'static str) -> Result<T, ApiError> {
        serde_json::from_slice(&self.body).map_err(|e| ApiError::UnexpectedResponse {
            operation,
            detail: e.to_string(),
        })
    }
}

/// Client bound to a channel access token.
///
/// Every request carries `Authorization: Bearer <token>` and `Content-Type: application/json`
/// (binary uploads override the content type). No base URL is baked in: each call resolves
/// the endpoint's host from `LineApiConfig`.
pub struct LineClient {
    http: Client,
    settings: LineApiConfig,
}

impl LineClient {
    /// Fails without touching the network when the token is absent or empty.
    pub fn new(access_token: Option<&str>, settings: &LineApiConfig) -> Result<Self, ApiError> {
        let token = access_token
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(ValidationError::MissingCredential("access_token"))?;

        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|e| ValidationError::InvalidCredential("access_token", e.to_string()))?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::Settings(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            settings: settings.clone(),
        })
    }

    /// Issue exactly one call for `endpoint` and return the raw response.
    pub async fn send(
        &self,
        endpoint: Endpoint,
        params: &[&str],
        payload: Payload,
    ) -> Result<ApiResponse, ApiError> {
        dispatch(&self.http, &self.settings, endpoint, params, payload).await
    }
}

/// Unauthenticated client for the OAuth token endpoints.
pub struct OAuthClient {
    http: Client,
    settings: LineApiConfig,
}

impl OAuthClient {
    pub fn new(settings: &LineApiConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .build()
            .map_err(|e| ApiError::Settings(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self {
            http,
            settings: settings.clone(),
        })
    }

    pub async fn send(
        &self,
        endpoint: Endpoint,
        payload: Payload,
    ) -> Result<ApiResponse, ApiError> {
        if endpoint.requires_bearer() {
            return Err(ValidationError::MissingCredential("access_token").into());
        }
        dispatch(&self.http, &self.settings, endpoint, &[], payload).await
    }
}

fn base_url(settings: &LineApiConfig, host: Host) -> &str {
    let base = match host {
        Host::Api => &settings.api_base_url,
        Host::Data => &settings.data_api_base_url,
    };
    base.trim_end_matches('/')
}

async fn dispatch(
    http: &Client,
    settings: &LineApiConfig,
    endpoint: Endpoint,
    params: &[&str],
    payload: Payload,
) -> Result<ApiResponse, ApiError> {
    if payload.kind() != endpoint.payload() {
        return Err(ValidationError::PayloadMismatch {
            endpoint: endpoint.label(),
            payload: payload.kind().as_str(),
        }
        .into());
    }

    let url = format!(
        "{}{}",
        base_url(settings, endpoint.host()),
        endpoint.render_path(params)?
    );
    let method = endpoint.method();
    debug!(method = %method, url = %url, "Sending LINE API request");

    let request = http.request(method, &url);
    let request = match payload {
        Payload::None => request,
        Payload::Json(body) => request.json(&body),
        Payload::Form(fields) => request.form(&fields),
        Payload::Binary {
            bytes,
            content_type,
        } => request.header(CONTENT_TYPE, content_type).body(bytes),
    };

    let response = request.send().await.map_err(|e| ApiError::Transport {
        operation: endpoint.label(),
        status: None,
        message: None,
        detail: e.to_string(),
    })?;

    let status = response.status().as_u16();
    let body = response
        .bytes()
        .await
        .map_err(|e| ApiError::Transport {
            operation: endpoint.label(),
            status: Some(status),
            message: None,
            detail: format!("failed to read response body: {}", e),
        })?
        .to_vec();
    debug!(status, bytes = body.len(), "LINE API response");

    if !(200..300).contains(&status) {
        return Err(ApiError::from_status(endpoint.label(), status, &body));
    }
    Ok(ApiResponse { status, body })
}
