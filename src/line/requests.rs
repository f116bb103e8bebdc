//! Typed LINE API operations and their wire types.
//!
//! Thin wrappers over `send`: build the payload, substitute path parameters, and decode the
//! response into the shape that is displayed or persisted.

use super::client::{ApiResponse, LineClient, OAuthClient, Payload};
use super::endpoint::Endpoint;
use crate::error::{ApiError, ValidationError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};

/// LIFF view size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewType {
    Compact,
    Tall,
    Full,
}

impl ViewType {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewType::Compact => "compact",
            ViewType::Tall => "tall",
            ViewType::Full => "full",
        }
    }
}

impl fmt::Display for ViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiffView {
    #[serde(rename = "type")]
    pub view_type: ViewType,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiffFeatures {
    pub ble: bool,
}

/// Body of add / update LIFF view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiffViewDescriptor {
    pub view: LiffView,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<LiffFeatures>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiffApp {
    #[serde(rename = "liffId")]
    pub liff_id: String,
    pub view: LiffView,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<LiffFeatures>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LiffAppList {
    #[serde(default)]
    pub apps: Vec<LiffApp>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AddLiffResponse {
    #[serde(rename = "liffId")]
    pub liff_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichMenuSize {
    pub width: u32,
    pub height: u32,
}

/// Rich menu as listed by the API. Areas are kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RichMenu {
    pub rich_menu_id: String,
    pub size: RichMenuSize,
    #[serde(default)]
    pub selected: bool,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub chat_bar_text: String,
    #[serde(default)]
    pub areas: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RichMenuList {
    #[serde(default)]
    pub richmenus: Vec<RichMenu>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddRichMenuResponse {
    pub rich_menu_id: String,
}

/// Short-lived channel access token issued with client credentials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssuedToken {
    pub access_token: String,
    pub expires_in: i64,
    pub token_type: String,
}

/// Rich menu definition read from a `--data` file; sent verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct RichMenuDefinition {
    pub path: PathBuf,
    pub body: Value,
}

impl RichMenuDefinition {
    pub async fn load(path: &Path) -> Result<Self, ApiError> {
        let raw = tokio::fs::read(path)
            .await
            .map_err(|_| ValidationError::MissingFile {
                what: "Data file",
                path: path.to_path_buf(),
            })?;
        let body: Value =
            serde_json::from_slice(&raw).map_err(|e| ValidationError::InvalidData {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        if !body.is_object() {
            return Err(ValidationError::InvalidData {
                path: path.to_path_buf(),
                reason: "expected a JSON object".to_string(),
            }
            .into());
        }
        Ok(Self {
            path: path.to_path_buf(),
            body,
        })
    }
}

/// Rich menu image bytes with the content type derived from the file extension.
#[derive(Debug, Clone, PartialEq)]
pub struct RichMenuImage {
    pub path: PathBuf,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl RichMenuImage {
    /// `image/png` or `image/jpeg`; anything else is rejected.
    pub fn content_type_for(path: &Path) -> Result<String, ValidationError> {
        match mime_guess::from_path(path).first() {
            Some(mime)
                if mime == mime_guess::mime::IMAGE_PNG || mime == mime_guess::mime::IMAGE_JPEG =>
            {
                Ok(mime.essence_str().to_string())
            }
            _ => Err(ValidationError::UnsupportedImage(path.to_path_buf())),
        }
    }

    pub async fn load(path: &Path) -> Result<Self, ApiError> {
        let content_type = Self::content_type_for(path)?;
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|_| ValidationError::MissingFile {
                what: "Image file",
                path: path.to_path_buf(),
            })?;
        Ok(Self {
            path: path.to_path_buf(),
            content_type,
            bytes,
        })
    }
}

fn to_json<T: Serialize>(value: &T, operation: &'static str) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::UnexpectedResponse {
        operation,
        detail: format!("failed to encode request body: {}", e),
    })
}

impl LineClient {
    pub async fn list_liff_views(&self) -> Result<LiffAppList, ApiError> {
        let endpoint = Endpoint::ListLiffViews;
        self.send(endpoint, &[], Payload::None)
            .await?
            .json(endpoint.label())
    }

    pub async fn add_liff_view(
        &self,
        descriptor: &LiffViewDescriptor,
    ) -> Result<AddLiffResponse, ApiError> {
        let endpoint = Endpoint::AddLiffView;
        let body = to_json(descriptor, endpoint.label())?;
        self.send(endpoint, &[], Payload::Json(body))
            .await?
            .json(endpoint.label())
    }

    pub async fn update_liff_view(
        &self,
        liff_id: &str,
        descriptor: &LiffViewDescriptor,
    ) -> Result<ApiResponse, ApiError> {
        let endpoint = Endpoint::UpdateLiffView;
        let body = to_json(descriptor, endpoint.label())?;
        self.send(endpoint, &[liff_id], Payload::Json(body)).await
    }

    pub async fn delete_liff_view(&self, liff_id: &str) -> Result<ApiResponse, ApiError> {
        self.send(Endpoint::DeleteLiffView, &[liff_id], Payload::None)
            .await
    }

    pub async fn list_rich_menus(&self) -> Result<RichMenuList, ApiError> {
        let endpoint = Endpoint::ListRichMenu;
        self.send(endpoint, &[], Payload::None)
            .await?
            .json(endpoint.label())
    }

    pub async fn add_rich_menu(
        &self,
        definition: &RichMenuDefinition,
    ) -> Result<AddRichMenuResponse, ApiError> {
        let endpoint = Endpoint::AddRichMenu;
        self.send(endpoint, &[], Payload::Json(definition.body.clone()))
            .await?
            .json(endpoint.label())
    }

    pub async fn delete_rich_menu(&self, rich_menu_id: &str) -> Result<ApiResponse, ApiError> {
        self.send(Endpoint::DeleteRichMenu, &[rich_menu_id], Payload::None)
            .await
    }

    pub async fn set_default_rich_menu(
        &self,
        rich_menu_id: &str,
    ) -> Result<ApiResponse, ApiError> {
        self.send(Endpoint::SetDefaultRichMenu, &[rich_menu_id], Payload::None)
            .await
    }

    pub async fn link_rich_menu(
        &self,
        user_id: &str,
        rich_menu_id: &str,
    ) -> Result<ApiResponse, ApiError> {
        self.send(
            Endpoint::LinkUserRichMenu,
            &[user_id, rich_menu_id],
            Payload::None,
        )
        .await
    }

    pub async fn unlink_rich_menu(&self, user_id: &str) -> Result<ApiResponse, ApiError> {
        self.send(Endpoint::UnlinkUserRichMenu, &[user_id], Payload::None)
            .await
    }

    pub async fn upload_rich_menu_image(
        &self,
        rich_menu_id: &str,
        image: &RichMenuImage,
    ) -> Result<ApiResponse, ApiError> {
        self.send(
            Endpoint::UploadRichMenuImage,
            &[rich_menu_id],
            Payload::Binary {
                bytes: image.bytes.clone(),
                content_type: image.content_type.clone(),
            },
        )
        .await
    }
}

impl OAuthClient {
    pub async fn issue_token(
        &self,
        channel_id: &str,
        channel_secret: &str,
    ) -> Result<IssuedToken, ApiError> {
        let endpoint = Endpoint::IssueToken;
        let form = vec![
            ("grant_type".to_string(), "client_credentials".to_string()),
            ("client_id".to_string(), channel_id.to_string()),
            ("client_secret".to_string(), channel_secret.to_string()),
        ];
        self.send(endpoint, Payload::Form(form))
            .await?
            .json(endpoint.label())
    }

    pub async fn revoke_token(&self, access_token: &str) -> Result<ApiResponse, ApiError> {
        let form = vec![("access_token".to_string(), access_token.to_string())];
        self.send(Endpoint::RevokeToken, Payload::Form(form)).await
    }
}
