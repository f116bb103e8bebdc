//! LINE API endpoint descriptors.
//!
//! Every remote operation is one `Endpoint` variant fixing method, host, path template and
//! payload shape. Only path parameters and the payload vary per call.

use crate::error::ValidationError;
use reqwest::Method;

/// Which configured base URL an endpoint lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Host {
    /// `line.api_base_url` (https://api.line.me)
    Api,
    /// `line.data_api_base_url` (https://api-data.line.me)
    Data,
}

/// Request body shape accepted by an endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    None,
    Json,
    Form,
    Binary,
}

impl PayloadKind {
    pub fn as_str(self) -> &'static str {
        match self {
            PayloadKind::None => "empty",
            PayloadKind::Json => "JSON",
            PayloadKind::Form => "form",
            PayloadKind::Binary => "binary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    ListLiffViews,
    AddLiffView,
    UpdateLiffView,
    DeleteLiffView,
    IssueToken,
    RevokeToken,
    ListRichMenu,
    AddRichMenu,
    DeleteRichMenu,
    SetDefaultRichMenu,
    LinkUserRichMenu,
    UnlinkUserRichMenu,
    UploadRichMenuImage,
}

impl Endpoint {
    pub const ALL: [Endpoint; 13] = [
        Endpoint::ListLiffViews,
        Endpoint::AddLiffView,
        Endpoint::UpdateLiffView,
        Endpoint::DeleteLiffView,
        Endpoint::IssueToken,
        Endpoint::RevokeToken,
        Endpoint::ListRichMenu,
        Endpoint::AddRichMenu,
        Endpoint::DeleteRichMenu,
        Endpoint::SetDefaultRichMenu,
        Endpoint::LinkUserRichMenu,
        Endpoint::UnlinkUserRichMenu,
        Endpoint::UploadRichMenuImage,
    ];

    pub fn method(self) -> Method {
        match self {
            Endpoint::ListLiffViews | Endpoint::ListRichMenu => Method::GET,
            Endpoint::UpdateLiffView => Method::PUT,
            Endpoint::DeleteLiffView | Endpoint::DeleteRichMenu | Endpoint::UnlinkUserRichMenu => {
                Method::DELETE
            }
            Endpoint::AddLiffView
            | Endpoint::IssueToken
            | Endpoint::RevokeToken
            | Endpoint::AddRichMenu
            | Endpoint::SetDefaultRichMenu
            | Endpoint::LinkUserRichMenu
            | Endpoint::UploadRichMenuImage => Method::POST,
        }
    }

    /// Path template; `{..}` placeholders are filled in order by `render_path`.
    pub fn path_template(self) -> &'static str {
        match self {
            Endpoint::ListLiffViews | Endpoint::AddLiffView => "/liff/v1/apps",
            Endpoint::UpdateLiffView => "/liff/v1/apps/{liffId}/view",
            Endpoint::DeleteLiffView => "/liff/v1/apps/{liffId}",
            Endpoint::IssueToken => "/v2/oauth/accessToken",
            Endpoint::RevokeToken => "/v2/oauth/revoke",
            Endpoint::ListRichMenu => "/v2/bot/richmenu/list",
            Endpoint::AddRichMenu => "/v2/bot/richmenu",
            Endpoint::DeleteRichMenu => "/v2/bot/richmenu/{richMenuId}",
            Endpoint::SetDefaultRichMenu => "/v2/bot/user/all/richmenu/{richMenuId}",
            Endpoint::LinkUserRichMenu => "/v2/bot/user/{userId}/richmenu/{richMenuId}",
            Endpoint::UnlinkUserRichMenu => "/v2/bot/user/{userId}/richmenu",
            Endpoint::UploadRichMenuImage => "/v2/bot/richmenu/{richMenuId}/content",
        }
    }

    pub fn host(self) -> Host {
        match self {
            Endpoint::UploadRichMenuImage => Host::Data,
            _ => Host::Api,
        }
    }

    pub fn payload(self) -> PayloadKind {
        match self {
            Endpoint::AddLiffView | Endpoint::UpdateLiffView | Endpoint::AddRichMenu => {
                PayloadKind::Json
            }
            Endpoint::IssueToken | Endpoint::RevokeToken => PayloadKind::Form,
            Endpoint::UploadRichMenuImage => PayloadKind::Binary,
            _ => PayloadKind::None,
        }
    }

    /// Token endpoints authenticate with channel credentials, not a bearer token.
    pub fn requires_bearer(self) -> bool {
        !matches!(self, Endpoint::IssueToken | Endpoint::RevokeToken)
    }

    /// Human readable operation name used in logs and errors.
    pub fn label(self) -> &'static str {
        match self {
            Endpoint::ListLiffViews => "List LIFF views",
            Endpoint::AddLiffView => "Add LIFF view",
            Endpoint::UpdateLiffView => "Update LIFF view",
            Endpoint::DeleteLiffView => "Delete LIFF view",
            Endpoint::IssueToken => "Issue channel access token",
            Endpoint::RevokeToken => "Revoke channel access token",
            Endpoint::ListRichMenu => "List rich menus",
            Endpoint::AddRichMenu => "Add rich menu",
            Endpoint::DeleteRichMenu => "Delete rich menu",
            Endpoint::SetDefaultRichMenu => "Set default rich menu",
            Endpoint::LinkUserRichMenu => "Link rich menu to user",
            Endpoint::UnlinkUserRichMenu => "Unlink rich menu from user",
            Endpoint::UploadRichMenuImage => "Upload rich menu image",
        }
    }

    pub fn placeholder_count(self) -> usize {
        self.path_template().matches('{').count()
    }

    /// Substitute path parameters verbatim, in order.
    pub fn render_path(self, params: &[&str]) -> Result<String, ValidationError> {
        let expected = self.placeholder_count();
        if params.len() != expected {
            return Err(ValidationError::PathParameters {
                endpoint: self.label(),
                expected,
                got: params.len(),
            });
        }

        let mut rendered = String::new();
        let mut rest = self.path_template();
        for param in params {
            // placeholder count was checked above
            let (Some(open), Some(close)) = (rest.find('{'), rest.find('}')) else {
                break;
            };
            rendered.push_str(&rest[..open]);
            rendered.push_str(param);
            rest = &rest[close + 1..];
        }
        rendered.push_str(rest);
        Ok(rendered)
    }
}
