//! Token and channel configuration presentation.

use super::shared::{format_success, to_pretty_json};
use crate::channel::ChannelConfigResult;
use crate::token::{TokenIssueResult, TokenRevokeResult};
use owo_colors::OwoColorize;
use serde_json::{Map, Value};

pub fn format_token_issue_result(result: &TokenIssueResult) -> String {
    let mut lines = vec![
        "The following token has been issued.".to_string(),
        to_pretty_json(&result.token),
        format!("Expires at: {}", result.expires_at.to_rfc3339()),
    ];
    if result.saved {
        lines.push(format_success(
            "The access token is saved on Firebase Functions Configuration.",
        ));
    } else {
        lines.push(format!(
            "{}",
            "This access token is NOT saved on Firebase Functions Configuration.".yellow()
        ));
        lines.push(
            "To save it on Firebase Functions Configuration, re-run with `fliff token --issue --save`"
                .to_string(),
        );
    }
    lines.join("\n")
}

pub fn format_token_revoke_result(result: &TokenRevokeResult) -> String {
    if result.revoked {
        format_success("The token is revoked.")
    } else {
        "Unknown response".to_string()
    }
}

pub fn format_channel_config_result(result: &ChannelConfigResult) -> String {
    let updated: Map<String, Value> = result
        .updated
        .iter()
        .map(|(k, v)| (k.clone(), Value::String(v.clone())))
        .collect();
    [
        "The following property has been updated.".to_string(),
        to_pretty_json(&updated),
        format_success("Firebase Functions configured"),
    ]
    .join("\n")
}
