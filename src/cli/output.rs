//! CLI output: error mapping from domain errors to the text printed on stderr.

use crate::error::{ApiError, ConfigStoreError};
use owo_colors::OwoColorize;

/// Render an error with its remediation hints. Partial failures list the completed
/// steps first, then the failed step, then how to finish by hand.
pub fn map_error(e: &ApiError) -> String {
    let mut lines = Vec::new();
    match e {
        ApiError::StepFailed {
            completed,
            step,
            failed,
            hint,
        } => {
            for done in completed {
                lines.push(format!("{} {}", "✔".green(), done));
            }
            lines.push(format!("{} {}", "✘".red(), step.red()));
            lines.push(format!("  {}", failed));
            let mut suggestions = hint.clone();
            if let Some(extra) = config_hint(failed) {
                suggestions.extend(extra);
            }
            push_suggestions(&mut lines, &suggestions);
        }
        other => {
            lines.push(format!("{}", other.to_string().red()));
            if let Some(hint) = config_hint(other) {
                push_suggestions(&mut lines, &hint);
            }
        }
    }
    lines.join("\n")
}

fn config_hint(e: &ApiError) -> Option<Vec<String>> {
    match e {
        ApiError::Config(inner) => inner.hint(),
        _ => None,
    }
}

fn push_suggestions(lines: &mut Vec<String>, hint: &[String]) {
    if hint.is_empty() {
        return;
    }
    lines.push(format!("{}", "Suggestions:".cyan()));
    lines.extend(hint.iter().map(|h| format!("  {}", h)));
}

/// Short category label, used in the final error log record.
pub fn error_kind(e: &ApiError) -> &'static str {
    match e {
        ApiError::Config(ConfigStoreError::AuthenticationExpired(_)) => "config.auth_expired",
        ApiError::Config(ConfigStoreError::UnknownProject(_)) => "config.unknown_project",
        ApiError::Config(_) => "config",
        ApiError::Validation(_) => "validation",
        ApiError::Transport { .. } => "transport",
        ApiError::UnexpectedResponse { .. } => "unexpected_response",
        ApiError::Settings(_) => "settings",
        ApiError::StepFailed { .. } => "partial_failure",
    }
}
