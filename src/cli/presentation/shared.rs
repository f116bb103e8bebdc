//! Shared presentation helpers.

use comfy_table::{presets::UTF8_FULL, Table};
use owo_colors::OwoColorize;
use serde::Serialize;

pub fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(header);
    table
}

/// Configured names for one id, comma separated; "-" when none.
pub fn names_cell(names: &[String]) -> String {
    if names.is_empty() {
        "-".to_string()
    } else {
        names.join(", ")
    }
}

/// Upstream not-found message, reported without failing the command.
pub fn format_not_found(message: &str) -> String {
    format!("{}", message.yellow())
}

pub fn format_success(line: &str) -> String {
    format!("{} {}", "✔".green(), line)
}

pub fn to_pretty_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}

pub fn format_version(binary: &str) -> String {
    format!("{} version: {}", binary, env!("CARGO_PKG_VERSION"))
}
