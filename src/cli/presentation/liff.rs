//! LIFF command presentation: add, update, delete, get (table or JSON).

use super::shared::{format_not_found, format_success, names_cell, new_table, to_pretty_json};
use crate::liff::{LiffAddResult, LiffDeleteResult, LiffGetResult, LiffUpdateResult};

pub fn format_liff_add_result(result: &LiffAddResult) -> String {
    [
        format_success(&format!(
            "Created {} view with LIFF ID: {}",
            result.name, result.liff_id
        )),
        format_success(&format!(
            "Saved {} in Functions configuration",
            result.config_key
        )),
    ]
    .join("\n")
}

pub fn format_liff_update_result(result: &LiffUpdateResult) -> String {
    format_success(&format!("Updated LIFF ID: {}", result.liff_id))
}

pub fn format_liff_delete_result(result: &LiffDeleteResult) -> String {
    let mut lines = Vec::new();
    match &result.not_found {
        Some(message) => lines.push(format_not_found(message)),
        None => lines.push(format_success(&format!(
            "Deleted view with LIFF ID: {}",
            result.liff_id
        ))),
    }
    if result.unset.is_empty() {
        lines.push(format!(
            "No view name in Functions configuration points at {}",
            result.liff_id
        ));
    } else {
        lines.push(format_success(&format!(
            "Unset view(s) in Functions configuration: {}",
            result.unset.join(", ")
        )));
    }
    lines.join("\n")
}

pub fn format_liff_get_result(result: &LiffGetResult, detail: bool) -> String {
    if let Some(message) = &result.not_found {
        return format_not_found(message);
    }
    if result.views.is_empty() {
        return "LIFF view not found".to_string();
    }
    if detail {
        let apps: Vec<_> = result.views.iter().map(|row| &row.app).collect();
        return to_pretty_json(&apps);
    }

    let mut table = new_table(vec!["View", "LIFF ID", "Type", "URL", "Description", "BLE"]);
    for row in &result.views {
        let app = &row.app;
        table.add_row(vec![
            names_cell(&row.names),
            app.liff_id.clone(),
            app.view.view_type.to_string(),
            app.view.url.clone(),
            app.description.clone().unwrap_or_default(),
            app.features
                .as_ref()
                .map(|f| f.ble.to_string())
                .unwrap_or_else(|| "false".to_string()),
        ]);
    }
    table.to_string()
}
