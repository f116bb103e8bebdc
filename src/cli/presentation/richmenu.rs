//! Rich menu command presentation.

use super::shared::{format_not_found, format_success, names_cell, new_table, to_pretty_json};
use crate::richmenu::{
    RichMenuAddResult, RichMenuDeleteResult, RichMenuGetResult, RichMenuTargetResult,
};

pub fn format_richmenu_add_result(result: &RichMenuAddResult) -> String {
    result
        .steps
        .iter()
        .map(|step| format_success(step))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_richmenu_delete_result(result: &RichMenuDeleteResult) -> String {
    let mut lines = Vec::new();
    match &result.not_found {
        Some(message) => lines.push(format_not_found(message)),
        None => lines.push(format_success(&format!(
            "Deleted RichMenu ID: {}",
            result.rich_menu_id
        ))),
    }
    if !result.unset.is_empty() {
        lines.push(format_success(&format!(
            "Unset richmenu(s) in Functions configuration: {}",
            result.unset.join(", ")
        )));
    }
    lines.join("\n")
}

pub fn format_richmenu_get_result(result: &RichMenuGetResult, detail: bool) -> String {
    if let Some(message) = &result.not_found {
        return format_not_found(message);
    }
    if result.menus.is_empty() {
        return "RichMenu not found".to_string();
    }
    if detail {
        let menus: Vec<_> = result.menus.iter().map(|row| &row.menu).collect();
        return to_pretty_json(&menus);
    }

    let mut table = new_table(vec![
        "RichMenu",
        "RichMenu ID",
        "Size",
        "Bar Text",
        "Selected",
        "No. of Areas",
    ]);
    for row in &result.menus {
        let menu = &row.menu;
        table.add_row(vec![
            names_cell(&row.names),
            menu.rich_menu_id.clone(),
            format!("{}x{}", menu.size.width, menu.size.height),
            menu.chat_bar_text.clone(),
            menu.selected.to_string(),
            menu.areas.len().to_string(),
        ]);
    }
    table.to_string()
}

pub fn format_richmenu_default_result(result: &RichMenuTargetResult) -> String {
    match &result.not_found {
        Some(message) => format_not_found(message),
        None => format_success(&format!(
            "Set default RichMenu ID: {}",
            result.rich_menu_id.as_deref().unwrap_or_default()
        )),
    }
}

pub fn format_richmenu_link_result(result: &RichMenuTargetResult) -> String {
    match &result.not_found {
        Some(message) => format_not_found(message),
        None => format_success(&format!(
            "Linked RichMenu ID {} to User {}",
            result.rich_menu_id.as_deref().unwrap_or_default(),
            result.user_id.as_deref().unwrap_or_default()
        )),
    }
}

pub fn format_richmenu_unlink_result(result: &RichMenuTargetResult) -> String {
    match &result.not_found {
        Some(message) => format_not_found(message),
        None => format_success(&format!(
            "Unlinked RichMenu from User {}",
            result.user_id.as_deref().unwrap_or_default()
        )),
    }
}
