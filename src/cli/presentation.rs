//! CLI presentation: text, table and JSON formatters per command family.

mod liff;
mod richmenu;
mod shared;
mod token;

pub use liff::{
    format_liff_add_result, format_liff_delete_result, format_liff_get_result,
    format_liff_update_result,
};
pub use richmenu::{
    format_richmenu_add_result, format_richmenu_default_result, format_richmenu_delete_result,
    format_richmenu_get_result, format_richmenu_link_result, format_richmenu_unlink_result,
};
pub use shared::format_version;
pub use token::{
    format_channel_config_result, format_token_issue_result, format_token_revoke_result,
};
