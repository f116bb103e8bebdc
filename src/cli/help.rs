//! CLI command-name contract for logging and routing.

use crate::cli::parse::{FliffCommands, RichMenuCommands};

/// Command name for log records (e.g. "fliff.add", "richmenu.link").
pub fn command_name(command: &FliffCommands) -> &'static str {
    match command {
        FliffCommands::Add { .. } => "fliff.add",
        FliffCommands::Update { .. } => "fliff.update",
        FliffCommands::Delete { .. } => "fliff.delete",
        FliffCommands::Get { .. } => "fliff.get",
        FliffCommands::Token { .. } => "fliff.token",
        FliffCommands::Config { .. } => "fliff.config",
        FliffCommands::Version => "fliff.version",
    }
}

pub fn richmenu_command_name(command: &RichMenuCommands) -> &'static str {
    match command {
        RichMenuCommands::Add { .. } => "richmenu.add",
        RichMenuCommands::Delete { .. } => "richmenu.delete",
        RichMenuCommands::Get { .. } => "richmenu.get",
        RichMenuCommands::Default { .. } => "richmenu.default",
        RichMenuCommands::Link { .. } => "richmenu.link",
        RichMenuCommands::Unlink { .. } => "richmenu.unlink",
        RichMenuCommands::Version => "richmenu.version",
    }
}

