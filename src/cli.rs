//! CLI domain: parse, route, help, output, and presentation only.
//! No domain orchestration; single route table dispatches to domain services.

mod bootstrap;
mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use bootstrap::build_logging_config;
pub use help::{command_name, richmenu_command_name};
pub use output::{error_kind, map_error};
pub use parse::{
    FilterArgs, FliffCli, FliffCommands, GlobalArgs, RichMenuCli, RichMenuCommands, TargetArgs,
};
pub use route::RunContext;
