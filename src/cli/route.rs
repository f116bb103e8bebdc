//! CLI route: single route table and run context. Dispatches to domain services and presentation.

use crate::channel::{ChannelCommandService, ChannelConfigRequest};
use crate::config::{ConfigLoader, FliffConfig};
use crate::error::ApiError;
use crate::functions_config::FunctionsConfig;
use crate::liff::{LiffAddRequest, LiffCommandService, LiffUpdateRequest};
use crate::resolve::Target;
use crate::richmenu::{RichMenuAddRequest, RichMenuCommandService};
use crate::token::TokenCommandService;
use std::future::Future;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info};

use crate::cli::help::{command_name, richmenu_command_name};
use crate::cli::parse::{FilterArgs, FliffCommands, RichMenuCommands, TargetArgs};
use crate::cli::presentation::{
    format_channel_config_result, format_liff_add_result, format_liff_delete_result,
    format_liff_get_result, format_liff_update_result, format_richmenu_add_result,
    format_richmenu_default_result, format_richmenu_delete_result, format_richmenu_get_result,
    format_richmenu_link_result, format_richmenu_unlink_result, format_token_issue_result,
    format_token_revoke_result, format_version,
};

impl From<&TargetArgs> for Target {
    fn from(args: &TargetArgs) -> Self {
        Target {
            id: args.id.clone(),
            name: args.name.clone(),
        }
    }
}

impl FilterArgs {
    fn target(&self) -> Option<Target> {
        if self.id.is_none() && self.name.is_none() {
            None
        } else {
            Some(Target {
                id: self.id.clone(),
                name: self.name.clone(),
            })
        }
    }
}

/// Runtime context for CLI execution: tool settings, the Functions configuration store,
/// and the async runtime the services run on.
pub struct RunContext {
    settings: FliffConfig,
    store: FunctionsConfig,
    runtime: tokio::runtime::Runtime,
}

impl RunContext {
    /// Create run context from workspace root and optional config path. Uses ConfigLoader only.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let settings = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };
        let store = FunctionsConfig::firebase(&settings.firebase);
        Self::with_store(settings, store)
    }

    /// Run context over an explicit store (tests use an in-memory one).
    pub fn with_store(settings: FliffConfig, store: FunctionsConfig) -> Result<Self, ApiError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ApiError::Settings(format!("Failed to start async runtime: {}", e)))?;
        Ok(Self {
            settings,
            store,
            runtime,
        })
    }

    pub fn settings(&self) -> &FliffConfig {
        &self.settings
    }

    fn run<T, F>(&self, name: &'static str, future: F) -> Result<T, ApiError>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        let started = Instant::now();
        info!(command = name, "Executing command");
        let result = self.runtime.block_on(future);
        debug!(
            command = name,
            ok = result.is_ok(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    /// Execute a `fliff` command via the route table.
    pub fn execute(&self, command: &FliffCommands) -> Result<String, ApiError> {
        let name = command_name(command);
        let store = &self.store;
        let line = &self.settings.line;

        match command {
            FliffCommands::Add {
                name: view_name,
                url,
                view_type,
                description,
                ble,
            } => {
                let request = LiffAddRequest {
                    name: view_name.clone(),
                    url: url.clone(),
                    view_type: LiffCommandService::parse_view_type(view_type)?,
                    description: description.clone(),
                    ble: *ble,
                };
                let result = self.run(name, LiffCommandService::run_add(store, line, &request))?;
                Ok(format_liff_add_result(&result))
            }
            FliffCommands::Update {
                target,
                url,
                view_type,
                description,
                ble,
            } => {
                let request = LiffUpdateRequest {
                    target: target.into(),
                    url: url.clone(),
                    view_type: LiffCommandService::parse_view_type(view_type)?,
                    description: description.clone(),
                    ble: *ble,
                };
                let result =
                    self.run(name, LiffCommandService::run_update(store, line, &request))?;
                Ok(format_liff_update_result(&result))
            }
            FliffCommands::Delete { target } => {
                let target = Target::from(target);
                let result = self.run(name, LiffCommandService::run_delete(store, line, &target))?;
                Ok(format_liff_delete_result(&result))
            }
            FliffCommands::Get { filter, detail } => {
                let target = filter.target();
                let result = self.run(
                    name,
                    LiffCommandService::run_get(store, line, target.as_ref()),
                )?;
                Ok(format_liff_get_result(&result, *detail))
            }
            FliffCommands::Token {
                issue,
                save,
                revoke,
            } => match (issue, revoke) {
                (_, Some(token)) => {
                    let result = self.run(name, TokenCommandService::run_revoke(line, token))?;
                    Ok(format_token_revoke_result(&result))
                }
                _ => {
                    debug!(issue = *issue, "Issuing channel access token");
                    let result =
                        self.run(name, TokenCommandService::run_issue(store, line, *save))?;
                    Ok(format_token_issue_result(&result))
                }
            },
            FliffCommands::Config {
                channel_id,
                channel_secret,
                access_token,
            } => {
                let request = ChannelConfigRequest {
                    channel_id: channel_id.clone(),
                    channel_secret: channel_secret.clone(),
                    access_token: access_token.clone(),
                };
                let result =
                    self.run(name, ChannelCommandService::run_configure(store, &request))?;
                Ok(format_channel_config_result(&result))
            }
            FliffCommands::Version => Ok(format_version("fliff")),
        }
    }

    /// Execute a `richmenu` command via the route table.
    pub fn execute_richmenu(&self, command: &RichMenuCommands) -> Result<String, ApiError> {
        let name = richmenu_command_name(command);
        let store = &self.store;
        let line = &self.settings.line;

        match command {
            RichMenuCommands::Add {
                name: menu_name,
                data,
                image,
            } => {
                let request = RichMenuAddRequest {
                    name: menu_name.clone(),
                    data: data.clone(),
                    image: image.clone(),
                };
                let result =
                    self.run(name, RichMenuCommandService::run_add(store, line, &request))?;
                Ok(format_richmenu_add_result(&result))
            }
            RichMenuCommands::Delete { target } => {
                let target = Target::from(target);
                let result =
                    self.run(name, RichMenuCommandService::run_delete(store, line, &target))?;
                Ok(format_richmenu_delete_result(&result))
            }
            RichMenuCommands::Get { detail } => {
                let result = self.run(name, RichMenuCommandService::run_get(store, line))?;
                Ok(format_richmenu_get_result(&result, *detail))
            }
            RichMenuCommands::Default { target } => {
                let target = Target::from(target);
                let result =
                    self.run(name, RichMenuCommandService::run_default(store, line, &target))?;
                Ok(format_richmenu_default_result(&result))
            }
            RichMenuCommands::Link { target, user } => {
                let target = Target::from(target);
                let result = self.run(
                    name,
                    RichMenuCommandService::run_link(store, line, &target, user),
                )?;
                Ok(format_richmenu_link_result(&result))
            }
            RichMenuCommands::Unlink { user } => {
                let result =
                    self.run(name, RichMenuCommandService::run_unlink(store, line, user))?;
                Ok(format_richmenu_unlink_result(&result))
            }
            RichMenuCommands::Version => Ok(format_version("richmenu")),
        }
    }
}
