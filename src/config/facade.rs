//! ConfigLoader: builds `FliffConfig` from the layered sources.

use super::merge::merge_policy;
use super::sources::{env, global_file, workspace_file};
use super::FliffConfig;
use crate::error::ApiError;
use config::File;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load settings for a workspace: defaults, global file, workspace file, environment.
    pub fn load(workspace_root: &Path) -> Result<FliffConfig, ApiError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = env::add_to_builder(builder);

        let config: FliffConfig = builder.build()?.try_deserialize()?;
        debug!(workspace = %workspace_root.display(), "Settings loaded");
        Self::validated(config)
    }

    /// Load settings from one explicit file (replaces the global and workspace files).
    pub fn load_from_file(path: &Path) -> Result<FliffConfig, ApiError> {
        if !path.exists() {
            return Err(ApiError::Settings(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        let builder = merge_policy::builder_with_defaults()?
            .add_source(File::from(path.to_path_buf()).required(true));
        let builder = env::add_to_builder(builder);

        let config: FliffConfig = builder.build()?.try_deserialize()?;
        Self::validated(config)
    }

    /// Global settings file location, if a home/config directory exists.
    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }

    /// Workspace settings file location.
    pub fn workspace_config_path(workspace_root: &Path) -> PathBuf {
        workspace_file::workspace_config_path(workspace_root)
    }

    fn validated(config: FliffConfig) -> Result<FliffConfig, ApiError> {
        config.validate().map_err(|errors| {
            ApiError::Settings(format!(
                "Configuration validation failed:\n{}",
                errors.join("\n")
            ))
        })?;
        Ok(config)
    }
}
