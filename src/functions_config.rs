//! Firebase Functions configuration store.
//!
//! Reads and writes the hierarchical key/value configuration kept by the Firebase project
//! (`functions:config:get|set|unset`). The record is never cached beyond one command: callers
//! load it once, pass it by reference, and mutate the remote copy through `set`/`unset`.

use crate::config::FirebaseConfig;
use crate::error::ConfigStoreError;
use futures::future::try_join_all;
use serde_json::Value;
use tracing::{debug, info};

pub mod command;
pub mod record;

pub use command::{CommandOutput, ConfigCommandRunner, FirebaseCli};
pub use record::{
    config_key, normalize_name, ConfigRecord, Credentials, ACCESS_TOKEN_KEY, CHANNEL_ID_KEY,
    CHANNEL_SECRET_KEY, LINE_GROUP, RICHMENU_GROUP, VIEW_GROUP,
};

/// Text the Firebase CLI prints when the login session has expired.
const AUTH_ERROR_MARKER: &str = "Authentication Error";

const GET_COMMAND: &str = "functions:config:get";
const SET_COMMAND: &str = "functions:config:set";
const UNSET_COMMAND: &str = "functions:config:unset";

/// Map a failed `get` to its error kind. This is the only place the command's text is inspected.
pub fn classify_get_failure(output: &CommandOutput) -> ConfigStoreError {
    let detail = failure_detail(output);
    if output.stderr.contains(AUTH_ERROR_MARKER) || output.stdout.contains(AUTH_ERROR_MARKER) {
        ConfigStoreError::AuthenticationExpired(detail)
    } else {
        ConfigStoreError::UnknownProject(detail)
    }
}

fn failure_detail(output: &CommandOutput) -> String {
    let stderr = output.stderr.trim();
    if stderr.is_empty() {
        output.stdout.trim().to_string()
    } else {
        stderr.to_string()
    }
}

pub struct FunctionsConfig {
    runner: Box<dyn ConfigCommandRunner>,
}

impl FunctionsConfig {
    pub fn new(runner: Box<dyn ConfigCommandRunner>) -> Self {
        Self { runner }
    }

    /// Store backed by the Firebase CLI described in the settings.
    pub fn firebase(settings: &FirebaseConfig) -> Self {
        Self::new(Box::new(FirebaseCli::from_settings(settings)))
    }

    /// `functions:config:get [name]`, parsed as JSON.
    pub async fn get(&self, name: Option<&str>) -> Result<Value, ConfigStoreError> {
        let mut args = vec![GET_COMMAND.to_string()];
        if let Some(name) = name {
            args.push(name.to_string());
        }

        let output = self.run(&args).await?;
        if !output.success {
            return Err(classify_get_failure(&output));
        }

        let stdout = output.stdout.trim();
        if stdout.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(stdout).map_err(|e| ConfigStoreError::InvalidOutput(e.to_string()))
    }

    /// Whole configuration as a record.
    pub async fn load(&self) -> Result<ConfigRecord, ConfigStoreError> {
        let record = ConfigRecord::from_value(self.get(None).await?)?;
        debug!("Functions configuration loaded");
        Ok(record)
    }

    /// Set one `group.name` key; resolves with the value set.
    pub async fn set(&self, name: &str, value: &str) -> Result<String, ConfigStoreError> {
        let mut values = self.set_many(&[(name.to_string(), value.to_string())]).await?;
        Ok(values.remove(0))
    }

    /// Set several keys in one invocation; resolves with the values set.
    pub async fn set_many(
        &self,
        pairs: &[(String, String)],
    ) -> Result<Vec<String>, ConfigStoreError> {
        let mut args = vec![SET_COMMAND.to_string()];
        args.extend(pairs.iter().map(|(k, v)| format!("{}={}", k, v)));

        self.write(&args).await?;
        info!(keys = ?pairs.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>(), "Configuration set");
        Ok(pairs.iter().map(|(_, v)| v.clone()).collect())
    }

    /// Unset one `group.name` key; resolves with the name unset.
    pub async fn unset(&self, name: &str) -> Result<String, ConfigStoreError> {
        let args = vec![UNSET_COMMAND.to_string(), name.to_string()];
        self.write(&args).await?;
        info!(key = name, "Configuration unset");
        Ok(name.to_string())
    }

    /// Unset disjoint keys as one unordered batch.
    pub async fn unset_all(&self, names: &[String]) -> Result<Vec<String>, ConfigStoreError> {
        try_join_all(names.iter().map(|name| self.unset(name))).await
    }

    /// Id stored under `name` in `group`. Loads the configuration when `config` is absent or
    /// lacks the group.
    pub async fn get_id_by_name(
        &self,
        group: &str,
        name: &str,
        config: Option<&ConfigRecord>,
    ) -> Result<Option<String>, ConfigStoreError> {
        match config {
            Some(record) if record.has_group(group) => Ok(record.id_by_name(group, name)),
            _ => Ok(self.load().await?.id_by_name(group, name)),
        }
    }

    /// Names in `group` whose value equals `id` (possibly none, possibly several).
    pub async fn get_names_by_id(
        &self,
        group: &str,
        id: &str,
        config: Option<&ConfigRecord>,
    ) -> Result<Vec<String>, ConfigStoreError> {
        match config {
            Some(record) if record.has_group(group) => Ok(record.names_by_id(group, id)),
            _ => Ok(self.load().await?.names_by_id(group, id)),
        }
    }

    /// Command line that sets `name=value`, for manual recovery.
    pub fn describe_set(&self, name: &str, value: &str) -> String {
        self.runner
            .describe(&[SET_COMMAND.to_string(), format!("{}={}", name, value)])
    }

    /// Command line that unsets `name`, for manual recovery.
    pub fn describe_unset(&self, name: &str) -> String {
        self.runner
            .describe(&[UNSET_COMMAND.to_string(), name.to_string()])
    }

    async fn write(&self, args: &[String]) -> Result<(), ConfigStoreError> {
        let output = self.run(args).await?;
        if output.success {
            Ok(())
        } else {
            Err(ConfigStoreError::WriteFailed {
                command: self.runner.describe(args),
                detail: failure_detail(&output),
            })
        }
    }

    async fn run(&self, args: &[String]) -> Result<CommandOutput, ConfigStoreError> {
        self.runner
            .run(args)
            .await
            .map_err(|source| ConfigStoreError::CommandUnavailable {
                command: self.runner.describe(args),
                source,
            })
    }
}
