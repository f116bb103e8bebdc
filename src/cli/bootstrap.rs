//! CLI bootstrap shared by both binaries: logging configuration from flags and settings.

use crate::cli::parse::GlobalArgs;
use crate::config::ConfigLoader;
use crate::logging::LoggingConfig;

/// Build logging configuration from CLI args and the settings files.
/// Precedence: CLI flags override config file override defaults.
pub fn build_logging_config(global: &GlobalArgs) -> LoggingConfig {
    let mut config = if let Some(ref config_path) = global.config {
        ConfigLoader::load_from_file(config_path)
            .ok()
            .map(|c| c.logging)
            .unwrap_or_default()
    } else {
        ConfigLoader::load(&global.workspace)
            .ok()
            .map(|c| c.logging)
            .unwrap_or_default()
    };

    if global.quiet {
        config.enabled = false;
    }
    if global.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = global.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = global.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = global.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = global.log_file {
        config.file = Some(file.clone());
    }

    config
}
