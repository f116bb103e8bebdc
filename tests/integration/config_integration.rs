//! Settings loading: workspace file, explicit file, environment overrides.

use fliff::cli::RunContext;
use fliff::config::ConfigLoader;
use std::sync::Mutex;
use tempfile::TempDir;

// Serializes tests that read FLIFF_* environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_defaults_point_at_line_hosts() {
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let workspace = TempDir::new().unwrap();

    let config = ConfigLoader::load(workspace.path()).unwrap();
    assert_eq!(config.line.api_base_url, "https://api.line.me");
    assert_eq!(config.line.data_api_base_url, "https://api-data.line.me");
    assert_eq!(config.firebase.command, "firebase");
    assert!(config.firebase.project.is_none());
}

#[test]
fn test_run_context_reads_workspace_file() {
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let workspace = TempDir::new().unwrap();
    let path = ConfigLoader::workspace_config_path(workspace.path());
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(
        &path,
        "[line]\napi_base_url = \"http://127.0.0.1:8080\"\n\n[firebase]\nproject = \"demo-bot\"\n",
    )
    .unwrap();

    let context = RunContext::new(workspace.path().to_path_buf(), None).unwrap();
    assert_eq!(context.settings().line.api_base_url, "http://127.0.0.1:8080");
    assert_eq!(context.settings().firebase.project.as_deref(), Some("demo-bot"));
}

#[test]
fn test_explicit_config_file_must_exist() {
    let workspace = TempDir::new().unwrap();
    let missing = workspace.path().join("nope.toml");
    assert!(RunContext::new(workspace.path().to_path_buf(), Some(missing)).is_err());
}

#[test]
fn test_environment_overrides_data_host() {
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let workspace = TempDir::new().unwrap();

    std::env::set_var("FLIFF_LINE__DATA_API_BASE_URL", "http://127.0.0.1:9999");
    let result = ConfigLoader::load(workspace.path());
    std::env::remove_var("FLIFF_LINE__DATA_API_BASE_URL");

    assert_eq!(result.unwrap().line.data_api_base_url, "http://127.0.0.1:9999");
}
