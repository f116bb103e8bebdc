//! Shared test utilities for integration tests
//!
//! A scripted stand-in for the Firebase CLI (a shell script that serves
//! `functions:config:get` from a JSON file and records every invocation) plus helpers
//! that point fliff settings at an httpmock server.

use fliff::config::{FirebaseConfig, FliffConfig, LineApiConfig};
use fliff::functions_config::FunctionsConfig;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const SCRIPT: &str = r#"#!/bin/sh
dir="$(dirname "$0")"
echo "$*" >> "$dir/calls.log"
case "$1" in
  functions:config:get)
    if [ -f "$dir/auth_error" ]; then
      echo "Error: Authentication Error: Your credentials are no longer valid." >&2
      exit 1
    fi
    if [ -f "$dir/unknown_project" ]; then
      echo "Error: No project active" >&2
      exit 1
    fi
    cat "$dir/config.json"
    ;;
  functions:config:set|functions:config:unset)
    if [ -f "$dir/fail_writes" ]; then
      echo "Error: HTTP Error: 403, The caller does not have permission" >&2
      exit 1
    fi
    echo "Functions config updated."
    ;;
  *)
    exit 2
    ;;
esac
"#;

/// Fake `firebase` executable living in its own temp dir.
pub struct FakeFirebase {
    dir: TempDir,
}

impl FakeFirebase {
    /// Install the script with `config` as the `functions:config:get` output.
    pub fn new(config: &serde_json::Value) -> Self {
        let dir = TempDir::new().unwrap();
        let script = dir.path().join("firebase");
        std::fs::write(&script, SCRIPT).unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();
        }
        std::fs::write(dir.path().join("config.json"), config.to_string()).unwrap();
        Self { dir }
    }

    pub fn command(&self) -> PathBuf {
        self.dir.path().join("firebase")
    }

    /// Make every later `get` fail with the CLI's expired-login message.
    pub fn expire_login(&self) {
        std::fs::write(self.dir.path().join("auth_error"), "").unwrap();
    }

    /// Make every later `get` fail without the expired-login message.
    pub fn forget_project(&self) {
        std::fs::write(self.dir.path().join("unknown_project"), "").unwrap();
    }

    /// Make every later `set`/`unset` fail.
    pub fn fail_writes(&self) {
        std::fs::write(self.dir.path().join("fail_writes"), "").unwrap();
    }

    /// Recorded invocations, one argument string per call.
    pub fn calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.dir.path().join("calls.log"))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Recorded `set`/`unset` invocations.
    pub fn writes(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| !c.starts_with("functions:config:get"))
            .collect()
    }

    pub fn firebase_config(&self, project: Option<&str>) -> FirebaseConfig {
        FirebaseConfig {
            command: self.command().to_string_lossy().to_string(),
            project: project.map(str::to_string),
        }
    }

    pub fn store(&self) -> FunctionsConfig {
        FunctionsConfig::firebase(&self.firebase_config(None))
    }
}

/// Settings with both LINE hosts on `base_url` and the fake Firebase CLI.
pub fn settings_for(base_url: &str, firebase: &FakeFirebase) -> FliffConfig {
    FliffConfig {
        line: LineApiConfig {
            api_base_url: base_url.to_string(),
            data_api_base_url: base_url.to_string(),
        },
        firebase: firebase.firebase_config(None),
        ..FliffConfig::default()
    }
}

/// Standard configuration: one channel, one LIFF view and one rich menu registered.
pub fn channel_config() -> serde_json::Value {
    serde_json::json!({
        "line": {
            "channel_id": "1650000000",
            "channel_secret": "s3cret",
            "access_token": "token-1"
        },
        "views": {"home": "1650000000-aaaa"},
        "richmenus": {"main": "richmenu-111"}
    })
}

/// Write a file under `dir` and return its path.
pub fn write_file(dir: &Path, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}
