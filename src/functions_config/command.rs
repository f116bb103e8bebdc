//! External configuration command seam.

use crate::config::FirebaseConfig;
use async_trait::async_trait;
use tracing::debug;

/// Captured result of one external command run.
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Runs `functions:config:*` subcommands. The Firebase CLI in production; fakes in tests.
#[async_trait]
pub trait ConfigCommandRunner: Send + Sync {
    async fn run(&self, args: &[String]) -> std::io::Result<CommandOutput>;

    /// Shell-like rendering of the invocation for messages and recovery hints.
    fn describe(&self, args: &[String]) -> String;
}

/// `firebase functions:config:*` through the Firebase CLI.
#[derive(Debug, Clone)]
pub struct FirebaseCli {
    program: String,
    project: Option<String>,
}

impl FirebaseCli {
    pub fn new(program: impl Into<String>, project: Option<String>) -> Self {
        Self {
            program: program.into(),
            project,
        }
    }

    pub fn from_settings(settings: &FirebaseConfig) -> Self {
        Self::new(settings.command.clone(), settings.project.clone())
    }

    fn full_args(&self, args: &[String]) -> Vec<String> {
        let mut full = args.to_vec();
        if let Some(project) = &self.project {
            full.push("--project".to_string());
            full.push(project.clone());
        }
        full
    }
}

#[async_trait]
impl ConfigCommandRunner for FirebaseCli {
    async fn run(&self, args: &[String]) -> std::io::Result<CommandOutput> {
        let full_args = self.full_args(args);
        debug!(program = %self.program, args = ?full_args, "Running configuration command");

        let out = tokio::process::Command::new(&self.program)
            .args(&full_args)
            .output()
            .await?;

        Ok(CommandOutput {
            success: out.status.success(),
            stdout: String::from_utf8_lossy(&out.stdout).to_string(),
            stderr: String::from_utf8_lossy(&out.stderr).to_string(),
        })
    }

    fn describe(&self, args: &[String]) -> String {
        let mut parts = vec![self.program.clone()];
        parts.extend(self.full_args(args));
        parts.join(" ")
    }
}
