//! CLI parse: clap types for `fliff` and `richmenu`. No behavior; definitions only.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Flags shared by both binaries; accepted before or after the subcommand.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Workspace root directory (holds .fliff/config.toml)
    #[arg(long, global = true, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (when output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

/// Resource addressed by id or by its configured name (exactly one).
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct TargetArgs {
    /// Remote id
    #[arg(long)]
    pub id: Option<String>,

    /// Name stored in Functions configuration
    #[arg(long)]
    pub name: Option<String>,
}

/// Optional narrowing to one resource.
#[derive(Args, Debug, Clone)]
#[group(required = false, multiple = false)]
pub struct FilterArgs {
    /// Remote id
    #[arg(long)]
    pub id: Option<String>,

    /// Name stored in Functions configuration
    #[arg(long)]
    pub name: Option<String>,
}

/// fliff - manage LIFF views and channel access tokens of a LINE channel
#[derive(Parser, Debug)]
#[command(name = "fliff", version)]
#[command(about = "Manage LINE LIFF views and channel access tokens backed by Firebase Functions configuration")]
pub struct FliffCli {
    #[command(subcommand)]
    pub command: FliffCommands,

    #[command(flatten)]
    pub global: GlobalArgs,
}

#[derive(Subcommand, Debug, Clone)]
pub enum FliffCommands {
    /// Register a LIFF view and store its id under views.<name>
    Add {
        /// View name (stored normalized: lowercase, spaces as underscores)
        #[arg(long)]
        name: String,
        /// Endpoint URL of the view
        #[arg(long)]
        url: String,
        /// View size: compact, tall or full
        #[arg(long = "type", default_value = "tall")]
        view_type: String,
        /// Description (defaults to the name)
        #[arg(long)]
        description: Option<String>,
        /// Enable Bluetooth Low Energy support
        #[arg(long)]
        ble: bool,
    },
    /// Update the view of a LIFF app
    Update {
        #[command(flatten)]
        target: TargetArgs,
        /// Endpoint URL of the view
        #[arg(long)]
        url: String,
        /// View size: compact, tall or full (replaces the current size)
        #[arg(long = "type")]
        view_type: String,
        /// Description
        #[arg(long)]
        description: Option<String>,
        /// Enable Bluetooth Low Energy support
        #[arg(long)]
        ble: bool,
    },
    /// Delete a LIFF app and unset its configured names
    Delete {
        #[command(flatten)]
        target: TargetArgs,
    },
    /// List LIFF apps
    Get {
        #[command(flatten)]
        filter: FilterArgs,
        /// Print full JSON instead of a table
        #[arg(long)]
        detail: bool,
    },
    /// Issue or revoke a channel access token
    Token {
        /// Issue a token with the configured channel id and secret
        #[arg(long, conflicts_with = "revoke", required_unless_present = "revoke")]
        issue: bool,
        /// Store the issued token as line.access_token
        #[arg(long, requires = "issue")]
        save: bool,
        /// Revoke the given token
        #[arg(long, value_name = "TOKEN")]
        revoke: Option<String>,
    },
    /// Store channel credentials in the line group of Functions configuration
    Config {
        /// Channel id
        #[arg(long = "id")]
        channel_id: Option<String>,
        /// Channel secret
        #[arg(long = "secret")]
        channel_secret: Option<String>,
        /// Channel access token
        #[arg(long = "token")]
        access_token: Option<String>,
    },
    /// Print the version
    Version,
}

/// richmenu - manage rich menus of a LINE channel
#[derive(Parser, Debug)]
#[command(name = "richmenu", version)]
#[command(about = "Manage LINE rich menus backed by Firebase Functions configuration")]
pub struct RichMenuCli {
    #[command(subcommand)]
    pub command: RichMenuCommands,

    #[command(flatten)]
    pub global: GlobalArgs,
}

#[derive(Subcommand, Debug, Clone)]
pub enum RichMenuCommands {
    /// Create a rich menu, store its id under richmenus.<name>, upload its image
    Add {
        /// Rich menu name (stored normalized)
        #[arg(long)]
        name: String,
        /// Rich menu definition (JSON)
        #[arg(long)]
        data: Option<PathBuf>,
        /// Rich menu image (.png, .jpg, .jpeg)
        #[arg(long)]
        image: Option<PathBuf>,
    },
    /// Delete a rich menu and unset its configured names
    Delete {
        #[command(flatten)]
        target: TargetArgs,
    },
    /// List rich menus
    Get {
        /// Print full JSON instead of a table
        #[arg(long)]
        detail: bool,
    },
    /// Set the default rich menu for all users
    Default {
        #[command(flatten)]
        target: TargetArgs,
    },
    /// Link a rich menu to a user
    Link {
        #[command(flatten)]
        target: TargetArgs,
        /// User id
        #[arg(long, short = 'U')]
        user: String,
    },
    /// Unlink the rich menu of a user
    Unlink {
        /// User id
        #[arg(long, short = 'U')]
        user: String,
    },
    /// Print the version
    Version,
}
