//! richmenu CLI Binary
//!
//! Rich menus of a LINE channel.

use clap::Parser;
use fliff::cli::{build_logging_config, error_kind, map_error, RichMenuCli, RunContext};
use fliff::logging::init_logging;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = RichMenuCli::parse();

    let logging_config = build_logging_config(&cli.global);
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("richmenu starting");

    let context = match RunContext::new(cli.global.workspace.clone(), cli.global.config.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!(kind = error_kind(&e), "Error loading settings: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    };

    match context.execute_richmenu(&cli.command) {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!(kind = error_kind(&e), "Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}
