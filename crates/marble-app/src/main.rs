//! The binary entry point for the `marble` mesh tool.

use std::process::ExitCode;

use clap::Parser;
use marble_app::Startup;
use marble_config::CliArgs;
use tracing::{error, info};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Logging depends on the config, so setup failures go straight to stderr.
    let startup = match Startup::load(&args) {
        Ok(startup) => startup,
        Err(e) => {
            eprintln!("Failed to initialize marble: {e}");
            return ExitCode::FAILURE;
        }
    };

    marble_log::init_logging(
        Some(&startup.dirs.log_dir),
        cfg!(debug_assertions),
        Some(&startup.config),
    );
    info!(config = %startup.dirs.config_dir.display(), "Marble starting");
    startup.log_config_origin();

    match marble_app::run(&startup.config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
