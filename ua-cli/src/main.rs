//! Urban Airship CLI - manage device registrations and send pushes from a terminal.
//!
//! Useful for scripting, debugging a registration, or pruning stale devices
//! from the feedback report.

mod commands;

use std::path::Path;

use clap::{Parser, Subcommand};
use tracing::{debug, warn};

use ua_core::config::AppConfig;
use ua_core::error::UaResult;
use ua_core::logging;

/// airship - Urban Airship push API client.
#[derive(Parser)]
#[command(
    name = "airship",
    version,
    about = "Urban Airship push API client",
    long_about = "A command-line client for the Urban Airship push API.\n\
                  Register devices, send pushes and broadcasts, and read the inactive-device feedback."
)]
struct Cli {
    /// Path to the configuration file.
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json).
    #[arg(short = 'f', long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Application key (overrides config).
    #[arg(long, global = true)]
    key: Option<String>,

    /// Application secret (overrides config).
    #[arg(long, global = true)]
    secret: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output for scripting.
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Register, look up and list devices.
    Devices {
        #[command(subcommand)]
        action: commands::devices::DevicesAction,
    },
    /// Send pushes and broadcasts.
    Push {
        #[command(subcommand)]
        action: commands::push::PushAction,
    },
    /// Show devices marked inactive by the push services.
    Feedback(commands::feedback::FeedbackArgs),
}

fn main() -> UaResult<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = match cli.config.as_deref() {
        Some(path) => AppConfig::load_from_file(Path::new(path))?,
        None => AppConfig::load_default()?,
    };
    if let Some(key) = cli.key {
        config.airship.key = key;
    }
    if let Some(secret) = cli.secret {
        config.airship.secret = secret;
    }

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    let _guard = match config
        .effective_log_dir()
        .and_then(|dir| logging::init_logging(log_level, &dir, config.logging.json_output))
    {
        Ok(guard) => Some(guard),
        Err(e) => {
            logging::init_console_logging(log_level);
            warn!("file logging unavailable, logging to stderr only: {e}");
            None
        }
    };

    debug!("airship CLI v{}", ua_core::constants::APP_VERSION);

    // Dispatch to command handlers
    match cli.command {
        Commands::Devices { action } => commands::devices::run(&config, action, cli.format),
        Commands::Push { action } => commands::push::run(&config, action, cli.format),
        Commands::Feedback(args) => commands::feedback::run(&config, args, cli.format),
    }
}
