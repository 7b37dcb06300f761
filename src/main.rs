//! Electricity billing server
//!
//! ```sh
//! # Run with default config (~/.config/electricity-billing/config.toml)
//! electricity-billing
//!
//! # Custom config path and port
//! electricity-billing --config /etc/electricity-billing/config.toml --port 8081
//!
//! # Validate config without starting
//! electricity-billing --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use electricity_billing::config::{AppConfig, ConfigOrigin, DATABASE_URL_ENV};
use electricity_billing::default_config_path;
use electricity_billing::infrastructure::redacted_url;
use electricity_billing::server::{self, init_tracing, ServerOptions};

/// Meter reading log with tiered electricity billing.
#[derive(Parser, Debug)]
#[command(name = "electricity-billing", version, about)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "BILLING_CONFIG")]
    config: Option<PathBuf>,

    /// Override the HTTP listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli.config.unwrap_or_else(default_config_path);
    let (mut config, origin) = AppConfig::load(&config_path, std::env::var(DATABASE_URL_ENV).ok());

    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }

    init_tracing(&config);

    match origin {
        ConfigOrigin::File => info!("Configuration loaded from {}", config_path.display()),
        ConfigOrigin::Missing => info!(
            "No configuration at {}, using defaults",
            config_path.display()
        ),
        ConfigOrigin::Invalid(e) if cli.check => {
            error!("Configuration invalid: {}", e);
            return Err(e.into());
        }
        ConfigOrigin::Invalid(e) => error!("Failed to load config: {}. Using defaults.", e),
    }

    if cli.check {
        info!(
            "Configuration OK: listening on {}, database {}",
            config.server.address(),
            redacted_url(&config.database.url)
        );
        return Ok(());
    }

    server::run(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
    })
    .await
}
