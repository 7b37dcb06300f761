//! Server runtime: tracing, database, migrations, HTTP API and graceful
//! shutdown wired together for the binary.

use std::sync::Arc;
use std::time::Duration;

use metrics_exporter_prometheus::PrometheusBuilder;
use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use crate::application::BillingService;
use crate::config::{AppConfig, LogFormat};
use crate::domain::ReadingRepository;
use crate::infrastructure::database::migrator::Migrator;
use crate::infrastructure::database::repositories::SeaOrmReadingRepository;
use crate::infrastructure::{init_database, DatabaseConfig};
use crate::interfaces::http::create_api_router;
use crate::shared::shutdown::{listen_for_shutdown_signals, ShutdownSignal};

/// Install the global tracing subscriber. `RUST_LOG` wins over the
/// configured level.
pub fn init_tracing(cfg: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.logging.level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = match cfg.logging.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };
    if installed.is_err() {
        warn!("Tracing subscriber already installed");
    }
}

/// Options for starting the billing server.
pub struct ServerOptions {
    /// Application configuration.
    pub config: AppConfig,
    /// Run database migrations on startup (default: true).
    pub auto_migrate: bool,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            auto_migrate: true,
        }
    }
}

/// Run the server until SIGINT/SIGTERM, then drain and close the database.
pub async fn run(opts: ServerOptions) -> Result<(), Box<dyn std::error::Error>> {
    let app_cfg = opts.config;

    info!("Starting electricity billing service...");

    let prometheus_handle = PrometheusBuilder::new().install_recorder()?;
    info!("📊 Prometheus metrics recorder installed");

    // ── Database ───────────────────────────────────────────────
    let db_config = DatabaseConfig::from(&app_cfg.database);
    let db = init_database(&db_config).await?;

    if opts.auto_migrate {
        info!("Running database migrations...");
        Migrator::up(&db, None).await?;
        info!("Migrations completed");
    }

    // ── Repositories & Services ────────────────────────────────
    let repo: Arc<dyn ReadingRepository> = Arc::new(SeaOrmReadingRepository::new(db.clone()));
    let billing = Arc::new(BillingService::new(repo));

    // ── HTTP API ───────────────────────────────────────────────
    let router = create_api_router(billing, prometheus_handle);

    let addr = app_cfg.server.address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("HTTP server listening on http://{}", addr);
    info!("Swagger UI available at http://{}/docs/", addr);

    let shutdown = ShutdownSignal::new();
    {
        let shutdown = shutdown.clone();
        tokio::spawn(async move {
            if let Err(e) = listen_for_shutdown_signals(shutdown).await {
                error!("Failed to install signal handlers: {}", e);
            }
        });
    }

    let graceful = shutdown.clone();
    let mut api_task = tokio::spawn(async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                graceful.wait().await;
                info!("🛑 HTTP server received shutdown signal");
            })
            .await
    });

    info!("🚀 Server started. Press Ctrl+C to shutdown gracefully.");

    tokio::select! {
        result = &mut api_task => {
            match result {
                Ok(Ok(())) => info!("HTTP server stopped"),
                Ok(Err(e)) => error!("HTTP server error: {}", e),
                Err(e) => error!("HTTP server task panicked: {}", e),
            }
        }
        _ = shutdown.wait() => {
            let timeout = Duration::from_secs(app_cfg.server.shutdown_timeout);
            match tokio::time::timeout(timeout, &mut api_task).await {
                Ok(_) => info!("HTTP server drained"),
                Err(_) => {
                    warn!("Shutdown timeout of {:?} elapsed, aborting open requests", timeout);
                    api_task.abort();
                }
            }
        }
    }

    info!("🧹 Performing final cleanup...");
    if let Err(e) = db.close().await {
        warn!("Error closing database connection: {}", e);
    } else {
        info!("✅ Database connection closed");
    }

    info!("👋 Electricity billing service shutdown complete");
    Ok(())
}
