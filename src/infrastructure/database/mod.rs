pub mod entities;
pub mod migrator;
pub mod repositories;

use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;
use url::Url;

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database URL (e.g., "sqlite://./electricity.db?mode=rwc")
    pub url: String,
    /// Upper bound on pooled connections
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://./electricity.db?mode=rwc".to_string(),
            max_connections: 5,
        }
    }
}

/// Connection URL safe for logs: any password is masked.
///
/// URLs that do not parse are reduced to their scheme.
pub fn redacted_url(raw: &str) -> String {
    match Url::parse(raw) {
        Ok(mut url) => {
            if url.password().is_some() {
                let _ = url.set_password(Some("***"));
            }
            url.to_string()
        }
        Err(_) => match raw.split_once("://") {
            Some((scheme, _)) => format!("{}://<redacted>", scheme),
            None => "<redacted>".to_string(),
        },
    }
}

/// Initialize database connection
pub async fn init_database(config: &DatabaseConfig) -> Result<DatabaseConnection, sea_orm::DbErr> {
    info!("Connecting to database: {}", redacted_url(&config.url));
    let mut opts = ConnectOptions::new(config.url.clone());
    opts.max_connections(config.max_connections)
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);
    let db = Database::connect(opts).await?;
    info!("Database connected successfully");
    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_is_masked() {
        let shown = redacted_url("postgres://billing:secret@db:5432/billing");

        assert!(!shown.contains("secret"));
        assert_eq!(shown, "postgres://billing:***@db:5432/billing");
    }

    #[test]
    fn urls_without_password_are_kept() {
        assert_eq!(
            redacted_url("postgres://billing@db/billing"),
            "postgres://billing@db/billing"
        );
        assert_eq!(redacted_url("sqlite::memory:"), "sqlite::memory:");
    }

    #[test]
    fn unparseable_url_keeps_only_scheme() {
        assert_eq!(
            redacted_url("postgres://u:secret@[::1/billing"),
            "postgres://<redacted>"
        );
        assert_eq!(redacted_url("not a url"), "<redacted>");
    }
}
