//! User Quotes Service entrypoint.
//!
//! Reads configuration from a TOML file, wires the storage backend and the
//! quote provider, and serves the REST API until a shutdown signal arrives.

use std::sync::Arc;

use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use user_quotes::application::users::UserService;
use user_quotes::domain::{QuoteProvider, Repository, User, UserId};
use user_quotes::infrastructure::database::migrator::Migrator;
use user_quotes::infrastructure::database::SeaOrmUserRepository;
use user_quotes::infrastructure::quotes::{HttpQuoteProvider, StaticQuoteProvider};
use user_quotes::infrastructure::storage::InMemoryUserRepository;
use user_quotes::shared::ShutdownCoordinator;
use user_quotes::{
    create_api_router, default_config_path, init_database, AppConfig, DatabaseConfig,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("UQS_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            // Initialize logging with configured level
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level)),
                )
                .init();
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            error!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    info!("Starting User Quotes Service...");

    // ── Storage backend ────────────────────────────────────────
    let (repo, db): (
        Arc<dyn Repository<User, UserId>>,
        Option<sea_orm::DatabaseConnection>,
    ) = if app_cfg.database.in_memory {
        info!("Using in-memory storage backend");
        (Arc::new(InMemoryUserRepository::new()), None)
    } else {
        let db_config = DatabaseConfig {
            url: app_cfg.database.connection_url(),
        };
        info!("Database: {}", db_config.url);

        let db = match init_database(&db_config).await {
            Ok(db) => db,
            Err(e) => {
                error!("Failed to connect to database: {}", e);
                return Err(e.into());
            }
        };

        info!("Running database migrations...");
        if let Err(e) = Migrator::up(&db, None).await {
            error!("Failed to run migrations: {}", e);
            return Err(e.into());
        }
        info!("Migrations completed");

        (Arc::new(SeaOrmUserRepository::new(db.clone())), Some(db))
    };

    // ── Quote provider ─────────────────────────────────────────
    let quotes: Arc<dyn QuoteProvider> = match app_cfg.quotes.url.as_deref() {
        Some(url) if !url.is_empty() => {
            info!("Quote provider: {}", url);
            Arc::new(HttpQuoteProvider::new(url))
        }
        _ => {
            info!(
                "Quote provider: static list ({} quotes)",
                app_cfg.quotes.quotes.len()
            );
            Arc::new(StaticQuoteProvider::new(app_cfg.quotes.quotes.clone()))
        }
    };

    // ── Service & router ───────────────────────────────────────
    let service = Arc::new(UserService::new(repo, quotes));
    let api_router = create_api_router(service);

    // Initialize shutdown coordinator
    let shutdown = ShutdownCoordinator::new(app_cfg.server.shutdown_timeout);
    let shutdown_signal = shutdown.signal();
    shutdown.start_signal_listener();

    // ── Serve ──────────────────────────────────────────────────
    let api_addr = app_cfg.server.address();
    let listener = tokio::net::TcpListener::bind(&api_addr).await?;
    info!("REST API server listening on http://{}", api_addr);
    info!("Swagger UI available at http://{}/docs/", api_addr);

    axum::serve(listener, api_router)
        .with_graceful_shutdown(async move {
            shutdown_signal.wait().await;
            info!("🛑 REST API server received shutdown signal");
        })
        .await?;

    // Perform final cleanup
    if let Some(db) = db {
        if let Err(e) = db.close().await {
            warn!("Error closing database connection: {}", e);
        } else {
            info!("✅ Database connection closed");
        }
    }

    info!("👋 User Quotes Service shutdown complete");
    Ok(())
}
