use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError};

/// Installs the global tracing subscriber.
///
/// Log filtering follows `RUST_LOG`, defaulting to `info` when unset or invalid.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the `exercise` table exists. This function must
/// complete successfully before the application can serve requests; there is no retry.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await.inspect_err(|e| {
        tracing::error!("Could not connect to the database: {}", e);
    })?;

    Migrator::up(&db, None).await?;

    tracing::info!("Successfully connected to the database");

    Ok(db)
}

/// Binds the TCP listener on all interfaces at the configured port.
pub async fn bind_listener(config: &Config) -> Result<TcpListener, AppError> {
    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;

    Ok(listener)
}
