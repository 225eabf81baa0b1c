//! Store selection at startup.
//!
//! With a database configured, a single connection attempt is made. When it
//! fails the error is logged and a lazy pool is used instead, so the listener
//! still starts and each request retries the connection on its own.

use std::io;
use std::sync::Arc;

use tracing::{error, info, warn};

use users_service::domain::ports::UserRepository;
use users_service::outbound::InMemoryUserRepository;
use users_service::outbound::persistence::{
    DbPool, DieselUserRepository, PoolConfig, apply_migrations,
};
use users_service::settings::ServiceSettings;

/// Build the store adapter described by `settings`.
///
/// # Errors
///
/// Returns [`io::Error`] when the database settings are inconsistent.
pub async fn build_user_repository(
    settings: &ServiceSettings,
) -> io::Result<Arc<dyn UserRepository>> {
    let database_url = settings
        .database_url()
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;

    let Some(database_url) = database_url else {
        warn!("no database configured; users are kept in memory only");
        return Ok(Arc::new(InMemoryUserRepository::new()));
    };

    let config = PoolConfig::new(&database_url).with_max_size(settings.db_max_connections());
    let pool = match DbPool::new(config.clone()).await {
        Ok(pool) => {
            info!("connected to the users database");
            if settings.run_migrations {
                migrate(database_url).await;
            }
            pool
        }
        Err(err) => {
            error!(error = %err, "could not connect to the users database");
            DbPool::new_lazy(config)
        }
    };

    Ok(Arc::new(DieselUserRepository::new(pool)))
}

async fn migrate(database_url: String) {
    match tokio::task::spawn_blocking(move || apply_migrations(&database_url)).await {
        Ok(Ok(applied)) => info!(applied, "database migrations applied"),
        Ok(Err(err)) => error!(error = %err, "database migrations failed"),
        Err(err) => error!(error = %err, "migration task panicked"),
    }
}
