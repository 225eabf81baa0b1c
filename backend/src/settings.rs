//! Service configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `USERS_*` environment variables or a config
//! file. A `.env` file is loaded into the environment first by `main`.

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

/// Problems turning settings into a usable database URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// Some connection parts were given but a required one is absent.
    #[error("database settings are incomplete: missing {missing}")]
    IncompleteDatabase { missing: &'static str },
    /// The parts do not form a valid URL.
    #[error("database settings do not form a valid URL: {message}")]
    InvalidDatabaseUrl { message: String },
}

/// Configuration values for the users service.
#[derive(Debug, Clone, Default, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USERS")]
pub struct ServiceSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// Port to bind.
    pub port: Option<u16>,
    /// Full PostgreSQL URL; takes precedence over the `db_*` parts.
    pub database_url: Option<String>,
    /// Database user name.
    pub db_user: Option<String>,
    /// Database password.
    pub db_password: Option<String>,
    /// Database host, optionally with `:port`.
    pub db_host: Option<String>,
    /// Database name.
    pub db_name: Option<String>,
    /// Upper bound on pooled connections.
    pub db_max_connections: Option<u32>,
    /// Apply embedded migrations before serving.
    #[ortho_config(default = false)]
    pub run_migrations: bool,
}

impl ServiceSettings {
    /// Interface to bind, falling back to all interfaces.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Port to bind, falling back to 3000.
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections.unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
    }

    /// Resolve the database URL.
    ///
    /// Returns `Ok(None)` when no database setting is present at all, in which
    /// case the service runs on the in-memory store.
    ///
    /// # Errors
    ///
    /// Fails when only some connection parts are set, or when they cannot be
    /// assembled into a URL.
    pub fn database_url(&self) -> Result<Option<String>, SettingsError> {
        if let Some(url) = self.database_url.as_deref() {
            return Ok(Some(url.to_owned()));
        }

        let parts = [
            &self.db_user,
            &self.db_password,
            &self.db_host,
            &self.db_name,
        ];
        if parts.iter().all(|part| part.is_none()) {
            return Ok(None);
        }

        let host = self
            .db_host
            .as_deref()
            .ok_or(SettingsError::IncompleteDatabase { missing: "db_host" })?;
        let name = self
            .db_name
            .as_deref()
            .ok_or(SettingsError::IncompleteDatabase { missing: "db_name" })?;

        compose_database_url(host, name, self.db_user.as_deref(), self.db_password.as_deref())
            .map(Some)
    }
}

fn compose_database_url(
    host: &str,
    name: &str,
    user: Option<&str>,
    password: Option<&str>,
) -> Result<String, SettingsError> {
    let invalid = |message: String| SettingsError::InvalidDatabaseUrl { message };

    let mut url = Url::parse(&format!("postgres://{host}"))
        .map_err(|err| invalid(format!("host {host:?}: {err}")))?;
    if let Some(user) = user {
        url.set_username(user)
            .map_err(|()| invalid("user name rejected".to_owned()))?;
    }
    if let Some(password) = password {
        url.set_password(Some(password))
            .map_err(|()| invalid("password rejected".to_owned()))?;
    }
    url.path_segments_mut()
        .map_err(|()| invalid("URL cannot carry a database name".to_owned()))?
        .clear()
        .push(name);
    Ok(url.into())
}
