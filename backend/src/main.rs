//! Users service entry-point: loads configuration, picks the store, and
//! serves the REST endpoints, health probes and OpenAPI docs.

mod server;

use std::ffi::OsString;
use std::io;
use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use users_service::domain::UserDirectoryService;
use users_service::inbound::http::health::HealthState;
use users_service::settings::ServiceSettings;

use server::{ServerConfig, build_user_repository, create_server, drain_on};

/// Load settings from `args`, the environment and any config file.
fn load_settings<I>(args: I) -> io::Result<ServiceSettings>
where
    I: IntoIterator<Item = OsString>,
{
    ServiceSettings::load_from_iter(args).map_err(|err| io::Error::other(err.to_string()))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    let dotenv = dotenvy::dotenv();

    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    match dotenv {
        Ok(path) => debug!(path = %path.display(), "loaded environment file"),
        Err(e) if e.not_found() => debug!("no environment file found"),
        Err(e) => warn!(error = %e, "failed to load environment file"),
    }

    let settings = load_settings(std::env::args_os())?;
    let repository = build_user_repository(&settings).await?;
    let users = Arc::new(UserDirectoryService::new(repository));

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(settings.host(), settings.port(), users);
    let server = create_server(health_state.clone(), config)?;
    actix_web::rt::spawn(drain_on(
        tokio::signal::ctrl_c(),
        health_state,
        server.handle(),
    ));
    info!(
        host = settings.host(),
        port = settings.port(),
        "users service listening"
    );
    server.await
}

#[cfg(test)]
mod tests {
    use super::*;
    use env_lock::lock_env;
    use rstest::rstest;

    #[rstest]
    fn settings_load_from_the_environment() {
        let _guard = lock_env([
            ("USERS_HOST", Some("127.0.0.1".to_owned())),
            ("USERS_PORT", Some("4100".to_owned())),
            ("USERS_DATABASE_URL", None::<String>),
        ]);

        let settings =
            load_settings([OsString::from("users-service")]).expect("settings load");

        assert_eq!(settings.host(), "127.0.0.1");
        assert_eq!(settings.port(), 4100);
    }
}
