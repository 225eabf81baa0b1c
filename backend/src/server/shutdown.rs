//! Graceful shutdown: flip the probes to draining, then stop the listener.

use std::future::Future;
use std::io;

use actix_web::dev::ServerHandle;
use actix_web::web;
use tracing::{info, warn};

use users_service::inbound::http::health::HealthState;

/// Wait for `signal`, mark the process as draining and stop the server,
/// letting in-flight requests finish.
///
/// A failing signal listener is logged and leaves the server running.
pub async fn drain_on<F>(signal: F, health_state: web::Data<HealthState>, handle: ServerHandle)
where
    F: Future<Output = io::Result<()>>,
{
    if let Err(err) = signal.await {
        warn!(error = %err, "shutdown signal listener failed");
        return;
    }

    info!("shutdown requested, draining");
    health_state.mark_draining();
    handle.stop(true).await;
}
