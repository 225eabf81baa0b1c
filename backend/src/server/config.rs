//! HTTP server configuration object and helpers.

use std::sync::Arc;

use users_service::domain::ports::UserDirectory;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: (String, u16),
    pub(crate) users: Arc<dyn UserDirectory>,
}

impl ServerConfig {
    /// Construct a server configuration for the given listener and
    /// data-access port.
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16, users: Arc<dyn UserDirectory>) -> Self {
        Self {
            bind_addr: (host.into(), port),
            users,
        }
    }
}
