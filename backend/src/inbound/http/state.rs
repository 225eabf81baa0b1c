//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::UserDirectory;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserDirectory>,
}

impl HttpState {
    /// Construct state from the user data-access port.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use users_service::domain::UserDirectoryService;
    /// use users_service::inbound::http::state::HttpState;
    /// use users_service::outbound::InMemoryUserRepository;
    ///
    /// let directory = UserDirectoryService::new(Arc::new(InMemoryUserRepository::new()));
    /// let _state = HttpState::new(Arc::new(directory));
    /// ```
    pub fn new(users: Arc<dyn UserDirectory>) -> Self {
        Self { users }
    }
}
