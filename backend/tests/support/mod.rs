//! Shared helpers for the users integration suites.
//!
//! Each file under `backend/tests/` compiles as its own crate and uses only
//! part of this module.
#![allow(dead_code)]

use std::sync::Arc;

use users_service::domain::UserDirectoryService;
use users_service::domain::ports::UserDirectory;
use users_service::outbound::InMemoryUserRepository;

/// Environment variable naming the PostgreSQL database used by adapter tests.
pub const TEST_DATABASE_URL_ENV: &str = "USERS_TEST_DATABASE_URL";

/// Return the adapter test database URL, or print a skip marker and return
/// `None` when it is not configured.
pub fn test_database_url(test_name: &str) -> Option<String> {
    match std::env::var(TEST_DATABASE_URL_ENV) {
        Ok(url) if !url.trim().is_empty() => Some(url),
        _ => {
            eprintln!("SKIP-TEST-DATABASE: {test_name} needs {TEST_DATABASE_URL_ENV}");
            None
        }
    }
}

/// Data-access service over a fresh in-memory store.
pub fn in_memory_directory() -> Arc<dyn UserDirectory> {
    Arc::new(UserDirectoryService::new(Arc::new(
        InMemoryUserRepository::new(),
    )))
}
