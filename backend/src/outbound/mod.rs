//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed `users_list` store using Diesel ORM
//! - **memory**: volatile in-process store for local runs and tests
//!
//! Adapters are thin translators that convert between domain types and
//! infrastructure-specific representations. They contain no business logic.

pub mod memory;
pub mod persistence;

pub use memory::InMemoryUserRepository;
