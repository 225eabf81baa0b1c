//! Driven port for the document store holding user records.
//!
//! Adapters receive validated values only; they never check the record
//! invariants themselves. Every failure is reported through
//! [`UserPersistenceError`] so callers can log it and decide on the outcome.

use async_trait::async_trait;

use crate::domain::{NewUser, User, UserFilter, UserId, UserPatch};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user store adapters.
    pub enum UserPersistenceError {
        /// Store connection could not be established.
        Connection { message: String } => "user store connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user store query failed: {message}",
        /// An explicit identifier collides with an existing record.
        DuplicateId { id: String } => "user id {id} is already taken",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Return every record matching `filter`, in store order.
    async fn find(&self, filter: &UserFilter) -> Result<Vec<User>, UserPersistenceError>;

    /// Fetch a record by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Persist a new record, generating its identifier when none was requested.
    async fn insert(&self, user: &NewUser) -> Result<User, UserPersistenceError>;

    /// Apply `patch` to the record with `id`, returning the updated record or
    /// `None` when no record matched.
    async fn update(
        &self,
        id: &UserId,
        patch: &UserPatch,
    ) -> Result<Option<User>, UserPersistenceError>;

    /// Remove the record with `id`, returning whether one was removed.
    async fn delete(&self, id: &UserId) -> Result<bool, UserPersistenceError>;
}
