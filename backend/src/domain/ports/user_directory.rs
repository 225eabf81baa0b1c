//! Driving port for the user data-access operations.
//!
//! HTTP handlers depend on this port only. It accepts raw identifiers and
//! unvalidated drafts, and answers with typed outcomes instead of adapter
//! errors, so handlers branch on values and never on store internals.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{User, UserDraft, UserPatchDraft, UserValidationError};

use super::UserPersistenceError;

/// Failure of a listing query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserDirectoryError {
    /// The store could not serve the query.
    #[error(transparent)]
    Store(#[from] UserPersistenceError),
}

/// Reasons an insertion was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InsertError {
    /// The candidate broke a record rule.
    #[error("invalid user: {0}")]
    Validation(#[from] UserValidationError),
    /// The explicitly requested identifier is already in use.
    #[error("user id {id} is already taken")]
    DuplicateId { id: String },
    /// The store failed.
    #[error(transparent)]
    Store(UserPersistenceError),
}

impl From<UserPersistenceError> for InsertError {
    fn from(error: UserPersistenceError) -> Self {
        match error {
            UserPersistenceError::DuplicateId { id } => Self::DuplicateId { id },
            other => Self::Store(other),
        }
    }
}

/// Result of a partial update.
///
/// Closed set: callers match every variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The record existed and now holds the returned values.
    Updated(User),
    /// The identifier is well formed but no record carries it.
    NotFound,
    /// The update could not be applied.
    Failed(UpdateFailure),
}

/// Why an update failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpdateFailure {
    /// The identifier could not be parsed.
    #[error("user id is malformed")]
    MalformedId,
    /// A supplied field broke a record rule.
    #[error("invalid update: {0}")]
    Validation(UserValidationError),
    /// The store failed.
    #[error(transparent)]
    Store(UserPersistenceError),
}

/// Data-access use cases over the user collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Every user, in store order.
    async fn find_all(&self) -> Result<Vec<User>, UserDirectoryError>;

    /// Users whose name equals `name` exactly.
    async fn find_by_name(&self, name: &str) -> Result<Vec<User>, UserDirectoryError>;

    /// Users whose job equals `job` exactly.
    async fn find_by_job(&self, job: &str) -> Result<Vec<User>, UserDirectoryError>;

    /// Users matching both `name` and `job` exactly.
    async fn find_by_name_and_job(
        &self,
        name: &str,
        job: &str,
    ) -> Result<Vec<User>, UserDirectoryError>;

    /// The user with `id`, or `None` when it is unknown, malformed, or the
    /// store failed.
    async fn find_by_id(&self, id: &str) -> Option<User>;

    /// Validate and store a new user.
    async fn insert(&self, draft: UserDraft) -> Result<User, InsertError>;

    /// Validate and apply the supplied fields to the user with `id`.
    async fn update_by_id(&self, id: &str, patch: UserPatchDraft) -> UpdateOutcome;

    /// Remove the user with `id`; `false` when it is unknown, malformed, or
    /// the store failed.
    async fn delete_by_id(&self, id: &str) -> bool;
}
