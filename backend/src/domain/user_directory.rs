//! Data-access service implementing the [`UserDirectory`] port.
//!
//! The service owns the record rules: it parses identifiers, validates drafts,
//! and turns store failures into typed outcomes after logging them. Lookups
//! and deletions fold malformed identifiers and store failures into the
//! not-found answer; updates keep the three outcomes apart.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};

use crate::domain::ports::{
    InsertError, UpdateFailure, UpdateOutcome, UserDirectory, UserDirectoryError,
    UserPersistenceError, UserRepository,
};
use crate::domain::{User, UserDraft, UserFilter, UserId, UserPatchDraft};

/// [`UserDirectory`] backed by an injected [`UserRepository`].
#[derive(Clone)]
pub struct UserDirectoryService {
    repository: Arc<dyn UserRepository>,
}

impl UserDirectoryService {
    /// Create a service over the given store.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    async fn list(&self, filter: UserFilter) -> Result<Vec<User>, UserDirectoryError> {
        self.repository.find(&filter).await.map_err(|err| {
            error!(error = %err, ?filter, "listing users failed");
            UserDirectoryError::from(err)
        })
    }
}

fn parse_id(raw: &str) -> Option<UserId> {
    match UserId::new(raw) {
        Ok(id) => Some(id),
        Err(err) => {
            debug!(id = raw, error = %err, "rejected user id");
            None
        }
    }
}

fn log_store_failure(operation: &'static str, id: &UserId, err: &UserPersistenceError) {
    error!(operation, %id, error = %err, "user store operation failed");
}

#[async_trait]
impl UserDirectory for UserDirectoryService {
    async fn find_all(&self) -> Result<Vec<User>, UserDirectoryError> {
        self.list(UserFilter::all()).await
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<User>, UserDirectoryError> {
        self.list(UserFilter::by_name(name)).await
    }

    async fn find_by_job(&self, job: &str) -> Result<Vec<User>, UserDirectoryError> {
        self.list(UserFilter::by_job(job)).await
    }

    async fn find_by_name_and_job(
        &self,
        name: &str,
        job: &str,
    ) -> Result<Vec<User>, UserDirectoryError> {
        self.list(UserFilter::by_name_and_job(name, job)).await
    }

    async fn find_by_id(&self, id: &str) -> Option<User> {
        let id = parse_id(id)?;
        match self.repository.find_by_id(&id).await {
            Ok(found) => found,
            Err(err) => {
                log_store_failure("find_by_id", &id, &err);
                None
            }
        }
    }

    async fn insert(&self, draft: UserDraft) -> Result<User, InsertError> {
        let new_user = draft.validate().map_err(|err| {
            debug!(error = %err, "rejected user candidate");
            InsertError::from(err)
        })?;

        let stored = self.repository.insert(&new_user).await.map_err(|err| {
            error!(error = %err, "storing user failed");
            InsertError::from(err)
        })?;
        debug!(id = %stored.id(), "user stored");
        Ok(stored)
    }

    async fn update_by_id(&self, id: &str, patch: UserPatchDraft) -> UpdateOutcome {
        let Some(id) = parse_id(id) else {
            return UpdateOutcome::Failed(UpdateFailure::MalformedId);
        };
        let patch = match patch.validate() {
            Ok(patch) => patch,
            Err(err) => {
                debug!(%id, error = %err, "rejected user update");
                return UpdateOutcome::Failed(UpdateFailure::Validation(err));
            }
        };

        match self.repository.update(&id, &patch).await {
            Ok(Some(user)) => UpdateOutcome::Updated(user),
            Ok(None) => UpdateOutcome::NotFound,
            Err(err) => {
                log_store_failure("update", &id, &err);
                UpdateOutcome::Failed(UpdateFailure::Store(err))
            }
        }
    }

    async fn delete_by_id(&self, id: &str) -> bool {
        let Some(id) = parse_id(id) else {
            return false;
        };
        match self.repository.delete(&id).await {
            Ok(removed) => removed,
            Err(err) => {
                log_store_failure("delete", &id, &err);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests;
