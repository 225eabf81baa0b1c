//! In-process document collection implementing the `UserRepository` port.
//!
//! Used when no database is configured and by the test suites. Records keep
//! their insertion order, and every operation holds the collection lock for
//! its whole duration, so each write is atomic per document.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{NewUser, User, UserFilter, UserId, UserPatch};

/// Volatile user store.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    documents: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    /// Whether the collection holds no records.
    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find(&self, filter: &UserFilter) -> Result<Vec<User>, UserPersistenceError> {
        let documents = self.documents.read().await;
        Ok(documents
            .iter()
            .filter(|user| filter.matches(user))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let documents = self.documents.read().await;
        Ok(documents.iter().find(|user| user.id() == id).cloned())
    }

    async fn insert(&self, user: &NewUser) -> Result<User, UserPersistenceError> {
        let mut documents = self.documents.write().await;
        let id = match user.id() {
            Some(id) if documents.iter().any(|existing| existing.id() == id) => {
                return Err(UserPersistenceError::duplicate_id(id.to_string()));
            }
            Some(id) => *id,
            None => loop {
                let candidate = UserId::random();
                if documents.iter().all(|existing| existing.id() != &candidate) {
                    break candidate;
                }
            },
        };

        let stored = user.clone().into_user(id);
        documents.push(stored.clone());
        Ok(stored)
    }

    async fn update(
        &self,
        id: &UserId,
        patch: &UserPatch,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut documents = self.documents.write().await;
        let Some(slot) = documents.iter_mut().find(|user| user.id() == id) else {
            return Ok(None);
        };
        *slot = patch.apply_to(slot);
        Ok(Some(slot.clone()))
    }

    async fn delete(&self, id: &UserId) -> Result<bool, UserPersistenceError> {
        let mut documents = self.documents.write().await;
        let before = documents.len();
        documents.retain(|user| user.id() != id);
        Ok(documents.len() != before)
    }
}
