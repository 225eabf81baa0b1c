//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.
//!
//! Records live in the `users_list` table. Store order is creation order,
//! with the identifier as a tie-breaker for rows created in the same instant.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::{debug, warn};

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{NewUser, User, UserFilter, UserId, UserPatch};

use super::models::{NewUserRow, UserChangeset, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users_list;

/// Diesel-backed implementation of the `UserRepository` port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to domain user persistence errors.
fn map_pool_error(error: PoolError) -> UserPersistenceError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            UserPersistenceError::connection(message)
        }
    }
}

/// Map Diesel errors to domain user persistence errors.
///
/// Unique violations can only come from the primary key, so they surface as
/// duplicate identifiers carrying `id`.
fn map_diesel_error(error: diesel::result::Error, id: Option<&UserId>) -> UserPersistenceError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => match id {
            Some(id) => UserPersistenceError::duplicate_id(id.to_string()),
            None => UserPersistenceError::query("generated user id collided"),
        },
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            UserPersistenceError::connection("database connection error")
        }
        DieselError::NotFound => UserPersistenceError::query("record not found"),
        DieselError::QueryBuilderError(_) => UserPersistenceError::query("database query error"),
        _ => UserPersistenceError::query("database error"),
    }
}

/// Convert a database row to a domain user.
///
/// Rows are guarded by table constraints, so a failure here means the table
/// was written around the service.
fn row_to_user(row: UserRow) -> Result<User, UserPersistenceError> {
    User::try_from_strings(row.id.to_string(), row.name, row.job).map_err(|err| {
        warn!(id = %row.id, error = %err, "stored user row violates record rules");
        UserPersistenceError::query(format!("invalid stored user {}: {err}", row.id))
    })
}

fn rows_to_users(rows: Vec<UserRow>) -> Result<Vec<User>, UserPersistenceError> {
    rows.into_iter().map(row_to_user).collect()
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn find(&self, filter: &UserFilter) -> Result<Vec<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let mut query = users_list::table
            .select(UserRow::as_select())
            .order((users_list::created_at.asc(), users_list::id.asc()))
            .into_boxed();
        if let Some(name) = filter.name.as_deref() {
            query = query.filter(users_list::name.eq(name));
        }
        if let Some(job) = filter.job.as_deref() {
            query = query.filter(users_list::job.eq(job));
        }

        let rows: Vec<UserRow> = query
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, None))?;
        rows_to_users(rows)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<UserRow> = users_list::table
            .find(id.as_uuid())
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, Some(id)))?;
        row.map(row_to_user).transpose()
    }

    async fn insert(&self, user: &NewUser) -> Result<User, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let new_row = NewUserRow {
            id: user.id().map(|id| *id.as_uuid()),
            name: user.name().as_ref(),
            job: user.job().as_ref(),
        };
        let row: UserRow = diesel::insert_into(users_list::table)
            .values(&new_row)
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, user.id()))?;
        row_to_user(row)
    }

    async fn update(
        &self,
        id: &UserId,
        patch: &UserPatch,
    ) -> Result<Option<User>, UserPersistenceError> {
        // Diesel rejects an empty changeset; an empty patch is a plain read.
        if patch.is_empty() {
            return self.find_by_id(id).await;
        }

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let changeset = UserChangeset {
            name: patch.name().map(|name| name.as_ref()),
            job: patch.job().map(|job| job.as_ref()),
        };
        let row: Option<UserRow> = diesel::update(users_list::table.find(id.as_uuid()))
            .set(&changeset)
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, Some(id)))?;
        row.map(row_to_user).transpose()
    }

    async fn delete(&self, id: &UserId) -> Result<bool, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let removed = diesel::delete(users_list::table.find(id.as_uuid()))
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, Some(id)))?;
        Ok(removed > 0)
    }
}
