//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::users_list;

/// Row struct for reading from the `users_list` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users_list)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub job: String,
    #[expect(dead_code, reason = "ordering column, read for completeness")]
    pub created_at: DateTime<Utc>,
}

/// Insertable struct for new user documents.
///
/// A `None` id inserts `DEFAULT`, letting the database generate one.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users_list)]
pub(crate) struct NewUserRow<'a> {
    pub id: Option<Uuid>,
    pub name: &'a str,
    pub job: &'a str,
}

/// Changeset for partial updates; `None` fields are left untouched.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users_list)]
pub(crate) struct UserChangeset<'a> {
    pub name: Option<&'a str>,
    pub job: Option<&'a str>,
}
