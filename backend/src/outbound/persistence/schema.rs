//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `migrations/` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// User documents.
    ///
    /// `id` defaults to `gen_random_uuid()` so the database assigns
    /// identifiers unless the client supplied one.
    users_list (id) {
        /// Primary key: UUID identifier.
        id -> Uuid,
        /// Trimmed, non-empty user name.
        name -> Varchar,
        /// Trimmed job title of at least two characters.
        job -> Varchar,
        /// Insertion timestamp; defines the collection's natural order.
        created_at -> Timestamptz,
    }
}
