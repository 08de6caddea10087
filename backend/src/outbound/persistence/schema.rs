//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Note owners.
    users (username) {
        /// Primary key: unique, URL-safe handle.
        username -> Varchar,
        /// Optional human-readable name.
        name -> Nullable<Varchar>,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Editable notes.
    notes (id) {
        /// Primary key: opaque note identifier.
        id -> Varchar,
        /// Owning user; references `users.username`.
        owner_username -> Varchar,
        /// Title, at most 100 characters.
        title -> Varchar,
        /// Body text.
        content -> Text,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(notes -> users (owner_username));
diesel::allow_tables_to_appear_in_same_query!(notes, users);
