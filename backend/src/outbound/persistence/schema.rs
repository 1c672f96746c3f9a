//! Diesel table definitions for the PostgreSQL schema.
//!
//! Schema migrations are managed outside this repository. The expected DDL:
//!
//! ```sql
//! CREATE TABLE users (
//!     id UUID PRIMARY KEY,
//!     username TEXT NOT NULL,
//!     exercises JSONB NOT NULL DEFAULT '[]'::jsonb,
//!     created_at TIMESTAMPTZ NOT NULL DEFAULT now()
//! );
//! ```

diesel::table! {
    /// Registered users with their embedded exercise history.
    users (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Name chosen at registration; duplicates are allowed.
        username -> Text,
        /// Append-only exercise history as a JSON array, insertion order
        /// preserved.
        exercises -> Jsonb,
        /// Registration timestamp; drives listing order.
        created_at -> Timestamptz,
    }
}
