//! Row structs and conversion between database rows and domain users.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;
use uuid::Uuid;

use crate::domain::ports::UserPersistenceError;
use crate::domain::{Exercise, User, UserId, Username};

use super::schema::users;

/// A full `users` row as read from the database.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub username: String,
    pub exercises: Value,
    #[expect(dead_code, reason = "selected for ordering; not carried into the domain")]
    pub created_at: DateTime<Utc>,
}

/// Insertable row for a fresh registration; `created_at` uses the column
/// default.
#[derive(Debug, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow {
    pub id: Uuid,
    pub username: String,
    pub exercises: Value,
}

/// Serialize a user's exercise history for the `jsonb` column.
pub(crate) fn exercises_to_json(user: &User) -> Result<Value, UserPersistenceError> {
    serde_json::to_value(user.exercises())
        .map_err(|err| UserPersistenceError::query(format!("exercise encoding failed: {err}")))
}

pub(crate) fn user_to_new_row(user: &User) -> Result<NewUserRow, UserPersistenceError> {
    Ok(NewUserRow {
        id: *user.id().as_uuid(),
        username: user.username().to_string(),
        exercises: exercises_to_json(user)?,
    })
}

/// Rebuild a domain user from a stored row.
///
/// Stored data is revalidated on the way out; a record that no longer
/// satisfies domain invariants is surfaced as a query error rather than
/// silently accepted.
pub(crate) fn row_to_user(row: UserRow) -> Result<User, UserPersistenceError> {
    let username = Username::new(row.username)
        .map_err(|err| UserPersistenceError::query(format!("corrupt user record: {err}")))?;
    let exercises: Vec<Exercise> = serde_json::from_value(row.exercises)
        .map_err(|err| UserPersistenceError::query(format!("corrupt exercise history: {err}")))?;
    Ok(User::from_parts(
        UserId::from_uuid(row.id),
        username,
        exercises,
    ))
}
