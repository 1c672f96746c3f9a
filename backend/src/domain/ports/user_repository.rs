//! Port abstraction for user persistence adapters and their errors.

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::{User, UserId};

/// Persistence errors raised by user repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserPersistenceError {
    /// Repository connection could not be established.
    #[error("user repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("user repository query failed: {message}")]
    Query { message: String },
}

impl UserPersistenceError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Document-store view of the user collection.
///
/// Each operation maps to a single document read or write; there is no
/// transaction spanning calls, so a read-modify-write pair from two
/// concurrent requests can race (last write wins). That limitation is
/// accepted, not guarded against.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a freshly registered user.
    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError>;

    /// Fetch every user record in registration order.
    async fn find_all(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Replace the stored record for an existing user.
    async fn save(&self, user: &User) -> Result<(), UserPersistenceError>;
}

/// In-memory repository used by tests and as the fallback when no database
/// is configured.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: &User) -> Result<(), UserPersistenceError> {
        self.users
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(user.clone());
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        Ok(self
            .users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        Ok(self
            .users
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|user| user.id() == id)
            .cloned())
    }

    async fn save(&self, user: &User) -> Result<(), UserPersistenceError> {
        let mut users = self.users.write().unwrap_or_else(PoisonError::into_inner);
        match users.iter_mut().find(|stored| stored.id() == user.id()) {
            Some(stored) => {
                *stored = user.clone();
                Ok(())
            }
            None => Err(UserPersistenceError::query("user not found for update")),
        }
    }
}
