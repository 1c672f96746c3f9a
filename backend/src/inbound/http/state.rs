//! Shared HTTP adapter state.
//!
//! Handlers receive the repository port through `actix_web::web::Data` so
//! they stay testable without I/O; the dependency is injected explicitly at
//! construction time.

use std::sync::Arc;

use crate::domain::ports::UserRepository;
use crate::domain::{Error, User};
use crate::inbound::http::error::map_store_error;
use crate::inbound::http::validation::parse_user_id;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserRepository>,
}

impl HttpState {
    /// Construct state around a repository implementation.
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Resolve a path id to a stored user.
    ///
    /// Malformed ids map to 400 and unknown users to 404.
    pub(crate) async fn load_user(&self, raw_id: &str) -> Result<User, Error> {
        let id = parse_user_id(raw_id)?;
        self.users
            .find_by_id(&id)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| Error::not_found("user not found"))
    }
}
