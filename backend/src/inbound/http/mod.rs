//! HTTP inbound adapter exposing the REST endpoints.

pub mod error;
pub mod exercises;
pub mod files;
pub mod health;
pub mod logs;
pub mod state;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod users;
pub mod validation;

pub use error::ApiResult;
