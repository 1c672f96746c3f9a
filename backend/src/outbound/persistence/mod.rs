//! PostgreSQL persistence adapter built on Diesel with async connections.
//!
//! The user collection is stored document-style: one row per user with the
//! exercise history in a `jsonb` column, mirroring the containment model of
//! the data (exercises live inside their owner, read-modify-write on
//! append).

mod diesel_user_repository;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
