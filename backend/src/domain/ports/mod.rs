//! Driven ports: interfaces the domain needs the outside world to implement.

pub mod user_repository;

pub use user_repository::{InMemoryUserRepository, UserPersistenceError, UserRepository};
