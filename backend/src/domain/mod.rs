//! Transport-agnostic domain model for the exercise tracker.
//!
//! The only component with real logic lives in [`log`]: filtering a user's
//! exercise history into the response log. Everything else is validated data
//! plus the persistence port in [`ports`].

pub mod error;
pub mod exercise;
pub mod log;
pub mod ports;
pub mod user;

pub use error::{Error, ErrorCode};
pub use exercise::{Description, DurationMinutes, Exercise, ExerciseValidationError};
pub use log::{LogQuery, filter_log};
pub use user::{User, UserId, UserValidationError, Username};
