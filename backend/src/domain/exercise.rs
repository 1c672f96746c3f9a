//! Exercise entry: a single logged activity owned by a user.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format accepted on input (`2023-01-15`).
const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Log output format matching JavaScript's `Date#toDateString`
/// (`Sun Jan 15 2023`).
const LOG_DATE_FORMAT: &str = "%a %b %d %Y";

/// Validation errors raised when constructing exercise components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExerciseValidationError {
    EmptyDescription,
    NonPositiveDuration,
    InvalidDate,
}

impl fmt::Display for ExerciseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "description must not be empty"),
            Self::NonPositiveDuration => {
                write!(f, "duration must be a positive number of minutes")
            }
            Self::InvalidDate => write!(f, "date must be a calendar date (YYYY-MM-DD)"),
        }
    }
}

impl std::error::Error for ExerciseValidationError {}

/// Free-text activity description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Description(String);

impl Description {
    /// Validate and construct a [`Description`] from owned input.
    pub fn new(description: impl Into<String>) -> Result<Self, ExerciseValidationError> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(ExerciseValidationError::EmptyDescription);
        }
        Ok(Self(description))
    }
}

impl AsRef<str> for Description {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Description> for String {
    fn from(value: Description) -> Self {
        value.0
    }
}

impl TryFrom<String> for Description {
    type Error = ExerciseValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Activity duration in whole minutes, always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct DurationMinutes(i64);

impl DurationMinutes {
    /// Validate and construct a [`DurationMinutes`] value.
    pub const fn new(minutes: i64) -> Result<Self, ExerciseValidationError> {
        if minutes <= 0 {
            return Err(ExerciseValidationError::NonPositiveDuration);
        }
        Ok(Self(minutes))
    }

    /// Duration in minutes.
    pub const fn minutes(self) -> i64 {
        self.0
    }
}

impl fmt::Display for DurationMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<DurationMinutes> for i64 {
    fn from(value: DurationMinutes) -> Self {
        value.0
    }
}

impl TryFrom<i64> for DurationMinutes {
    type Error = ExerciseValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A single logged activity entry.
///
/// Entries are immutable once appended to a user's history; there is no
/// update or delete operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    description: Description,
    duration: DurationMinutes,
    date: NaiveDate,
}

impl Exercise {
    /// Build an exercise from validated components.
    pub const fn new(description: Description, duration: DurationMinutes, date: NaiveDate) -> Self {
        Self {
            description,
            duration,
            date,
        }
    }

    /// Activity description.
    pub const fn description(&self) -> &Description {
        &self.description
    }

    /// Duration in minutes.
    pub const fn duration(&self) -> DurationMinutes {
        self.duration
    }

    /// Calendar date the activity took place.
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Human-readable date string used in log responses (`Sun Jan 15 2023`).
    pub fn date_string(&self) -> String {
        self.date.format(LOG_DATE_FORMAT).to_string()
    }
}

/// Parse a request-supplied calendar date (`YYYY-MM-DD`).
pub fn parse_date(raw: &str) -> Result<NaiveDate, ExerciseValidationError> {
    NaiveDate::parse_from_str(raw, INPUT_DATE_FORMAT)
        .map_err(|_| ExerciseValidationError::InvalidDate)
}
