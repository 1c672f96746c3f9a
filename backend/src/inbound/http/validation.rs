//! Shared validation helpers for inbound HTTP adapters.
//!
//! Each helper produces an [`Error`] carrying `details.field` so clients can
//! tell which input was rejected. Empty strings are treated as absent values,
//! matching what browser forms submit for untouched inputs.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;

use crate::domain::exercise::parse_date;
use crate::domain::{Description, DurationMinutes, Error, UserId};

/// Validation error codes attached to `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FailureCode {
    MissingField,
    InvalidUuid,
    InvalidDate,
    InvalidInteger,
    InvalidValue,
}

impl FailureCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::MissingField => "missing_field",
            Self::InvalidUuid => "invalid_uuid",
            Self::InvalidDate => "invalid_date",
            Self::InvalidInteger => "invalid_integer",
            Self::InvalidValue => "invalid_value",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldName(&'static str);

impl FieldName {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

fn field_error(field: FieldName, message: String, code: FailureCode) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    field_error(
        field,
        format!("missing required field: {name}"),
        FailureCode::MissingField,
    )
}

/// A value that arrives as a JSON number or as a string (form posts only
/// carry strings).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum IntOrString {
    Int(i64),
    Text(String),
}

/// Parse a user id path segment.
pub(crate) fn parse_user_id(raw: &str) -> Result<UserId, Error> {
    UserId::parse(raw).map_err(|_| {
        let field = FieldName::new("id");
        field_error(
            field,
            "id must be a valid UUID".to_owned(),
            FailureCode::InvalidUuid,
        )
    })
}

/// Parse the required exercise description, treating blank input as absent.
pub(crate) fn parse_description(value: Option<String>) -> Result<Description, Error> {
    let field = FieldName::new("description");
    let raw = value
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| missing_field_error(field))?;
    Description::new(raw).map_err(|err| field_error(field, err.to_string(), FailureCode::InvalidValue))
}

/// Parse the required exercise duration from a number or numeric string.
pub(crate) fn parse_duration(value: Option<IntOrString>) -> Result<DurationMinutes, Error> {
    let field = FieldName::new("duration");
    let minutes = match value {
        None => return Err(missing_field_error(field)),
        Some(IntOrString::Int(minutes)) => minutes,
        Some(IntOrString::Text(raw)) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Err(missing_field_error(field));
            }
            trimmed.parse::<i64>().map_err(|_| {
                field_error(
                    field,
                    "duration must be an integer number of minutes".to_owned(),
                    FailureCode::InvalidInteger,
                )
            })?
        }
    };
    DurationMinutes::new(minutes)
        .map_err(|err| field_error(field, err.to_string(), FailureCode::InvalidValue))
}

/// Parse an optional `YYYY-MM-DD` field (body `date`, query `from`/`to`).
pub(crate) fn parse_optional_date(
    value: Option<String>,
    field: FieldName,
) -> Result<Option<NaiveDate>, Error> {
    value
        .filter(|s| !s.is_empty())
        .map(|raw| {
            parse_date(&raw).map_err(|err| field_error(field, err.to_string(), FailureCode::InvalidDate))
        })
        .transpose()
}

/// Parse the optional `limit` query parameter.
///
/// An empty value counts as absent; a present-but-non-numeric value is
/// rejected outright.
pub(crate) fn parse_optional_limit(value: Option<String>) -> Result<Option<usize>, Error> {
    value
        .filter(|s| !s.is_empty())
        .map(|raw| {
            raw.trim().parse::<usize>().map_err(|_| {
                field_error(
                    FieldName::new("limit"),
                    "limit must be a non-negative integer".to_owned(),
                    FailureCode::InvalidInteger,
                )
            })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::Value;

    use super::*;

    fn details(err: &Error) -> &Value {
        err.details().expect("details present")
    }

    #[rstest]
    #[case(None)]
    #[case(Some(String::new()))]
    #[case(Some("   ".to_owned()))]
    fn description_absent_or_blank_is_missing(#[case] value: Option<String>) {
        let err = parse_description(value).expect_err("missing description");
        assert_eq!(details(&err)["code"], "missing_field");
        assert_eq!(details(&err)["field"], "description");
    }

    #[rstest]
    #[case(IntOrString::Int(30))]
    #[case(IntOrString::Text("30".to_owned()))]
    #[case(IntOrString::Text(" 30 ".to_owned()))]
    fn duration_accepts_numbers_and_numeric_strings(#[case] value: IntOrString) {
        let duration = parse_duration(Some(value)).expect("valid duration");
        assert_eq!(duration.minutes(), 30);
    }

    #[rstest]
    #[case(Some(IntOrString::Text("half an hour".to_owned())), "invalid_integer")]
    #[case(Some(IntOrString::Int(0)), "invalid_value")]
    #[case(Some(IntOrString::Int(-10)), "invalid_value")]
    #[case(None, "missing_field")]
    fn duration_rejections_carry_codes(
        #[case] value: Option<IntOrString>,
        #[case] expected: &str,
    ) {
        let err = parse_duration(value).expect_err("invalid duration");
        assert_eq!(details(&err)["code"], expected);
    }

    #[test]
    fn empty_query_value_counts_as_absent() {
        let from = FieldName::new("from");
        assert_eq!(parse_optional_date(Some(String::new()), from), Ok(None));
        assert_eq!(parse_optional_limit(Some(String::new())), Ok(None));
    }

    #[rstest]
    #[case("abc")]
    #[case("-1")]
    #[case("2.5")]
    fn limit_rejects_non_numeric_input(#[case] raw: &str) {
        let err = parse_optional_limit(Some(raw.to_owned())).expect_err("invalid limit");
        assert_eq!(details(&err)["field"], "limit");
        assert_eq!(details(&err)["code"], "invalid_integer");
    }

    #[test]
    fn limit_zero_is_a_valid_value() {
        assert_eq!(parse_optional_limit(Some("0".to_owned())), Ok(Some(0)));
    }
}
