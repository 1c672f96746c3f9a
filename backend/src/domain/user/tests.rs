use rstest::rstest;

use super::*;
use crate::domain::exercise::{Description, DurationMinutes};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[rstest]
#[case("")]
#[case("   ")]
fn username_rejects_blank_input(#[case] raw: &str) {
    assert_eq!(Username::new(raw), Err(UserValidationError::EmptyUsername));
}

#[test]
fn username_keeps_original_spelling() {
    let name = Username::new(" alice ").expect("valid username");
    assert_eq!(name.as_ref(), " alice ");
}

#[rstest]
#[case("not-a-uuid")]
#[case("")]
#[case("3fa85f64-5717-4562-b3fc")]
fn user_id_rejects_malformed_input(#[case] raw: &str) {
    assert_eq!(UserId::parse(raw), Err(UserValidationError::InvalidId));
}

#[test]
fn user_id_round_trips_through_string() {
    let id = UserId::random();
    let parsed = UserId::parse(id.to_string()).expect("round trip");
    assert_eq!(parsed, id);
}

#[test]
fn random_ids_are_distinct() {
    assert_ne!(UserId::random(), UserId::random());
}

#[test]
fn register_starts_with_empty_history() {
    let user = User::register(Username::new("alice").expect("valid username"));
    assert!(user.exercises().is_empty());
}

#[test]
fn add_exercise_preserves_insertion_order() {
    let mut user = User::register(Username::new("alice").expect("valid username"));
    for (label, day) in [("run", 15), ("swim", 10), ("lift", 20)] {
        user.add_exercise(Exercise::new(
            Description::new(label).expect("valid description"),
            DurationMinutes::new(30).expect("valid duration"),
            date(2023, 1, day),
        ));
    }

    let labels: Vec<_> = user
        .exercises()
        .iter()
        .map(|e| e.description().as_ref().to_owned())
        .collect();
    assert_eq!(labels, ["run", "swim", "lift"]);
}
