use chrono::NaiveDate;
use rstest::rstest;

use super::*;
use crate::domain::exercise::{Description, DurationMinutes};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn exercise(label: &str, on: NaiveDate) -> Exercise {
    Exercise::new(
        Description::new(label).expect("valid description"),
        DurationMinutes::new(30).expect("valid duration"),
        on,
    )
}

/// January 2023 history: run 10th, swim 15th, lift 20th, row 25th.
fn history() -> Vec<Exercise> {
    [("run", 10), ("swim", 15), ("lift", 20), ("row", 25)]
        .into_iter()
        .map(|(label, day)| exercise(label, date(2023, 1, day)))
        .collect()
}

fn labels(entries: &[&Exercise]) -> Vec<String> {
    entries
        .iter()
        .map(|e| e.description().as_ref().to_owned())
        .collect()
}

const TODAY: fn() -> NaiveDate = || date(2023, 2, 1);

#[test]
fn no_bounds_keeps_everything_in_stored_order() {
    let history = history();
    let log = filter_log(&history, &LogQuery::default(), TODAY());
    assert_eq!(labels(&log), ["run", "swim", "lift", "row"]);
}

#[rstest]
#[case(Some(date(2023, 1, 15)), None, vec!["swim", "lift", "row"])]
#[case(None, Some(date(2023, 1, 20)), vec!["run", "swim", "lift"])]
#[case(Some(date(2023, 1, 15)), Some(date(2023, 1, 20)), vec!["swim", "lift"])]
#[case(Some(date(2023, 1, 26)), None, vec![])]
fn window_bounds_are_inclusive(
    #[case] from: Option<NaiveDate>,
    #[case] to: Option<NaiveDate>,
    #[case] expected: Vec<&str>,
) {
    let history = history();
    let query = LogQuery {
        from,
        to,
        limit: None,
    };
    assert_eq!(labels(&filter_log(&history, &query, TODAY())), expected);
}

#[test]
fn omitted_from_is_equivalent_to_the_epoch() {
    let history = history();
    let open = LogQuery::default();
    let epoch = LogQuery {
        from: Some(date(1970, 1, 1)),
        ..LogQuery::default()
    };
    assert_eq!(
        labels(&filter_log(&history, &open, TODAY())),
        labels(&filter_log(&history, &epoch, TODAY())),
    );
}

#[test]
fn omitted_to_excludes_future_dated_entries() {
    let mut history = history();
    history.push(exercise("time-travel", date(2023, 3, 1)));

    let log = filter_log(&history, &LogQuery::default(), TODAY());
    assert_eq!(labels(&log), ["run", "swim", "lift", "row"]);

    // An explicit future `to` does include them.
    let query = LogQuery {
        to: Some(date(2023, 3, 1)),
        ..LogQuery::default()
    };
    assert_eq!(filter_log(&history, &query, TODAY()).len(), 5);
}

#[test]
fn entry_dated_today_is_included() {
    let history = vec![exercise("run", TODAY())];
    assert_eq!(filter_log(&history, &LogQuery::default(), TODAY()).len(), 1);
}

#[rstest]
#[case(0, vec![])]
#[case(2, vec!["run", "swim"])]
#[case(10, vec!["run", "swim", "lift", "row"])]
fn limit_truncates_in_stored_order(#[case] limit: usize, #[case] expected: Vec<&str>) {
    let history = history();
    let query = LogQuery {
        limit: Some(limit),
        ..LogQuery::default()
    };
    assert_eq!(labels(&filter_log(&history, &query, TODAY())), expected);
}

#[test]
fn limit_applies_after_filtering() {
    let history = history();
    let query = LogQuery {
        from: Some(date(2023, 1, 15)),
        to: None,
        limit: Some(1),
    };
    // First survivor, not first stored entry.
    assert_eq!(labels(&filter_log(&history, &query, TODAY())), ["swim"]);
}
