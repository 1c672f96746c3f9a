//! Exercise log filtering: the one piece of real logic in this service.
//!
//! Given a user's stored exercise history and optional query bounds, compute
//! the filtered, truncated log. Pure and side-effect free; result shaping
//! into the HTTP payload happens in the inbound adapter.

use chrono::NaiveDate;

use super::exercise::Exercise;

/// Optional bounds applied to a user's exercise history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogQuery {
    /// Inclusive lower date bound. Absent means unbounded below.
    pub from: Option<NaiveDate>,
    /// Inclusive upper date bound. Absent means "today": future-dated
    /// entries are never included unless explicitly requested.
    pub to: Option<NaiveDate>,
    /// Keep only the first `limit` surviving entries in stored order.
    pub limit: Option<usize>,
}

/// Select the log entries for a query.
///
/// Entries survive iff their date lies in the inclusive window
/// `[from or epoch, to or today]`. Survivors keep their original insertion
/// order; `limit` truncates after filtering (it is not a sort).
pub fn filter_log<'a>(
    exercises: &'a [Exercise],
    query: &LogQuery,
    today: NaiveDate,
) -> Vec<&'a Exercise> {
    // chrono defines NaiveDate::default() as the Unix epoch (1970-01-01).
    let lower = query.from.unwrap_or_default();
    let upper = query.to.unwrap_or(today);

    let survivors = exercises
        .iter()
        .filter(|exercise| exercise.date() >= lower && exercise.date() <= upper);

    match query.limit {
        Some(limit) => survivors.take(limit).collect(),
        None => survivors.collect(),
    }
}

#[cfg(test)]
mod tests;
