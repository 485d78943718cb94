//! Expands a weekly class into its upcoming meetings.

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime};
use chrono_tz::Tz;

use super::entry::WeekParity;
use super::weekday::localize;

/// The current week plus four more.
pub const WEEKS_AHEAD: u64 = 5;

pub type Span = (DateTime<Tz>, DateTime<Tz>);

/// ISO-8601 week number of `date`. Days at the start of January may
/// belong to the last week of the previous year and vice versa.
pub fn iso_week(date: NaiveDate) -> u32 {
    date.iso_week().week()
}

/// Every weekly repetition of the span in local wall time, before any
/// parity filtering. Shifting the local date keeps the hour stable
/// across daylight saving changes.
pub fn candidate_weeks(start: NaiveDateTime, end: NaiveDateTime) -> Vec<(NaiveDateTime, NaiveDateTime)> {
    (0..WEEKS_AHEAD)
        .map(|week| {
            let shift = Days::new(7 * week);
            (start + shift, end + shift)
        })
        .collect()
}

/// The meetings of a class held in `start..end` (local wall time in `tz`)
/// this week, limited to weeks whose parity the class runs in. Each week
/// is placed in `tz` on its own, so a meeting that falls into a daylight
/// saving gap is dropped without affecting the other weeks.
pub fn expand(tz: Tz, start: NaiveDateTime, end: NaiveDateTime, parity: WeekParity) -> Vec<Span> {
    candidate_weeks(start, end)
        .into_iter()
        .filter(|(local_start, _)| parity.admits(iso_week(local_start.date())))
        .filter_map(|(local_start, local_end)| {
            let span = (localize(tz, local_start), localize(tz, local_end));
            if span.0.is_none() || span.1.is_none() {
                tracing::debug!("Dropping meeting at nonexistent local time {}", local_start);
            }
            Some((span.0?, span.1?))
        })
        .collect()
}
