//! Anchors symbolic weekdays to concrete dates in the current local week.

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, TimeZone, Utc, Weekday};
use chrono_tz::Tz;

/// Source of the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that is stuck at a single instant
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Day names as they appear in the timetable, Monday first.
pub const DAY_NAMES: [(&str, Weekday); 7] = [
    ("poniedziałek", Weekday::Mon),
    ("wtorek", Weekday::Tue),
    ("środa", Weekday::Wed),
    ("czwartek", Weekday::Thu),
    ("piątek", Weekday::Fri),
    ("sobota", Weekday::Sat),
    ("niedziela", Weekday::Sun),
];

/// Exact, case-sensitive lookup of a timetable day name.
pub fn weekday_from_name(name: &str) -> Option<Weekday> {
    DAY_NAMES
        .iter()
        .find(|(day_name, _)| *day_name == name)
        .map(|(_, weekday)| *weekday)
}

/// Resolves weekdays against the Monday-first week that contains "now"
/// in the reference timezone.
#[derive(Clone, Copy, Debug)]
pub struct WeekdayResolver {
    monday: NaiveDate,
    tz: Tz,
}

impl WeekdayResolver {
    pub fn new(now: DateTime<Utc>, tz: Tz) -> Self {
        let today = now.with_timezone(&tz).date_naive();
        let since_monday = u64::from(today.weekday().num_days_from_monday());
        Self {
            monday: today - Days::new(since_monday),
            tz,
        }
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// The local date (taken at midnight) of `weekday` in the current week.
    pub fn resolve(&self, weekday: Weekday) -> NaiveDate {
        self.monday + Days::new(u64::from(weekday.num_days_from_monday()))
    }

}

/// Places a local wall time in `tz`. Returns `None` when the local time
/// does not exist, which only happens inside a daylight saving gap.
/// Ambiguous local times (the repeated hour in autumn) resolve to the
/// earlier instant.
pub(crate) fn localize(tz: Tz, local: NaiveDateTime) -> Option<DateTime<Tz>> {
    tz.from_local_datetime(&local).earliest()
}
