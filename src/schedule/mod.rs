//! Turns a weekly timetable page into concrete calendar events.
//!
//! Everything in here is synchronous and free of I/O. Fetching the page
//! and writing the calendar happen elsewhere.

pub mod entry;
mod error;
mod event;
pub mod organizer;
pub mod recurrence;
pub mod walker;
pub mod weekday;

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use scraper::{Html, Selector};

pub use error::ScheduleError;
pub use event::{EventOccurrence, Organizer};
pub use weekday::{Clock, FixedClock, SystemClock, WeekdayResolver};

/// Day lists sit directly inside a section. Older plans may be left on
/// the page above the current one.
static DAY_LIST: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("section > ul").expect("Invalid day list selector"));

/// Per-invocation inputs. "now" is read from the clock exactly once.
#[derive(Clone, Debug)]
pub struct ScheduleContext {
    pub now: DateTime<Utc>,
    pub timezone: Tz,
    pub email_domain: String,
}

impl ScheduleContext {
    pub fn new(clock: &dyn Clock, timezone: Tz, email_domain: impl Into<String>) -> Self {
        Self {
            now: clock.now(),
            timezone,
            email_domain: email_domain.into(),
        }
    }

    pub fn resolver(&self) -> WeekdayResolver {
        WeekdayResolver::new(self.now, self.timezone)
    }
}

/// Parses the timetable HTML and returns the events of the last day
/// list on the page, in document order.
pub fn build_schedule(
    html: &str,
    ctx: &ScheduleContext,
) -> Result<Vec<EventOccurrence>, ScheduleError> {
    let document = Html::parse_document(html);
    let day_list = document
        .select(&DAY_LIST)
        .last()
        .ok_or(ScheduleError::MissingScheduleList)?;

    let events = walker::walk(&day_list, ctx);
    tracing::debug!("Built {} events from timetable", events.len());
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Europe::Warsaw;

    fn context() -> ScheduleContext {
        let now = DateTime::parse_from_rfc3339("2025-01-08T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        ScheduleContext::new(&FixedClock(now), Warsaw, "pb.edu.pl")
    }

    #[test]
    fn it_fails_without_a_day_list() {
        let html = "<html><body><p>Brak planu</p><ul><li>poniedziałek</li></ul></body></html>";
        let result = build_schedule(html, &context());
        assert!(matches!(result, Err(ScheduleError::MissingScheduleList)));
    }

    #[test]
    fn it_returns_no_events_for_an_empty_day_list() {
        let html = "<section><ul></ul></section>";
        let events = build_schedule(html, &context()).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn it_uses_the_last_day_list() {
        let html = r#"
            <section><ul><li>poniedziałek<ul>
                <li>godz. 12:00-13:30 Wykład z Stary plan, prowadzący Adam Nowak w sali 1, </li>
            </ul></li></ul></section>
            <section><ul><li>wtorek<ul>
                <li>godz. 10:00-11:30 Wykład z Nowy plan, prowadzący Adam Nowak w sali 1, (tyg. II)</li>
            </ul></li></ul></section>
        "#;

        let events = build_schedule(html, &context()).unwrap();

        assert_eq!(events.len(), 3);
        assert!(events.iter().all(|e| e.summary.as_deref() == Some("Nowy plan")));
    }

    #[test]
    fn it_reads_now_once_per_context() {
        let ctx = context();
        assert_eq!(ctx.now, ctx.clone().now);
        assert_eq!(ctx.resolver().timezone(), Warsaw);
    }
}
