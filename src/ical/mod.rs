//! iCalendar output for schedule events.

use chrono::{DateTime, Utc};
use icalendar::{Calendar, Component, Event, EventLike, Property};

use crate::schedule::EventOccurrence;

/// Renders `events` as a `METHOD:REQUEST` calendar.
///
/// `stamp` becomes the `DTSTAMP` of every event and UIDs are derived from
/// the event's position and start time, so the same inputs always give
/// the same document.
pub fn render_calendar(name: &str, stamp: DateTime<Utc>, events: &[EventOccurrence]) -> String {
    let mut calendar = Calendar::new();
    calendar.name(name);
    calendar.append_property(Property::new("METHOD", "REQUEST"));

    for (index, occurrence) in events.iter().enumerate() {
        calendar.push(to_event(name, index, stamp, occurrence));
    }

    calendar.to_string()
}

fn to_event(calendar_name: &str, index: usize, stamp: DateTime<Utc>, occurrence: &EventOccurrence) -> Event {
    let start = occurrence.start.with_timezone(&Utc);
    let end = occurrence.end.with_timezone(&Utc);
    let uid = format!(
        "{}-{}@{}",
        start.format("%Y%m%dT%H%M%SZ"),
        index,
        calendar_name.to_lowercase()
    );

    let mut event = Event::new();
    event
        .uid(&uid)
        .timestamp(stamp)
        .starts(start)
        .ends(end)
        .description(&occurrence.description);

    if let Some(summary) = &occurrence.summary {
        event.summary(summary);
    }
    if let Some(location) = &occurrence.location {
        event.location(location);
    }
    if let Some(organizer) = &occurrence.organizer {
        let mut property = Property::new("ORGANIZER", &format!("mailto:{}", organizer.email));
        property.add_parameter("CN", &param_value(&organizer.name));
        event.append_property(property);
    }

    event.done()
}

/// Parameter values containing `,`, `;` or `:` must be quoted, and a
/// quoted value can't itself hold a double quote.
fn param_value(value: &str) -> String {
    if value.contains([',', ';', ':', '"']) {
        format!("\"{}\"", value.replace('"', "'"))
    } else {
        value.to_string()
    }
}
