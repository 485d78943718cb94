//! Walks the day list of a timetable and turns every entry into events.
//!
//! The expected shape is:
//!
//! ```text
//! ul                       day list
//! └── li "poniedziałek"    day block, day name is the first child node
//!     └── ul               entries
//!         └── li "godz. 08:15-09:45 ..."
//! ```

use chrono::Weekday;
use scraper::{ElementRef, Node};

use super::entry::{TimeRange, extract};
use super::event::EventOccurrence;
use super::organizer::guess_organizer;
use super::recurrence::expand;
use super::weekday::{WeekdayResolver, weekday_from_name};
use super::ScheduleContext;

/// Read-only view of a parsed document node.
pub trait ScheduleNode: Sized {
    /// Element children in document order.
    fn child_elements(&self) -> Vec<Self>;

    /// Trimmed text of the first child node (text or element). `None`
    /// when there is no child or it has no text.
    fn leading_text(&self) -> Option<String>;

    /// Trimmed text of the whole subtree.
    fn text_content(&self) -> String;
}

impl ScheduleNode for ElementRef<'_> {
    fn child_elements(&self) -> Vec<Self> {
        self.children().filter_map(ElementRef::wrap).collect()
    }

    fn leading_text(&self) -> Option<String> {
        let first = self.first_child()?;
        let text: String = match first.value() {
            Node::Text(text) => (**text).to_string(),
            Node::Element(_) => ElementRef::wrap(first)?.text().collect(),
            _ => return None,
        };
        let text = text.trim();
        (!text.is_empty()).then(|| text.to_string())
    }

    fn text_content(&self) -> String {
        self.text().collect::<String>().trim().to_string()
    }
}

pub fn walk<N: ScheduleNode>(day_list: &N, ctx: &ScheduleContext) -> Vec<EventOccurrence> {
    let resolver = ctx.resolver();
    let mut events = Vec::new();

    for day_block in day_list.child_elements() {
        let Some(day_name) = day_block.leading_text() else {
            continue;
        };
        let Some(weekday) = weekday_from_name(&day_name) else {
            tracing::debug!("Skipping day block {:?}", day_name);
            continue;
        };
        let Some(entries) = day_block.child_elements().into_iter().next() else {
            tracing::debug!("Day block {:?} has no entries", day_name);
            continue;
        };

        for entry in entries.child_elements() {
            let text = entry.text_content();
            if text.is_empty() {
                continue;
            }
            events.extend(occurrences(weekday, &text, &resolver, &ctx.email_domain));
        }
    }

    events
}

fn occurrences(
    weekday: Weekday,
    text: &str,
    resolver: &WeekdayResolver,
    email_domain: &str,
) -> Vec<EventOccurrence> {
    let entry = extract(weekday, text);

    let Some(TimeRange { start, end }) = entry.time else {
        tracing::warn!("Skipping entry without a time range: {:?}", text);
        return vec![];
    };
    let day = resolver.resolve(weekday);

    let organizer = entry
        .teacher_name
        .as_deref()
        .and_then(|name| guess_organizer(name, email_domain));

    expand(
        resolver.timezone(),
        day.and_time(start),
        day.and_time(end),
        entry.week_parity,
    )
        .into_iter()
        .map(|(start, end)| EventOccurrence {
            start,
            end,
            summary: entry.class_name.clone(),
            location: entry.room.clone(),
            description: text.to_string(),
            organizer: organizer.clone(),
        })
        .collect()
}
