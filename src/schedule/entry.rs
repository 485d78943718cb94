//! Field extraction for a single timetable entry.
//!
//! The timetable has no markup inside an entry, only a sentence such as
//! `godz. 08:15-09:45 Wykład z Algorytmy, prowadzący dr Jan Kowalski w
//! sali 101, (tyg. I)`. Fields are pulled out by an ordered table of
//! rules. A rule that doesn't match leaves its fields empty and the
//! remaining rules still run.

use std::sync::LazyLock;

use chrono::{NaiveTime, Weekday};
use regex::{Captures, Regex};

static TIME_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:godz\.\s*)?(\d{1,2}):(\d{2})\s*[-–]\s*(\d{1,2}):(\d{2})").unwrap()
});

static TEACHER_AND_ROOM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"prowadzący\s+(.+?)\s+w sali\s+([^,]+?)\s*,").unwrap()
});

static CLASS_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\s)z\s+(.+),\s*prowadzący").unwrap());

/// Literal markers for classes that only run every other week.
const PARITY_MARKERS: [(&str, WeekParity); 2] = [
    ("(tyg. I)", WeekParity::OddWeeksOnly),
    ("(tyg. II)", WeekParity::EvenWeeksOnly),
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WeekParity {
    #[default]
    Any,
    OddWeeksOnly,
    EvenWeeksOnly,
}

impl WeekParity {
    pub fn from_text(text: &str) -> Self {
        PARITY_MARKERS
            .iter()
            .find(|(marker, _)| text.contains(marker))
            .map(|(_, parity)| *parity)
            .unwrap_or_default()
    }

    /// Whether a class with this marker takes place in ISO week `week`.
    pub fn admits(self, week: u32) -> bool {
        match self {
            WeekParity::Any => true,
            WeekParity::OddWeeksOnly => week % 2 == 1,
            WeekParity::EvenWeeksOnly => week % 2 == 0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeRange {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeRange {
    /// First `HH:MM-HH:MM` in `text`. Out of range clock values and ranges
    /// that don't end after they start count as a miss.
    pub fn find(text: &str) -> Option<Self> {
        TIME_RANGE.captures(text).and_then(|caps| Self::from_captures(&caps))
    }

    fn from_captures(caps: &Captures) -> Option<Self> {
        let number = |group: usize| caps.get(group)?.as_str().parse::<u32>().ok();
        let start = NaiveTime::from_hms_opt(number(1)?, number(2)?, 0)?;
        let end = NaiveTime::from_hms_opt(number(3)?, number(4)?, 0)?;
        (end > start).then_some(Self { start, end })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedEntry {
    pub weekday: Weekday,
    /// `None` when the entry has no usable time range. Such entries
    /// can't be placed on a calendar.
    pub time: Option<TimeRange>,
    pub class_name: Option<String>,
    pub room: Option<String>,
    pub teacher_name: Option<String>,
    pub week_parity: WeekParity,
}

impl ParsedEntry {
    fn empty(weekday: Weekday) -> Self {
        Self {
            weekday,
            time: None,
            class_name: None,
            room: None,
            teacher_name: None,
            week_parity: WeekParity::Any,
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Field {
    TimeRange,
    TeacherAndRoom,
    ClassName,
}

struct Rule {
    field: Field,
    pattern: &'static LazyLock<Regex>,
}

static RULES: [Rule; 3] = [
    Rule {
        field: Field::TimeRange,
        pattern: &TIME_RANGE,
    },
    Rule {
        field: Field::TeacherAndRoom,
        pattern: &TEACHER_AND_ROOM,
    },
    Rule {
        field: Field::ClassName,
        pattern: &CLASS_NAME,
    },
];

fn capture(caps: &Captures, group: usize) -> Option<String> {
    caps.get(group)
        .map(|m| m.as_str().trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Extracts the structured fields of one entry. Never fails: anything
/// that can't be found is left as `None`.
pub fn extract(weekday: Weekday, text: &str) -> ParsedEntry {
    let mut entry = ParsedEntry::empty(weekday);

    for rule in RULES.iter() {
        let Some(caps) = rule.pattern.captures(text) else {
            continue;
        };
        match rule.field {
            Field::TimeRange => entry.time = TimeRange::from_captures(&caps),
            Field::TeacherAndRoom => {
                entry.teacher_name = capture(&caps, 1);
                entry.room = capture(&caps, 2);
            }
            Field::ClassName => entry.class_name = capture(&caps, 1),
        }
    }

    // Some entries carry the real hours where the teacher's name should be
    if let Some(corrected) = entry.teacher_name.as_deref().and_then(TimeRange::find) {
        tracing::debug!("Using time range from teacher slot in {:?}", text);
        entry.time = Some(corrected);
        entry.teacher_name = None;
    }

    entry.week_parity = WeekParity::from_text(text);
    entry
}
