use chrono::DateTime;
use chrono_tz::Tz;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Organizer {
    pub name: String,
    pub email: String,
}

/// One concrete class meeting, ready to be written to a calendar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EventOccurrence {
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
    pub summary: Option<String>,
    pub location: Option<String>,
    /// The entry text exactly as it appeared in the timetable
    pub description: String,
    pub organizer: Option<Organizer>,
}
