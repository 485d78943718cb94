//! Public types for the schedule API
use serde::{Deserialize, Serialize};

use crate::schedule::{EventOccurrence, Organizer};

#[derive(Serialize, Deserialize)]
pub struct ScheduleOrganizer {
    pub name: String,
    pub email: String,
}

#[derive(Serialize, Deserialize)]
pub struct ScheduleEventResponse {
    pub start: String, // RFC 3339 with the timetable's UTC offset
    pub end: String,
    pub summary: Option<String>,
    pub location: Option<String>,
    pub description: String,
    pub organizer: Option<ScheduleOrganizer>,
}

impl From<Organizer> for ScheduleOrganizer {
    fn from(organizer: Organizer) -> Self {
        Self {
            name: organizer.name,
            email: organizer.email,
        }
    }
}

impl From<EventOccurrence> for ScheduleEventResponse {
    fn from(event: EventOccurrence) -> Self {
        Self {
            start: event.start.to_rfc3339(),
            end: event.end.to_rfc3339(),
            summary: event.summary,
            location: event.location,
            description: event.description,
            organizer: event.organizer.map(ScheduleOrganizer::from),
        }
    }
}
