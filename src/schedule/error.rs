use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    /// The document has no day list at all. There is nothing to
    /// salvage from it, unlike a document whose entries all fail to
    /// parse.
    #[error("Timetable document has no schedule list")]
    MissingScheduleList,
}
