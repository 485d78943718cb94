pub mod api;
pub mod cli;
pub mod core;
pub mod degra;
pub mod ical;
pub mod schedule;
