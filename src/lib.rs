pub mod builder;
pub mod calendar;
pub mod config;
pub mod error;
pub mod holiday;
pub mod render;

pub use builder::{parse_year, CalendarBuilder};
pub use calendar::{Calendar, Day, DayType, Month};
pub use error::{Error, ErrorKind, Result};
pub use holiday::Holiday;
