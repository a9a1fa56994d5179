//! Hawaiian moon names and month calendars.
//!
//! - `names`: maps a phase fraction to a Hawaiian night or an English phase
//! - `month`: strict `YYYY-MM` parsing and day iteration
//! - `calendar`: lunar days, lazy day ranges and whole-month calendars

pub mod calendar;
pub mod month;
pub mod names;

pub use calendar::{LunarDayIterator, MonthCalendar, lunar_day, lunar_day_from_fraction, lunar_days, month_calendar};
pub use month::YearMonth;
pub use names::{NIGHTS_PER_MONTH, hawaiian_moon_for, moon_name, moon_phase_for};
