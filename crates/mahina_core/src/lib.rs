//! # Mahina core
//!
//! Ties the mahina crates together: shared types, the mean synodic phase
//! model, Hawaiian night names, month calendars and planting summaries.
//!
//! ```rust
//! use mahina_core::prelude::*;
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(2025, 11, 5).unwrap();
//! let day = moon_for_date(date).unwrap();
//! assert_eq!(day.moon, HawaiianMoon::Mahealani);
//! ```

pub mod extension;

pub use mahina_astronomy as astronomy;
pub use mahina_calendar as calendar;
pub use mahina_planting as planting;
pub use mahina_types as types;

pub use mahina_astronomy::{
    DEFAULT_TIME_ZONE, REFERENCE_NEW_MOON_UNIX, SYNODIC_MONTH_DAYS, SYNODIC_MONTH_SECONDS, illumination,
    phase_fraction_at, phase_fraction_at_local_noon, phase_fraction_for, resolve_time_zone,
};
pub use mahina_calendar::{
    MonthCalendar, YearMonth, hawaiian_moon_for, lunar_day, lunar_days, month_calendar, moon_name, moon_phase_for,
};
pub use mahina_planting::{DurationSummary, PlantingStage, PlantingTimeline, sowing_moon, summarize};
pub use mahina_types::{Anahulu, HawaiianMoon, LunarDay, MahinaError, MoonPhase};

pub use chrono_tz::Tz;
pub use extension::MahinaDateExt;

pub mod prelude {
    pub use crate::extension::MahinaDateExt;
    pub use crate::types::{Anahulu, HawaiianMoon, LunarDay, MahinaError, MoonPhase};
    pub use crate::{
        MonthCalendar, Tz, YearMonth, hawaiian_moon_for, lunar_day, month_calendar, moon_for_date, moon_for_date_in,
        moon_name, moon_phase_for, phase_fraction_for, resolve_time_zone,
    };
}

use chrono::NaiveDate;

/// Moon information for `date` at local noon in `Pacific/Honolulu`.
pub fn moon_for_date(date: NaiveDate) -> Result<LunarDay, MahinaError> {
    moon_for_date_in(date, DEFAULT_TIME_ZONE)
}

/// Moon information for `date` at local noon in the named IANA zone.
///
/// # Errors
/// Returns `UnknownTimeZone` if `tz_name` does not resolve.
pub fn moon_for_date_in(date: NaiveDate, tz_name: &str) -> Result<LunarDay, MahinaError> {
    let tz = resolve_time_zone(tz_name)?;
    lunar_day(date, &tz)
}
