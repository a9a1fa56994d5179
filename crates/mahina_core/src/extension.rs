//! Extension trait for `NaiveDate`.

use chrono::NaiveDate;
use chrono_tz::Tz;
use mahina_calendar::lunar_day;
use mahina_types::{HawaiianMoon, LunarDay, MahinaError, MoonPhase};

use crate::moon_for_date;

/// Days searched by `next_moon`; two synodic months always contain every night.
const NEXT_MOON_SEARCH_DAYS: usize = 60;

/// Extends `NaiveDate` with lunar calendar lookups.
pub trait MahinaDateExt {
    /// Lunar day at local noon in `tz`.
    fn lunar_day_in(&self, tz: &Tz) -> Result<LunarDay, MahinaError>;

    /// Hawaiian night in the default zone (`Pacific/Honolulu`).
    fn hawaiian_moon(&self) -> Result<HawaiianMoon, MahinaError>;

    /// Eight-phase name in the default zone.
    fn moon_phase(&self) -> Result<MoonPhase, MahinaError>;

    /// Finds the next day after this one (up to 60 days ahead) whose noon in
    /// `tz` falls in `moon`.
    fn next_moon(&self, moon: HawaiianMoon, tz: &Tz) -> Option<NaiveDate>;
}

impl MahinaDateExt for NaiveDate {
    fn lunar_day_in(&self, tz: &Tz) -> Result<LunarDay, MahinaError> {
        lunar_day(*self, tz)
    }

    fn hawaiian_moon(&self) -> Result<HawaiianMoon, MahinaError> {
        moon_for_date(*self).map(|d| d.moon)
    }

    fn moon_phase(&self) -> Result<MoonPhase, MahinaError> {
        moon_for_date(*self).map(|d| d.phase)
    }

    fn next_moon(&self, moon: HawaiianMoon, tz: &Tz) -> Option<NaiveDate> {
        let mut d = *self;
        for _ in 0..NEXT_MOON_SEARCH_DAYS {
            d = d.succ_opt()?;
            // A day whose noon does not exist in the zone has no night; keep looking.
            if let Ok(day) = lunar_day(d, tz) {
                if day.moon == moon {
                    return Some(d);
                }
            }
        }
        None
    }
}
