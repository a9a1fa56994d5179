use chrono::NaiveDate;
use chrono_tz::Tz;
use mahina_astronomy::{fold_fraction, illumination, phase_fraction_at_local_noon};
use mahina_types::{HawaiianMoon, LunarDay, MahinaError};
use smallvec::SmallVec;
use tracing::debug;

use crate::month::YearMonth;
use crate::names::{night_index, phase_in_cycle};

/// Builds a `LunarDay` from a phase fraction, folding it into `[0, 1)` first.
pub fn lunar_day_from_fraction(date: NaiveDate, fraction: f64) -> LunarDay {
    let fraction = fold_fraction(fraction);
    LunarDay::new(
        date,
        fraction,
        illumination(fraction),
        HawaiianMoon::ALL[night_index(fraction)],
        phase_in_cycle(fraction),
    )
}

/// Moon information for `date`, taken at local noon in `tz`.
///
/// # Errors
/// Returns `NonexistentLocalTime` if noon does not exist in `tz` that day.
pub fn lunar_day(date: NaiveDate, tz: &Tz) -> Result<LunarDay, MahinaError> {
    let fraction = phase_fraction_at_local_noon(date, tz)?;
    Ok(lunar_day_from_fraction(date, fraction))
}

/// Iterator over consecutive lunar days, computed lazily.
pub struct LunarDayIterator {
    current: Option<NaiveDate>,
    end: NaiveDate,
    zone: Tz,
}

impl Iterator for LunarDayIterator {
    type Item = Result<LunarDay, MahinaError>;

    fn next(&mut self) -> Option<Self::Item> {
        let date = self.current.filter(|d| *d <= self.end)?;
        self.current = date.succ_opt();
        Some(lunar_day(date, &self.zone))
    }
}

/// Lunar days from `start` to `end` inclusive.
pub fn lunar_days(start: NaiveDate, end: NaiveDate, zone: Tz) -> LunarDayIterator {
    LunarDayIterator { current: Some(start), end, zone }
}

/// Every day of one month with its Hawaiian moon.
#[derive(Debug, Clone)]
pub struct MonthCalendar {
    pub month: YearMonth,
    pub zone: Tz,
    pub days: SmallVec<[LunarDay; 31]>,
}

impl MonthCalendar {
    pub fn iter(&self) -> impl Iterator<Item = &LunarDay> {
        self.days.iter()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Days whose noon falls in the given night. Usually one, sometimes
    /// zero or two, since 30 nights share 29.53 days.
    pub fn days_of(&self, moon: HawaiianMoon) -> impl Iterator<Item = &LunarDay> {
        self.days.iter().filter(move |d| d.moon == moon)
    }
}

impl<'a> IntoIterator for &'a MonthCalendar {
    type Item = &'a LunarDay;
    type IntoIter = std::slice::Iter<'a, LunarDay>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}

/// Computes the whole month before returning, so an error never leaves the
/// caller with a partial month.
pub fn month_calendar(month: YearMonth, tz: &Tz) -> Result<MonthCalendar, MahinaError> {
    let days = month
        .days()
        .map(|date| lunar_day(date, tz))
        .collect::<Result<SmallVec<[LunarDay; 31]>, _>>()?;
    debug!(%month, zone = tz.name(), days = days.len(), "built month calendar");
    Ok(MonthCalendar { month, zone: *tz, days })
}
