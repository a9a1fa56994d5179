//! Lunar phase fraction from the mean synodic month.

use chrono::{DateTime, Datelike, LocalResult, NaiveDate, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;
use mahina_types::MahinaError;
use std::f64::consts::TAU;
use tracing::debug;

use crate::zone::resolve_time_zone;

/// Mean length of the synodic month in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530588853;

/// Mean length of the synodic month in seconds.
pub const SYNODIC_MONTH_SECONDS: f64 = SYNODIC_MONTH_DAYS * 86_400.0;

/// Reference new moon: 2000-01-06 18:14 UTC, as a unix timestamp.
pub const REFERENCE_NEW_MOON_UNIX: i64 = 947_182_440;

/// Folds a cycle count into `[0, 1)`.
///
/// Tiny negative inputs whose Euclidean remainder rounds up to `1.0` are
/// folded to `0.0`.
pub fn fold_fraction(cycles: f64) -> f64 {
    let fraction = cycles.rem_euclid(1.0);
    if fraction >= 1.0 { 0.0 } else { fraction }
}

/// Gets the phase of the moon at `instant` as a fraction in `[0, 1)` of the
/// way through the current lunar cycle, 0 being new moon.
///
/// Note that this is *not* the illuminated fraction; see [`illumination`].
pub fn phase_fraction_at(instant: DateTime<Utc>) -> f64 {
    let whole = (instant.timestamp() - REFERENCE_NEW_MOON_UNIX) as f64;
    let sub = f64::from(instant.timestamp_subsec_nanos()) * 1e-9;
    fold_fraction((whole + sub) / SYNODIC_MONTH_SECONDS)
}

/// Resolves 12:00 local time on `date` in `tz` to an absolute instant.
///
/// When noon is ambiguous (a fold in the zone's offsets) the earlier instant
/// is used.
///
/// # Errors
/// * `NonexistentLocalTime` if noon falls inside an offset gap.
/// * `InvalidDate` if noon on `date` has no representable UTC instant.
pub fn local_noon(date: NaiveDate, tz: &Tz) -> Result<DateTime<Utc>, MahinaError> {
    let noon = date
        .and_hms_opt(12, 0, 0)
        .ok_or_else(|| MahinaError::invalid_date(date.year(), date.month(), date.day()))?;

    match tz.from_local_datetime(&noon) {
        LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.with_timezone(&Utc)),
        LocalResult::None => {
            // Any zone offset is under a day, so a noon without a day of
            // headroom on both sides may not map to a UTC instant at all.
            let representable = noon.checked_sub_signed(TimeDelta::days(1)).is_some()
                && noon.checked_add_signed(TimeDelta::days(1)).is_some();
            if representable {
                Err(MahinaError::NonexistentLocalTime { date, tz: tz.name().to_string() })
            } else {
                Err(MahinaError::invalid_date(date.year(), date.month(), date.day()))
            }
        }
    }
}

/// Phase fraction at local noon of `date` in `tz`.
///
/// # Example
/// ```rust
/// use chrono::NaiveDate;
/// use mahina_astronomy::phase_fraction_at_local_noon;
///
/// let date = NaiveDate::from_ymd_opt(2025, 11, 5).unwrap();
/// let fraction = phase_fraction_at_local_noon(date, &chrono_tz::Pacific::Honolulu).unwrap();
/// assert!((0.0..1.0).contains(&fraction));
/// ```
pub fn phase_fraction_at_local_noon(date: NaiveDate, tz: &Tz) -> Result<f64, MahinaError> {
    let instant = local_noon(date, tz)?;
    let fraction = phase_fraction_at(instant);
    debug!(%date, zone = tz.name(), %instant, fraction, "computed phase fraction");
    Ok(fraction)
}

/// Phase fraction at local noon for a raw year/month/day and IANA zone name.
///
/// # Errors
/// * `UnknownTimeZone` if `tz_name` does not resolve.
/// * `InvalidDate` if the triple is not a representable date, or its noon
///   is not a representable instant.
/// * `NonexistentLocalTime` if noon does not exist in the zone that day.
pub fn phase_fraction_for(year: i32, month: u32, day: u32, tz_name: &str) -> Result<f64, MahinaError> {
    let tz = resolve_time_zone(tz_name)?;
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| MahinaError::invalid_date(year, month, day))?;
    phase_fraction_at_local_noon(date, &tz)
}

/// Illuminated fraction of the lunar disc for a phase fraction, in `[0, 1]`.
pub fn illumination(fraction: f64) -> f64 {
    ((1.0 - (TAU * fraction).cos()) / 2.0).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Timelike};
    use proptest::prelude::*;

    const EPSILON: f64 = 1e-9;

    /// Distance on the unit circle, so 0.999999 and 0.000001 are close.
    fn circular_distance(a: f64, b: f64) -> f64 {
        let d = (a - b).abs();
        d.min(1.0 - d)
    }

    fn reference() -> DateTime<Utc> {
        DateTime::from_timestamp(REFERENCE_NEW_MOON_UNIX, 0).unwrap()
    }

    #[test]
    fn test_reference_new_moon_is_zero() {
        let at = reference();
        assert_eq!(at.to_rfc3339(), "2000-01-06T18:14:00+00:00");
        assert!(phase_fraction_at(at) < EPSILON);
    }

    #[test]
    fn test_half_month_is_full() {
        let full = reference() + Duration::milliseconds((SYNODIC_MONTH_SECONDS * 500.0) as i64);
        assert!((phase_fraction_at(full) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_before_reference_folds_positive() {
        let before = reference() - Duration::days(1);
        let fraction = phase_fraction_at(before);
        assert!((fraction - (1.0 - 1.0 / SYNODIC_MONTH_DAYS)).abs() < 1e-9);
    }

    #[test]
    fn test_periodic_over_synodic_month() {
        let month = Duration::milliseconds((SYNODIC_MONTH_SECONDS * 1000.0).round() as i64);
        let start = DateTime::from_timestamp(1_762_000_000, 0).unwrap();
        let f0 = phase_fraction_at(start);
        for n in 1..=24 {
            let later = start + month * n;
            assert!(circular_distance(f0, phase_fraction_at(later)) < 1e-8, "drift after {} months", n);
        }
    }

    #[test]
    fn test_fold_fraction_edges() {
        assert_eq!(fold_fraction(0.0), 0.0);
        assert_eq!(fold_fraction(3.0), 0.0);
        assert!((fold_fraction(-0.25) - 0.75).abs() < EPSILON);
        assert_eq!(fold_fraction(-1e-20), 0.0);
    }

    #[test]
    fn test_local_noon_honolulu() {
        let date = NaiveDate::from_ymd_opt(2025, 11, 1).unwrap();
        let noon = local_noon(date, &chrono_tz::Pacific::Honolulu).unwrap();
        // HST is UTC-10 year round
        assert_eq!(noon.hour(), 22);
        assert_eq!(noon.date_naive(), date);
    }

    #[test]
    fn test_local_noon_follows_dst() {
        let tz = chrono_tz::America::New_York;
        let winter = local_noon(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(), &tz).unwrap();
        let summer = local_noon(NaiveDate::from_ymd_opt(2025, 7, 15).unwrap(), &tz).unwrap();
        assert_eq!(winter.hour(), 17);
        assert_eq!(summer.hour(), 16);

        // Clocks jump forward at 02:00 on this day; noon still exists.
        let spring = local_noon(NaiveDate::from_ymd_opt(2025, 3, 9).unwrap(), &tz).unwrap();
        assert_eq!(spring.hour(), 16);
    }

    #[test]
    fn test_nonexistent_noon() {
        // Samoa skipped 2011-12-30 entirely when it crossed the date line.
        let date = NaiveDate::from_ymd_opt(2011, 12, 30).unwrap();
        let result = local_noon(date, &chrono_tz::Pacific::Apia);
        assert!(matches!(result, Err(MahinaError::NonexistentLocalTime { .. })));
    }

    #[test]
    fn test_ambiguous_noon_uses_earlier_instant() {
        // Kwajalein moved from UTC+11 to UTC-12 on 1969-09-30, so noon occurs twice.
        let date = NaiveDate::from_ymd_opt(1969, 9, 30).unwrap();
        let tz = chrono_tz::Pacific::Kwajalein;
        let noon = local_noon(date, &tz).unwrap();
        assert_eq!(noon.to_rfc3339(), "1969-09-30T01:00:00+00:00");

        let fraction = phase_fraction_at_local_noon(date, &tz).unwrap();
        assert!((fraction - 0.6180969).abs() < 1e-6, "fraction {}", fraction);
    }

    #[test]
    fn test_unrepresentable_noon_is_invalid_date() {
        let result = local_noon(NaiveDate::MAX, &chrono_tz::Etc::GMTPlus12);
        assert!(matches!(result, Err(MahinaError::InvalidDate { .. })));
    }

    #[test]
    fn test_phase_fraction_for_errors() {
        assert!(matches!(
            phase_fraction_for(2025, 2, 30, "UTC"),
            Err(MahinaError::InvalidDate { year: 2025, month: 2, day: 30 })
        ));
        assert!(matches!(
            phase_fraction_for(2025, 2, 1, "Nowhere/Special"),
            Err(MahinaError::UnknownTimeZone(_))
        ));
    }

    #[test]
    fn test_phase_fraction_for_matches_date_api() {
        let date = NaiveDate::from_ymd_opt(2025, 11, 5).unwrap();
        let direct = phase_fraction_at_local_noon(date, &chrono_tz::Pacific::Honolulu).unwrap();
        let by_name = phase_fraction_for(2025, 11, 5, "Pacific/Honolulu").unwrap();
        assert_eq!(direct, by_name);
    }

    #[test]
    fn test_illumination_shape() {
        assert!(illumination(0.0) < EPSILON);
        assert!((illumination(0.5) - 1.0).abs() < EPSILON);
        assert!((illumination(0.25) - 0.5).abs() < 1e-9);
        assert!((illumination(0.2) - illumination(0.8)).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn fraction_in_unit_interval(secs in -4_000_000_000i64..8_000_000_000i64, nanos in 0u32..1_000_000_000) {
            let at = DateTime::from_timestamp(secs, nanos).unwrap();
            let f = phase_fraction_at(at);
            prop_assert!((0.0..1.0).contains(&f), "fraction {} out of range", f);
        }

        #[test]
        fn illumination_in_unit_interval(f in 0.0f64..1.0) {
            let i = illumination(f);
            prop_assert!((0.0..=1.0).contains(&i));
        }
    }
}
