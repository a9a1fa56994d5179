use mahina_types::{HawaiianMoon, MoonPhase};

/// Nights in the Hawaiian lunar month; `[0, 1)` is cut into this many
/// equal buckets.
pub const NIGHTS_PER_MONTH: usize = 30;

/// Bucket index for a fraction already folded into `[0, 1)`.
pub(crate) fn night_index(fraction: f64) -> usize {
    // f * 30 can round up to 30.0 for f just below 1.0
    ((fraction * NIGHTS_PER_MONTH as f64) as usize).min(NIGHTS_PER_MONTH - 1)
}

/// Eight-phase bucket for a fraction already folded into `[0, 1)`.
pub(crate) fn phase_in_cycle(fraction: f64) -> MoonPhase {
    match fraction {
        _ if fraction <= 1.0 / 16.0 => MoonPhase::New,
        _ if fraction <= 3.0 / 16.0 => MoonPhase::WaxingCrescent,
        _ if fraction <= 5.0 / 16.0 => MoonPhase::FirstQuarter,
        _ if fraction <= 7.0 / 16.0 => MoonPhase::WaxingGibbous,
        _ if fraction <= 9.0 / 16.0 => MoonPhase::Full,
        _ if fraction <= 11.0 / 16.0 => MoonPhase::WaningGibbous,
        _ if fraction <= 13.0 / 16.0 => MoonPhase::LastQuarter,
        _ if fraction <= 15.0 / 16.0 => MoonPhase::WaningCrescent,
        _ => MoonPhase::New,
    }
}

/// Hawaiian night for a phase fraction.
///
/// Bucket `i = floor(30 f)` covers `[i/30, (i+1)/30)` and maps to night
/// `i + 1`: Hilo just after new moon, Māhealani around 0.5, Muku last.
/// Returns `None` for values outside `[0, 1)` (including NaN).
pub fn hawaiian_moon_for(fraction: f64) -> Option<HawaiianMoon> {
    if !(0.0..1.0).contains(&fraction) {
        return None;
    }
    HawaiianMoon::ALL.get(night_index(fraction)).copied()
}

/// Classic eight-phase name for a phase fraction, `None` outside `[0, 1)`.
pub fn moon_phase_for(fraction: f64) -> Option<MoonPhase> {
    (0.0..1.0).contains(&fraction).then(|| phase_in_cycle(fraction))
}

/// Display name of the Hawaiian night, or `""` outside `[0, 1)`.
pub fn moon_name(fraction: f64) -> &'static str {
    hawaiian_moon_for(fraction).map_or("", |moon| moon.name())
}
