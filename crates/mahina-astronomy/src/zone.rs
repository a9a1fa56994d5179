//! IANA timezone resolution backed by the `chrono-tz` database.

use chrono_tz::Tz;
use mahina_types::MahinaError;
use tracing::trace;

/// Zone used when a caller does not name one.
pub const DEFAULT_TIME_ZONE: &str = "Pacific/Honolulu";

/// Resolves an IANA timezone name such as `Pacific/Honolulu`.
///
/// # Errors
/// Returns `UnknownTimeZone` if the name is not in the tz database.
pub fn resolve_time_zone(name: &str) -> Result<Tz, MahinaError> {
    let tz = name
        .trim()
        .parse::<Tz>()
        .map_err(|_| MahinaError::UnknownTimeZone(name.to_string()))?;
    trace!(zone = tz.name(), "resolved timezone");
    Ok(tz)
}
