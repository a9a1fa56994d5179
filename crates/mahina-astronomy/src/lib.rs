//! Mean synodic lunar phase calculations.
//!
//! The moon's position in its cycle is modelled with the mean synodic month
//! measured from a known reference new moon. This is accurate to within
//! about half a day of the true (perturbed) phase, which is finer than the
//! one-name-per-night resolution of the Hawaiian calendar.

pub mod phase;
pub mod zone;

pub use phase::{
    REFERENCE_NEW_MOON_UNIX, SYNODIC_MONTH_DAYS, SYNODIC_MONTH_SECONDS, fold_fraction, illumination,
    local_noon, phase_fraction_at, phase_fraction_at_local_noon, phase_fraction_for,
};
pub use zone::{DEFAULT_TIME_ZONE, resolve_time_zone};
