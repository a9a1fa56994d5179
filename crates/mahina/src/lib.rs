//! # Mahina
//!
//! Hawaiian lunar calendar (Kaulana Mahina) for gardeners and farmers.
//!
//! The moon's age is taken from the mean synodic month at local noon of a
//! calendar day in an IANA timezone, then mapped onto the thirty named
//! nights of the Hawaiian month.
//!
//! This crate is a facade that re-exports functionality from the `mahina` ecosystem.
//!
//! ## Modules
//!
//! - `types`: Core types (HawaiianMoon, MoonPhase, LunarDay, MahinaError)
//! - `astronomy`: Phase fraction, local noon, illumination
//! - `calendar`: Night names, `YYYY-MM` months, month calendars
//! - `planting`: Planting timeline validation and duration summaries
//!
//! ## Usage
//!
//! ```rust
//! use mahina::prelude::*;
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(2025, 11, 20).unwrap();
//! let day = moon_for_date(date).unwrap(); // Result<LunarDay, MahinaError>
//! println!("{} {}", day.date, day.moon);
//! ```

pub use mahina_core::*;
