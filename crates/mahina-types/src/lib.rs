//! Core types shared by the mahina crates.

pub mod error;
pub mod types;

pub use error::MahinaError;
pub use types::{Anahulu, HawaiianMoon, LunarDay, MoonPhase};
