//! Planting timelines and duration summaries.
//!
//! A planting moves from seeding, optionally through a nursery and a
//! transplant, to its first and last harvest. `summarize` validates the
//! order of those dates and reports how long each stage took.

use chrono::NaiveDate;
use chrono_tz::Tz;
use mahina_calendar::lunar_day;
use mahina_types::{HawaiianMoon, MahinaError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle dates of one planting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantingTimeline {
    pub seeded_on: NaiveDate,
    /// `None` for direct-sown plantings.
    pub transplanted_on: Option<NaiveDate>,
    pub first_harvest_on: Option<NaiveDate>,
    pub last_harvest_on: Option<NaiveDate>,
}

impl PlantingTimeline {
    pub fn new(seeded_on: NaiveDate) -> Self {
        Self { seeded_on, transplanted_on: None, first_harvest_on: None, last_harvest_on: None }
    }

    pub fn transplanted(mut self, date: NaiveDate) -> Self {
        self.transplanted_on = Some(date);
        self
    }

    pub fn first_harvest(mut self, date: NaiveDate) -> Self {
        self.first_harvest_on = Some(date);
        self
    }

    pub fn last_harvest(mut self, date: NaiveDate) -> Self {
        self.last_harvest_on = Some(date);
        self
    }

    /// Date the planting went into the field: the transplant, or seeding
    /// when direct-sown.
    pub fn in_field_on(&self) -> NaiveDate {
        self.transplanted_on.unwrap_or(self.seeded_on)
    }

    /// Checks the cross-field ordering rules.
    ///
    /// # Errors
    /// Returns `InvalidTimeline` naming the first offending field.
    pub fn validate(&self) -> Result<(), MahinaError> {
        if let Some(transplanted) = self.transplanted_on {
            if transplanted < self.seeded_on {
                return Err(MahinaError::invalid_timeline(
                    "transplanted_on",
                    format!("transplant {} is before seeding {}", transplanted, self.seeded_on),
                ));
            }
        }

        if let Some(first) = self.first_harvest_on {
            let in_field = self.in_field_on();
            if first < in_field {
                return Err(MahinaError::invalid_timeline(
                    "first_harvest_on",
                    format!("first harvest {} is before {}", first, in_field),
                ));
            }
        }

        match (self.first_harvest_on, self.last_harvest_on) {
            (None, Some(_)) => Err(MahinaError::invalid_timeline(
                "last_harvest_on",
                "last harvest set without a first harvest",
            )),
            (Some(first), Some(last)) if last < first => Err(MahinaError::invalid_timeline(
                "last_harvest_on",
                format!("last harvest {} is before first harvest {}", last, first),
            )),
            _ => Ok(()),
        }
    }
}

/// Where a planting stands on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlantingStage {
    /// Seeded in trays, not yet transplanted.
    Nursery,
    /// In the field, no harvest yet.
    Growing,
    /// First harvest taken, still producing.
    Harvesting,
    /// Last harvest recorded.
    Finished,
}

impl fmt::Display for PlantingStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlantingStage::Nursery => "Nursery",
            PlantingStage::Growing => "Growing",
            PlantingStage::Harvesting => "Harvesting",
            PlantingStage::Finished => "Finished",
        };
        f.write_str(s)
    }
}

/// Day counts for each stage of a planting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationSummary {
    /// Seeding to transplant; `None` when direct-sown.
    pub days_in_nursery: Option<i64>,
    /// Field entry to last harvest, or to the `as_of` day while unfinished.
    pub days_in_field: i64,
    /// Seeding to first harvest.
    pub days_to_first_harvest: Option<i64>,
    /// First to last harvest, both days counted.
    pub harvest_window_days: Option<i64>,
    /// Seeding to last harvest, or to the `as_of` day while unfinished.
    pub total_days: i64,
    pub stage: PlantingStage,
}

fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days().max(0)
}

/// Summarizes a planting as of `as_of`.
///
/// Dates after `as_of` are treated as not yet happened for the stage, but
/// still count toward the recorded durations.
///
/// # Errors
/// Returns `InvalidTimeline` if the dates are out of order.
pub fn summarize(timeline: &PlantingTimeline, as_of: NaiveDate) -> Result<DurationSummary, MahinaError> {
    timeline.validate()?;

    let seeded = timeline.seeded_on;
    let in_field = timeline.in_field_on();
    let end = timeline.last_harvest_on.unwrap_or(as_of);

    let stage = match (timeline.transplanted_on, timeline.first_harvest_on, timeline.last_harvest_on) {
        (_, _, Some(last)) if last <= as_of => PlantingStage::Finished,
        (_, Some(first), _) if first <= as_of => PlantingStage::Harvesting,
        (Some(transplanted), _, _) if transplanted > as_of => PlantingStage::Nursery,
        (None, _, _) if seeded > as_of => PlantingStage::Nursery,
        _ => PlantingStage::Growing,
    };

    Ok(DurationSummary {
        days_in_nursery: timeline.transplanted_on.map(|t| days_between(seeded, t)),
        days_in_field: days_between(in_field, end),
        days_to_first_harvest: timeline.first_harvest_on.map(|f| days_between(seeded, f)),
        harvest_window_days: timeline
            .first_harvest_on
            .zip(timeline.last_harvest_on)
            .map(|(first, last)| days_between(first, last) + 1),
        total_days: days_between(seeded, end),
        stage,
    })
}

/// The Hawaiian moon on the seeding day, for planting-by-the-moon records.
///
/// # Errors
/// Returns `NonexistentLocalTime` if noon does not exist in `tz` that day.
pub fn sowing_moon(timeline: &PlantingTimeline, tz: &Tz) -> Result<HawaiianMoon, MahinaError> {
    lunar_day(timeline.seeded_on, tz).map(|day| day.moon)
}
