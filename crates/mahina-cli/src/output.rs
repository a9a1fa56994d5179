//! Rendering of a month calendar as text lines or JSON.

use clap::ValueEnum;
use mahina_core::{LunarDay, MonthCalendar};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `YYYY-MM-DD <moon>` line per day
    Text,
    /// JSON array of day records
    Json,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TextOptions {
    pub ascii: bool,
    pub phase: bool,
}

/// JSON record for one day.
#[derive(Debug, Serialize)]
pub struct DayRecord {
    pub date: String,
    pub night: u8,
    pub moon: &'static str,
    pub moon_ascii: &'static str,
    pub anahulu: String,
    pub phase: &'static str,
    pub fraction: f64,
    pub illumination: f64,
}

impl From<&LunarDay> for DayRecord {
    fn from(day: &LunarDay) -> Self {
        Self {
            date: day.date.format("%Y-%m-%d").to_string(),
            night: day.moon.night(),
            moon: day.moon.name(),
            moon_ascii: day.moon.ascii_name(),
            anahulu: day.moon.anahulu().to_string(),
            phase: day.phase.name(),
            fraction: day.fraction,
            illumination: day.illumination,
        }
    }
}

pub fn render_text(calendar: &MonthCalendar, opts: TextOptions) -> String {
    let mut out = String::new();
    for day in calendar {
        let name = if opts.ascii { day.moon.ascii_name() } else { day.moon.name() };
        let mut line = format!("{} {}", day.date.format("%Y-%m-%d"), name);
        if opts.phase {
            line.push_str(&format!(" ({})", day.phase));
        }
        out.push_str(&line);
        out.push('\n');
    }
    out
}

pub fn render_json(calendar: &MonthCalendar) -> serde_json::Result<String> {
    let records: Vec<DayRecord> = calendar.iter().map(DayRecord::from).collect();
    let mut out = serde_json::to_string_pretty(&records)?;
    out.push('\n');
    Ok(out)
}
