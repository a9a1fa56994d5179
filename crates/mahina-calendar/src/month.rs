use chrono::{Datelike, Months, NaiveDate};
use mahina_types::MahinaError;
use std::fmt;
use std::str::FromStr;

/// A calendar month, parsed from strict `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth {
    first: NaiveDate,
}

impl YearMonth {
    /// # Errors
    /// Returns `InvalidMonth` if `month` is outside 1..=12 or the year is
    /// not representable.
    pub fn new(year: i32, month: u32) -> Result<Self, MahinaError> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first| Self { first })
            .ok_or_else(|| MahinaError::invalid_month(format!("{:04}-{:02}", year, month)))
    }

    /// The month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self { first: date.with_day0(0).unwrap_or(date) }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// Every calendar day of the month, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let month = self.first.month();
        self.first.iter_days().take_while(move |d| d.month() == month)
    }

    /// Number of days in the month (28-31).
    pub fn len(&self) -> usize {
        self.days().count()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    pub fn succ(&self) -> Option<Self> {
        self.first.checked_add_months(Months::new(1)).map(|first| Self { first })
    }

    pub fn pred(&self) -> Option<Self> {
        self.first.checked_sub_months(Months::new(1)).map(|first| Self { first })
    }
}

impl FromStr for YearMonth {
    type Err = MahinaError;

    /// Parses `YYYY-MM`: four year digits, a dash, two month digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MahinaError::invalid_month(s);

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if year.len() != 4 || month.len() != 2 || !all_digits(year) || !all_digits(month) {
            return Err(invalid());
        }

        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month).map_err(|_| invalid())
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}
