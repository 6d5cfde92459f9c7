use crate::consts::{
    CENTURY_CYCLE, DATE_SEPARATOR, DAYS_IN_MONTH, DAYS_IN_WEEK, FEBRUARY, FEBRUARY_DAYS_LEAP,
    FIRST_BS_YEAR, GREGORIAN_CYCLE, LAST_BS_YEAR, LEAP_YEAR_CYCLE, MAX_AD_YEAR, MAX_DAY, MAX_MONTH,
    MIN_AD_YEAR, MIN_DAY,
};
use crate::{prelude::*, table, ConversionError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A Gregorian (AD) calendar date as handed to the converter.
///
/// Construction with [`GregorianDate::new`] does not validate; the converter
/// checks the supported year range and the static month/day bounds. The day is
/// only checked against `1..=31`, never against the length of the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct GregorianDate {
    year:  u16,
    month: u8,
    day:   u8,
}

impl GregorianDate {
    /// Creates a date from raw components without validating them
    pub const fn new(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Creates a date and checks it against the converter's input bounds
    ///
    /// # Errors
    /// Returns `ConversionError::OutOfRange` for a year outside
    /// `MIN_AD_YEAR..=MAX_AD_YEAR`, `ConversionError::InvalidMonth` for a month
    /// outside `1..=12` and `ConversionError::InvalidDay` for a day outside `1..=31`.
    pub fn try_new(year: u16, month: u8, day: u8) -> Result<Self, ConversionError> {
        let date = Self::new(year, month, day);
        date.validate()?;
        Ok(date)
    }

    /// Returns the year component
    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns the month component
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the day component
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Checks the year range, then the month, then the day.
    ///
    /// # Errors
    /// See [`GregorianDate::try_new`].
    pub fn validate(&self) -> Result<(), ConversionError> {
        if self.year < MIN_AD_YEAR || self.year > MAX_AD_YEAR {
            return Err(ConversionError::OutOfRange(format!(
                "Gregorian year {} is not supported (must be {MIN_AD_YEAR}-{MAX_AD_YEAR})",
                self.year
            )));
        }
        if self.month == 0 || self.month > MAX_MONTH {
            return Err(ConversionError::InvalidMonth(self.month));
        }
        if self.day < MIN_DAY || self.day > MAX_DAY {
            return Err(ConversionError::InvalidDay(self.day));
        }
        Ok(())
    }

    /// Today's date according to the local clock
    #[cfg(feature = "clock")]
    pub fn today() -> Self {
        chrono::Local::now().date_naive().into()
    }
}

#[cfg(feature = "clock")]
impl From<chrono::NaiveDate> for GregorianDate {
    fn from(date: chrono::NaiveDate) -> Self {
        use chrono::Datelike;

        // Components that do not fit are mapped to 0 so validation rejects them
        Self::new(
            u16::try_from(date.year()).unwrap_or(0),
            u8::try_from(date.month()).unwrap_or(0),
            u8::try_from(date.day()).unwrap_or(0),
        )
    }
}

impl From<(u16, u8, u8)> for GregorianDate {
    fn from((year, month, day): (u16, u8, u8)) -> Self {
        Self::new(year, month, day)
    }
}

impl FromStr for GregorianDate {
    type Err = ConversionError;

    /// Parses `YYYY-MM-DD` and validates the result.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ConversionError::InvalidFormat("Empty date string".to_owned()));
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ConversionError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} component(s): {s}",
                parts.len()
            )));
        };

        Self::try_new(parse_component(year)?, parse_component(month)?, parse_component(day)?)
    }
}

fn parse_component<T: FromStr>(s: &str) -> Result<T, ConversionError> {
    s.parse::<T>()
        .map_err(|_| ConversionError::InvalidFormat(s.to_owned()))
}

impl Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A Bikram Sambat (BS) date together with its weekday index.
///
/// Only the converter produces these, so `day` never exceeds the table's
/// length for `(year, month)`. `day_of_week` runs `1..=7` with 1 = Sunday.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(try_from = "RawNepaliDate")]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct NepaliDate {
    year:        u16,
    month:       u8,
    day:         u8,
    day_of_week: u8,
}

impl NepaliDate {
    pub(crate) const fn new(year: u16, month: u8, day: u8, day_of_week: u8) -> Self {
        Self {
            year,
            month,
            day,
            day_of_week,
        }
    }

    /// Returns the BS year
    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    /// Returns the BS month (1 = Baisakh)
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Returns the day of the BS month
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Returns the weekday index (1 = Sunday, 7 = Saturday)
    #[inline]
    pub const fn day_of_week(&self) -> u8 {
        self.day_of_week
    }

    /// ASCII `YYYY-MM-DD` rendering with zero-padded month and day
    pub fn to_bs_string(&self) -> String {
        self.to_string()
    }
}

/// Unchecked serialized form of a [`NepaliDate`]
#[derive(Deserialize)]
struct RawNepaliDate {
    year:        u16,
    month:       u8,
    day:         u8,
    day_of_week: u8,
}

impl TryFrom<RawNepaliDate> for NepaliDate {
    type Error = ConversionError;

    fn try_from(raw: RawNepaliDate) -> Result<Self, Self::Error> {
        let row = table::year(raw.year).ok_or_else(|| {
            ConversionError::OutOfRange(format!(
                "BS year {} is not in the calendar table ({FIRST_BS_YEAR}-{LAST_BS_YEAR})",
                raw.year
            ))
        })?;
        let month_days = row
            .month_length(raw.month)
            .ok_or(ConversionError::InvalidMonth(raw.month))?;
        if raw.day < MIN_DAY || raw.day > month_days {
            return Err(ConversionError::InvalidDay(raw.day));
        }
        if raw.day_of_week == 0 || raw.day_of_week > DAYS_IN_WEEK {
            return Err(ConversionError::InvalidWeekday(raw.day_of_week));
        }
        Ok(Self::new(raw.year, raw.month, raw.day, raw.day_of_week))
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Length of a Gregorian month, or `None` if `month` is not in `1..=12`
pub const fn days_in_month(year: u16, month: u8) -> Option<u8> {
    if month == 0 || month > MAX_MONTH {
        return None;
    }

    if month == FEBRUARY && is_leap_year(year) {
        Some(FEBRUARY_DAYS_LEAP)
    } else {
        Some(DAYS_IN_MONTH[month as usize])
    }
}
