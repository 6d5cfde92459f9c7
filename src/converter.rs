//! Gregorian to Bikram Sambat conversion.
//!
//! All conversions are computed from one fixed correspondence: the day before
//! 1944-01-01 (offset 0) is BS 2000-09-17, weekday 6 (Friday). A Gregorian date
//! is turned into its offset from that day and the BS calendar is rolled forward
//! by that many days through the month-length table.

use crate::consts::{
    ANCHOR_BS_DAY, ANCHOR_BS_MONTH, ANCHOR_BS_YEAR, ANCHOR_WEEKDAY, DAYS_IN_WEEK, FIRST_BS_YEAR,
    LAST_BS_YEAR, MAX_MONTH, MIN_DAY,
};
use crate::day_counter::total_days;
use crate::table::{self, MONTH_LENGTHS, YEAR_START_OFFSETS};
use crate::types::{GregorianDate, NepaliDate};
use crate::ConversionError;
use tracing::debug;

/// Converts a Gregorian date to its Bikram Sambat equivalent.
///
/// Walks the calendar one day at a time from the anchor, keeping the weekday in
/// lockstep with it.
///
/// # Errors
/// Returns the validation errors of [`GregorianDate::validate`], and
/// `ConversionError::OutOfRange` if the table runs out before the date is reached.
#[tracing::instrument(level = "trace", skip_all, fields(date = %date))]
pub fn ad_to_bs(date: GregorianDate) -> Result<NepaliDate, ConversionError> {
    let days = total_days(date).inspect_err(|err| debug!(error = %err, "rejected input date"))?;
    roll_forward(days)
}

/// Rolls the anchor date forward by `days`.
///
/// The day one past the end of the table is still reachable and comes out as
/// the first day of the year after [`LAST_BS_YEAR`]; anything further fails.
///
/// # Errors
/// Returns `ConversionError::OutOfRange` when the table is exhausted, and
/// `ConversionError::InvalidMonth` if the month cursor ever leaves `1..=12`.
pub fn roll_forward(days: u32) -> Result<NepaliDate, ConversionError> {
    let mut year = ANCHOR_BS_YEAR;
    let mut month = ANCHOR_BS_MONTH;
    let mut day = ANCHOR_BS_DAY;
    let mut day_of_week = ANCHOR_WEEKDAY;

    // Table cursor, advanced independently of the calendar fields
    let mut table_year = usize::from(ANCHOR_BS_YEAR - FIRST_BS_YEAR);
    let mut table_month = ANCHOR_BS_MONTH;

    let mut remaining = days;
    while remaining != 0 {
        let last_day = table::month_length(table_year, table_month).inspect_err(|err| {
            debug!(remaining, table_year, table_month, error = %err, "roll-forward stopped");
        })?;

        day += 1;
        day_of_week += 1;

        if day > last_day {
            month += 1;
            day = MIN_DAY;
            table_month += 1;
        }
        if day_of_week > DAYS_IN_WEEK {
            day_of_week = 1;
        }
        if month > MAX_MONTH {
            year += 1;
            month = 1;
        }
        if table_month > MAX_MONTH {
            table_month = 1;
            table_year += 1;
        }

        remaining -= 1;
    }

    Ok(NepaliDate::new(year, month, day, day_of_week))
}

/// Converts a Gregorian date using the precomputed start offset of every table
/// row instead of walking day by day.
///
/// Produces the same result as [`ad_to_bs`] for every supported date.
///
/// # Errors
/// Same as [`ad_to_bs`].
#[tracing::instrument(level = "trace", skip_all, fields(date = %date))]
pub fn ad_to_bs_indexed(date: GregorianDate) -> Result<NepaliDate, ConversionError> {
    let days = total_days(date).inspect_err(|err| debug!(error = %err, "rejected input date"))?;
    locate(days)
}

/// Index of the anchor day counted from the first day of [`FIRST_BS_YEAR`].
const fn anchor_table_day() -> u32 {
    let row = &MONTH_LENGTHS[(ANCHOR_BS_YEAR - FIRST_BS_YEAR) as usize];
    let mut days = YEAR_START_OFFSETS[(ANCHOR_BS_YEAR - FIRST_BS_YEAR) as usize];
    let mut month = 0;
    while month < (ANCHOR_BS_MONTH - 1) as usize {
        days += row[month] as u32;
        month += 1;
    }
    days + (ANCHOR_BS_DAY - 1) as u32
}

const ANCHOR_TABLE_DAY: u32 = anchor_table_day();

/// Closed-form counterpart of [`roll_forward`] for dates inside the table.
///
/// # Errors
/// Returns `ConversionError::OutOfRange` if the target lies past the last day
/// of [`LAST_BS_YEAR`].
pub fn locate(days: u32) -> Result<NepaliDate, ConversionError> {
    let exhausted = || {
        debug!(days, "target past the end of the calendar table");
        ConversionError::OutOfRange(format!(
            "Date exceeds available calendar data (BS {FIRST_BS_YEAR}-{LAST_BS_YEAR})"
        ))
    };

    let table_days = YEAR_START_OFFSETS[YEAR_START_OFFSETS.len() - 1];
    let target = match ANCHOR_TABLE_DAY.checked_add(days) {
        Some(target) if target < table_days => target,
        _ => return Err(exhausted()),
    };

    // Last row whose start offset is <= target
    let row = YEAR_START_OFFSETS.partition_point(|&start| start <= target) - 1;
    let year = FIRST_BS_YEAR + u16::try_from(row).map_err(|_| exhausted())?;

    // A row that cannot hold its own offset means the table is corrupt
    let (month, day) = month_and_day(&MONTH_LENGTHS[row], target - YEAR_START_OFFSETS[row])
        .ok_or(ConversionError::InvalidMonth(MAX_MONTH + 1))?;

    Ok(NepaliDate::new(year, month, day, weekday_after(days)))
}

/// Splits a zero-based day of the year into a 1-based month and day.
fn month_and_day(lengths: &[u8; 12], mut day_in_year: u32) -> Option<(u8, u8)> {
    for (month, &length) in (1..=MAX_MONTH).zip(lengths) {
        let length = u32::from(length);
        if day_in_year < length {
            return Some((month, u8::try_from(day_in_year + 1).ok()?));
        }
        day_in_year -= length;
    }
    None
}

/// Weekday index `days` days after the anchor.
fn weekday_after(days: u32) -> u8 {
    let week = u32::from(DAYS_IN_WEEK);
    let index = (u32::from(ANCHOR_WEEKDAY) - 1 + days % week) % week;
    // index < 7
    u8::try_from(index).unwrap_or(0) + 1
}

impl NepaliDate {
    /// Converts a Gregorian date, see [`ad_to_bs`].
    ///
    /// # Errors
    /// Same as [`ad_to_bs`].
    pub fn from_gregorian(date: GregorianDate) -> Result<Self, ConversionError> {
        ad_to_bs(date)
    }

    /// Today's BS date according to the local clock
    ///
    /// # Errors
    /// Fails with `ConversionError::OutOfRange` once the clock leaves the
    /// supported Gregorian range.
    #[cfg(feature = "clock")]
    pub fn today() -> Result<Self, ConversionError> {
        ad_to_bs(GregorianDate::today())
    }
}

impl TryFrom<GregorianDate> for NepaliDate {
    type Error = ConversionError;

    fn try_from(date: GregorianDate) -> Result<Self, Self::Error> {
        ad_to_bs(date)
    }
}
