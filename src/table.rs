//! Month lengths of every Bikram Sambat year covered by the converter.
//!
//! BS month lengths follow no closed-form rule, so they are kept as a static
//! table: one row per year from [`FIRST_BS_YEAR`] to [`LAST_BS_YEAR`], twelve
//! columns per row (Baisakh first).

use crate::consts::{BS_YEAR_COUNT, FIRST_BS_YEAR, LAST_BS_YEAR, MAX_MONTH};
use crate::ConversionError;

/// Shortest month observed in the table
pub const MIN_BS_MONTH_DAYS: u8 = 29;
/// Longest month observed in the table
pub const MAX_BS_MONTH_DAYS: u8 = 32;

/// Row `i` holds the month lengths of BS year `FIRST_BS_YEAR + i`.
#[rustfmt::skip]
pub(crate) const MONTH_LENGTHS: [[u8; 12]; BS_YEAR_COUNT] = [
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2000
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2001
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2002
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2003
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2004
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2005
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2006
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2007
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31], // 2008
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2009
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2010
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2011
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2012
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2013
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2014
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2015
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2016
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2017
    [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2018
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2019
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2020
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2021
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2022
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2023
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2024
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2025
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2026
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2027
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2028
    [31, 31, 32, 31, 32, 30, 30, 29, 30, 29, 30, 30], // 2029
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2030
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2031
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2032
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2033
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2034
    [30, 32, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31], // 2035
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2036
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2037
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2038
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2039
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2040
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2041
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2042
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2043
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2044
    [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2045
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2046
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2047
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2048
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2049
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2050
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2051
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2052
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2053
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2054
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2055
    [31, 31, 32, 31, 32, 30, 30, 29, 30, 29, 30, 30], // 2056
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2057
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2058
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2059
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2060
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2061
    [30, 32, 31, 32, 31, 31, 29, 30, 29, 30, 29, 31], // 2062
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2063
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2064
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2065
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 29, 31], // 2066
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2067
    [31, 31, 32, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2068
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2069
    [31, 31, 31, 32, 31, 31, 29, 30, 30, 29, 30, 30], // 2070
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2071
    [31, 32, 31, 32, 31, 30, 30, 29, 30, 29, 30, 30], // 2072
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 31], // 2073
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2074
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2075
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2076
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2077
    [31, 31, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2078
    [31, 31, 32, 31, 31, 31, 30, 29, 30, 29, 30, 30], // 2079
    [31, 32, 31, 32, 31, 30, 30, 30, 29, 29, 30, 30], // 2080
    [31, 31, 32, 32, 31, 30, 30, 30, 29, 30, 29, 31], // 2081
    [31, 32, 31, 32, 31, 31, 30, 29, 30, 29, 30, 30], // 2082
    [31, 31, 32, 31, 31, 30, 30, 30, 29, 30, 30, 30], // 2083
    [31, 31, 32, 31, 31, 30, 30, 30, 29, 30, 30, 30], // 2084
    [31, 32, 31, 32, 30, 31, 30, 30, 29, 30, 30, 30], // 2085
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30], // 2086
    [31, 31, 32, 31, 31, 31, 30, 30, 29, 30, 30, 30], // 2087
    [30, 31, 32, 32, 30, 31, 30, 30, 29, 30, 30, 30], // 2088
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30], // 2089
    [30, 32, 31, 32, 31, 30, 30, 30, 29, 30, 30, 30], // 2090
];

/// Days elapsed from the first day of [`FIRST_BS_YEAR`] to the first day of
/// each row, plus a final entry holding the total length of the table.
pub(crate) const YEAR_START_OFFSETS: [u32; BS_YEAR_COUNT + 1] = year_start_offsets();

const fn year_start_offsets() -> [u32; BS_YEAR_COUNT + 1] {
    let mut offsets = [0u32; BS_YEAR_COUNT + 1];
    let mut row = 0;
    while row < BS_YEAR_COUNT {
        let mut days = 0u32;
        let mut month = 0;
        while month < MONTH_LENGTHS[row].len() {
            days += MONTH_LENGTHS[row][month] as u32;
            month += 1;
        }
        offsets[row + 1] = offsets[row] + days;
        row += 1;
    }
    offsets
}

/// A single row of the table: the twelve month lengths of one BS year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarYear {
    bs_year:       u16,
    month_lengths: &'static [u8; 12],
}

impl CalendarYear {
    /// Returns the BS year this row describes
    pub const fn bs_year(&self) -> u16 {
        self.bs_year
    }

    /// Returns all twelve month lengths, Baisakh first
    pub const fn month_lengths(&self) -> &'static [u8; 12] {
        self.month_lengths
    }

    /// Returns the length of `month` (1..=12), or `None` outside that range
    pub fn month_length(&self, month: u8) -> Option<u8> {
        if month == 0 || month > MAX_MONTH {
            return None;
        }
        Some(self.month_lengths[usize::from(month) - 1])
    }

    /// Total number of days in the year
    pub fn days(&self) -> u16 {
        self.month_lengths.iter().map(|&d| u16::from(d)).sum()
    }
}

/// Looks up the length of `month` in the row at `year_index` (row 0 is BS 2000).
///
/// # Errors
/// Returns `ConversionError::OutOfRange` when `year_index` is past the last
/// row, and `ConversionError::InvalidMonth` when `month` is not in `1..=12`.
pub fn month_length(year_index: usize, month: u8) -> Result<u8, ConversionError> {
    let row = MONTH_LENGTHS.get(year_index).ok_or_else(|| {
        ConversionError::OutOfRange(format!(
            "Date exceeds available calendar data (BS {FIRST_BS_YEAR}-{LAST_BS_YEAR})"
        ))
    })?;
    if month == 0 || month > MAX_MONTH {
        return Err(ConversionError::InvalidMonth(month));
    }
    Ok(row[usize::from(month) - 1])
}

/// Returns true if the table has a row for `bs_year`
pub const fn contains_year(bs_year: u16) -> bool {
    bs_year >= FIRST_BS_YEAR && bs_year <= LAST_BS_YEAR
}

/// Returns the row for `bs_year`, if the table covers it
pub fn year(bs_year: u16) -> Option<CalendarYear> {
    if !contains_year(bs_year) {
        return None;
    }
    let index = usize::from(bs_year - FIRST_BS_YEAR);
    Some(CalendarYear {
        bs_year,
        month_lengths: &MONTH_LENGTHS[index],
    })
}

/// Returns the twelve month lengths of `bs_year`, if the table covers it
pub fn month_lengths(bs_year: u16) -> Option<&'static [u8; 12]> {
    year(bs_year).map(|row| row.month_lengths())
}

/// Returns the number of days in `bs_year`, if the table covers it
pub fn days_in_year(bs_year: u16) -> Option<u16> {
    year(bs_year).map(|row| row.days())
}

/// Iterates over every row of the table in increasing year order
pub fn years() -> impl Iterator<Item = CalendarYear> {
    (FIRST_BS_YEAR..=LAST_BS_YEAR).filter_map(year)
}
