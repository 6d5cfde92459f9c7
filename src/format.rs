//! Devanagari rendering of BS dates.

use crate::consts::WEEKDAY_SEPARATOR;
use crate::types::NepaliDate;
use serde::Serialize;

/// Devanagari digits, indexed by digit value (0-9)
pub const DEVANAGARI_DIGITS: [char; 10] = ['०', '१', '२', '३', '४', '५', '६', '७', '८', '९'];

/// BS month names, Baisakh first
pub const MONTH_NAMES: [&str; 12] = [
    "वैशाख",
    "जेठ",
    "असार",
    "साउन",
    "भदौ",
    "असोज",
    "कार्तिक",
    "मंसिर",
    "पुष",
    "माघ",
    "फागुन",
    "चैत",
];

/// Weekday names, Sunday first
pub const WEEKDAY_NAMES: [&str; 7] = [
    "आइतवार",
    "सोमवार",
    "मङ्गलवार",
    "बुधवार",
    "बिहिवार",
    "शुक्रवार",
    "शनिवार",
];

/// Writes each decimal digit of `value` as its Devanagari glyph.
pub fn to_devanagari_numeral(value: u32) -> String {
    value
        .to_string()
        .chars()
        .map(|c| {
            c.to_digit(10)
                .and_then(|d| DEVANAGARI_DIGITS.get(d as usize).copied())
                .unwrap_or(c)
        })
        .collect()
}

/// Reads back a numeral written by [`to_devanagari_numeral`].
///
/// Returns `None` for empty input, any non-Devanagari-digit character, or a
/// value that overflows `u32`.
pub fn from_devanagari_numeral(s: &str) -> Option<u32> {
    if s.is_empty() {
        return None;
    }
    s.chars().try_fold(0u32, |acc, c| {
        let digit = DEVANAGARI_DIGITS.iter().position(|&d| d == c)?;
        acc.checked_mul(10)?.checked_add(u32::try_from(digit).ok()?)
    })
}

/// Nepali name of `month` (1 = वैशाख), or `None` outside `1..=12`
pub fn month_name(month: u8) -> Option<&'static str> {
    usize::from(month)
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i).copied())
}

/// Nepali name of `day_of_week` (1 = आइतवार), or `None` outside `1..=7`
pub fn weekday_name(day_of_week: u8) -> Option<&'static str> {
    usize::from(day_of_week)
        .checked_sub(1)
        .and_then(|i| WEEKDAY_NAMES.get(i).copied())
}

/// The display strings for one BS date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RenderedDate {
    /// Year in Devanagari digits
    pub year:    String,
    /// Month name
    pub month:   String,
    /// Day of month in Devanagari digits
    pub day:     String,
    /// Weekday name
    pub weekday: String,
    /// `"<year> <month> <day>, <weekday>"`
    pub full:    String,
}

impl NepaliDate {
    /// Nepali name of the month, empty if the month is out of range
    pub fn month_name(&self) -> &'static str {
        month_name(self.month()).unwrap_or_default()
    }

    /// Nepali name of the weekday, empty if the index is out of range
    pub fn weekday_name(&self) -> &'static str {
        weekday_name(self.day_of_week()).unwrap_or_default()
    }

    /// `"<year> <month> <day>"` in Devanagari, e.g. `"२०८२ पुष १"`
    pub fn formatted(&self) -> String {
        format!(
            "{} {} {}",
            to_devanagari_numeral(u32::from(self.year())),
            self.month_name(),
            to_devanagari_numeral(u32::from(self.day()))
        )
    }

    /// [`NepaliDate::formatted`] followed by the weekday name
    pub fn formatted_with_weekday(&self) -> String {
        format!("{}{WEEKDAY_SEPARATOR}{}", self.formatted(), self.weekday_name())
    }

    /// Renders every display string at once
    pub fn render(&self) -> RenderedDate {
        RenderedDate {
            year:    to_devanagari_numeral(u32::from(self.year())),
            month:   self.month_name().to_owned(),
            day:     to_devanagari_numeral(u32::from(self.day())),
            weekday: self.weekday_name().to_owned(),
            full:    self.formatted_with_weekday(),
        }
    }
}
