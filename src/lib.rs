//! Gregorian (AD) to Bikram Sambat (BS) date conversion.
//!
//! ```
//! use nepali_date::{ad_to_bs, GregorianDate};
//!
//! let date = ad_to_bs(GregorianDate::new(1944, 1, 1)).unwrap();
//! assert_eq!(date.to_string(), "2000-09-18");
//! assert_eq!(date.formatted_with_weekday(), "२००० पुष १८, शनिवार");
//! ```

mod consts;
mod converter;
mod day_counter;
mod format;
mod prelude;
pub mod table;
#[cfg(test)]
mod test_utils;
mod types;

pub use consts::*;
pub use converter::{ad_to_bs, ad_to_bs_indexed, locate, roll_forward};
pub use day_counter::total_days;
pub use format::{
    from_devanagari_numeral, month_name, to_devanagari_numeral, weekday_name, RenderedDate,
    DEVANAGARI_DIGITS, MONTH_NAMES, WEEKDAY_NAMES,
};
pub use table::CalendarYear;
pub use types::{days_in_month, is_leap_year, GregorianDate, NepaliDate};

/// Error type for date conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// Gregorian year outside the supported range, or the BS table ran out.
    #[error("{0}")]
    OutOfRange(String),

    /// Gregorian month outside `1..=12`, or a BS month cursor that left it.
    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(u8),

    /// Gregorian day outside `1..=31`, or a BS day past the end of its month.
    #[error("Invalid day: {0} (must be {min}-{max})", min = MIN_DAY, max = MAX_DAY)]
    InvalidDay(u8),

    /// Weekday index outside `1..=7`.
    #[error("Invalid weekday: {0} (must be 1-{max})", max = DAYS_IN_WEEK)]
    InvalidWeekday(u8),

    /// Text that is not a `YYYY-MM-DD` date.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),
}

/// Payload-free classification of a [`ConversionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`ConversionError::OutOfRange`]
    OutOfRange,
    /// See [`ConversionError::InvalidMonth`]
    InvalidMonth,
    /// See [`ConversionError::InvalidDay`]
    InvalidDay,
    /// See [`ConversionError::InvalidWeekday`]
    InvalidWeekday,
    /// See [`ConversionError::InvalidFormat`]
    InvalidFormat,
}

impl ConversionError {
    /// Returns the kind of this error
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::OutOfRange(_) => ErrorKind::OutOfRange,
            Self::InvalidMonth(_) => ErrorKind::InvalidMonth,
            Self::InvalidDay(_) => ErrorKind::InvalidDay,
            Self::InvalidWeekday(_) => ErrorKind::InvalidWeekday,
            Self::InvalidFormat(_) => ErrorKind::InvalidFormat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_supported_day() {
        let date = ad_to_bs(GregorianDate::new(1944, 1, 1)).unwrap();
        assert_eq!(date.year(), 2000);
        assert_eq!(date.month(), 9);
        assert_eq!(date.day(), 18);
        assert_eq!(date.day_of_week(), 7);
        assert_eq!(date.month_name(), "पुष");
        assert_eq!(date.weekday_name(), "शनिवार");
    }

    #[test]
    fn test_second_supported_day() {
        let date = ad_to_bs(GregorianDate::new(1944, 1, 2)).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2000, 9, 19));
        assert_eq!(date.day_of_week(), 1);
        assert_eq!(date.weekday_name(), "आइतवार");
    }

    #[test]
    fn test_error_kinds() {
        let err = ad_to_bs(GregorianDate::new(2034, 1, 1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfRange);

        let err = ad_to_bs(GregorianDate::new(1944, 13, 1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidMonth);

        let err = ad_to_bs(GregorianDate::new(1944, 1, 32)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidDay);

        let err = "not a date".parse::<GregorianDate>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);

        let err = serde_json::from_str::<NepaliDate>(
            r#"{"year":2000,"month":9,"day":18,"day_of_week":9}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Invalid weekday: 9 (must be 1-7)"));
        assert_eq!(ConversionError::InvalidWeekday(9).kind(), ErrorKind::InvalidWeekday);
    }

    #[test]
    fn test_error_messages() {
        let err = ad_to_bs(GregorianDate::new(2034, 1, 1)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Gregorian year 2034 is not supported (must be 1944-2033)"
        );
        assert_eq!(
            ConversionError::InvalidMonth(13).to_string(),
            "Invalid month: 13 (must be 1-12)"
        );
        assert_eq!(
            ConversionError::InvalidDay(0).to_string(),
            "Invalid day: 0 (must be 1-31)"
        );
    }

    #[test]
    fn test_parse_convert_render() {
        let date: GregorianDate = "2026-10-17".parse().unwrap();
        let rendered = ad_to_bs(date).unwrap().render();
        assert_eq!(rendered.full, "२०८३ कार्तिक १, शनिवार");
    }

    #[test]
    fn test_devanagari_year() {
        assert_eq!(to_devanagari_numeral(2082), "२०८२");
    }
}
