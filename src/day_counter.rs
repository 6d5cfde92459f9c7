//! Absolute day offsets of Gregorian dates from 1944-01-01.

use crate::consts::MIN_AD_YEAR;
use crate::types::{days_in_month, is_leap_year, GregorianDate};
use crate::ConversionError;

const DAYS_IN_COMMON_YEAR: u32 = 365;
const DAYS_IN_LEAP_YEAR: u32 = 366;

/// Number of days from 1944-01-01 up to and including `date`, so that
/// 1944-01-01 itself is day 1.
///
/// The day is added as given; a day past the end of its month simply counts
/// into the following month.
///
/// # Errors
/// Propagates the validation errors of [`GregorianDate::validate`].
pub fn total_days(date: GregorianDate) -> Result<u32, ConversionError> {
    date.validate()?;

    let full_years: u32 = (MIN_AD_YEAR..date.year())
        .map(|year| {
            if is_leap_year(year) {
                DAYS_IN_LEAP_YEAR
            } else {
                DAYS_IN_COMMON_YEAR
            }
        })
        .sum();

    let full_months: u32 = (1..date.month())
        .map(|month| days_in_month(date.year(), month).map_or(0, u32::from))
        .sum();

    Ok(full_years + full_months + u32::from(date.day()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ad;

    #[test]
    fn test_epoch_is_day_one() {
        assert_eq!(total_days(ad(1944, 1, 1)).unwrap(), 1);
        assert_eq!(total_days(ad(1944, 1, 2)).unwrap(), 2);
    }

    #[test]
    fn test_leap_february_counted() {
        // 1944 is a leap year: Jan 31 + Feb 29
        assert_eq!(total_days(ad(1944, 3, 1)).unwrap(), 31 + 29 + 1);
        assert_eq!(total_days(ad(1944, 12, 31)).unwrap(), 366);
        assert_eq!(total_days(ad(1945, 1, 1)).unwrap(), 367);
    }

    #[test]
    fn test_common_february_counted() {
        assert_eq!(total_days(ad(1945, 3, 1)).unwrap(), 366 + 31 + 28 + 1);
    }

    #[test]
    fn test_known_offsets() {
        struct TestCase {
            date:     GregorianDate,
            expected: u32,
        }

        // Offsets cross-checked against days since the Unix epoch:
        // 1944-01-01 is day -9497, so offset = days_since_epoch + 9498
        let cases = [
            TestCase {
                date:     ad(1970, 1, 1),
                expected: 9498,
            },
            TestCase {
                date:     ad(2000, 3, 1),
                expected: 9498 + 11017,
            },
            TestCase {
                date:     ad(2033, 12, 31),
                expected: 9498 + 23375,
            },
        ];

        for case in &cases {
            assert_eq!(total_days(case.date).unwrap(), case.expected, "date {}", case.date);
        }
    }

    #[test]
    fn test_consecutive_days_differ_by_one() {
        let mut previous = total_days(ad(1944, 1, 1)).unwrap();
        for year in 1944..=2033 {
            for month in 1..=12 {
                for day in 1..=days_in_month(year, month).unwrap() {
                    if (year, month, day) == (1944, 1, 1) {
                        continue;
                    }
                    let current = total_days(ad(year, month, day)).unwrap();
                    assert_eq!(current, previous + 1, "gap before {year}-{month}-{day}");
                    previous = current;
                }
            }
        }
    }

    #[test]
    fn test_overlong_day_spills_into_next_month() {
        // April 31 lands on the same offset as May 1
        assert_eq!(
            total_days(ad(2023, 4, 31)).unwrap(),
            total_days(ad(2023, 5, 1)).unwrap()
        );
    }

    #[test]
    fn test_validation_errors_propagate() {
        assert!(matches!(total_days(ad(1943, 1, 1)), Err(ConversionError::OutOfRange(_))));
        assert!(matches!(total_days(ad(2034, 1, 1)), Err(ConversionError::OutOfRange(_))));
        assert!(matches!(total_days(ad(1944, 13, 1)), Err(ConversionError::InvalidMonth(13))));
        assert!(matches!(total_days(ad(1944, 1, 32)), Err(ConversionError::InvalidDay(32))));
    }
}
