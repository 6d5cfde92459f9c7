/// Earliest supported Gregorian year (inclusive)
pub const MIN_AD_YEAR: u16 = 1944;
/// Latest supported Gregorian year (inclusive)
pub const MAX_AD_YEAR: u16 = 2033;

/// First Bikram Sambat year present in the month-length table
pub const FIRST_BS_YEAR: u16 = 2000;
/// Last Bikram Sambat year present in the month-length table
pub const LAST_BS_YEAR: u16 = 2090;
/// Number of rows in the month-length table
pub const BS_YEAR_COUNT: usize = (LAST_BS_YEAR - FIRST_BS_YEAR + 1) as usize;

/// Maximum valid month in both calendars
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;
/// Static upper bound for a Gregorian day; not checked against the month
pub const MAX_DAY: u8 = 31;

/// Number of days in a week; weekday indices run `1..=DAYS_IN_WEEK`
pub const DAYS_IN_WEEK: u8 = 7;

/// BS year of the day preceding 1944-01-01
pub const ANCHOR_BS_YEAR: u16 = 2000;
/// BS month of the day preceding 1944-01-01
pub const ANCHOR_BS_MONTH: u8 = 9;
/// BS day of the day preceding 1944-01-01
pub const ANCHOR_BS_DAY: u8 = 17;
/// Weekday index of the day preceding 1944-01-01
pub const ANCHOR_WEEKDAY: u8 = 6;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator (ISO 8601 format), used for both calendars
pub const DATE_SEPARATOR: char = '-';
/// Separator between the date and the weekday name in long Nepali output
pub const WEEKDAY_SEPARATOR: &str = ", ";
