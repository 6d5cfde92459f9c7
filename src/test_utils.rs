use crate::consts::{MAX_AD_YEAR, MIN_AD_YEAR};
use crate::types::{days_in_month, GregorianDate, NepaliDate};

pub const fn ad(year: u16, month: u8, day: u8) -> GregorianDate {
    GregorianDate::new(year, month, day)
}

pub const fn bs(year: u16, month: u8, day: u8, day_of_week: u8) -> NepaliDate {
    NepaliDate::new(year, month, day, day_of_week)
}

/// Every real calendar day in the supported Gregorian range, in order
pub fn supported_dates() -> impl Iterator<Item = GregorianDate> {
    (MIN_AD_YEAR..=MAX_AD_YEAR).flat_map(|year| {
        (1..=12u8).flat_map(move |month| {
            (1..=days_in_month(year, month).unwrap_or(0)).map(move |day| ad(year, month, day))
        })
    })
}
