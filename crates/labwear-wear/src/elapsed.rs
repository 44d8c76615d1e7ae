use chrono::{Datelike, NaiveDate};

use labwear_core::constants::{ACQUISITION_DATE_FORMAT, MIN_ELAPSED_YEARS};

/// Parse an ISO `YYYY-MM-DD` acquisition date.
pub fn parse_acquisition_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), ACQUISITION_DATE_FORMAT).ok()
}

/// Calendar years between acquisition and `as_of`, floored at 1.
pub fn elapsed_years(acquired: NaiveDate, as_of: NaiveDate) -> i32 {
    (as_of.year() - acquired.year()).max(MIN_ELAPSED_YEARS)
}

/// Elapsed years for a raw date string, `None` when it does not parse.
pub fn years_since(acquisition_date: &str, as_of: NaiveDate) -> Option<i32> {
    parse_acquisition_date(acquisition_date).map(|acquired| elapsed_years(acquired, as_of))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn floor_is_one_year() {
        assert_eq!(elapsed_years(date(2026, 3, 1), date(2026, 9, 1)), 1);
        assert_eq!(elapsed_years(date(2030, 1, 1), date(2026, 9, 1)), 1);
    }

    #[test]
    fn counts_calendar_years() {
        assert_eq!(years_since("2021-01-01", date(2026, 1, 1)), Some(5));
        assert_eq!(years_since(" 2018-05-20 ", date(2026, 1, 1)), Some(8));
    }

    #[test]
    fn rejects_malformed_dates() {
        assert_eq!(years_since("2021", date(2026, 1, 1)), None);
        assert_eq!(years_since("not a date", date(2026, 1, 1)), None);
        assert_eq!(years_since("2021-13-40", date(2026, 1, 1)), None);
    }
}
