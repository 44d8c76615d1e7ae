use chrono::NaiveDate;
use labwear_core::traits::IWearStrategy;
use labwear_wear::{ExponentialWear, LinearWear};
use proptest::prelude::*;

fn arb_date(years: std::ops::Range<i32>) -> impl Strategy<Value = NaiveDate> {
    (years, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

proptest! {
    #[test]
    fn wear_is_bounded(acquired in arb_date(1900..2100), as_of in arb_date(1900..2200)) {
        let date = acquired.format("%Y-%m-%d").to_string();
        for wear in [LinearWear.calculate_at(&date, as_of), ExponentialWear.calculate_at(&date, as_of)] {
            prop_assert!((0.0..=1.0).contains(&wear), "wear out of bounds: {}", wear);
        }
    }

    #[test]
    fn wear_never_decreases_with_time(acquired in arb_date(1950..2050), step in 0i32..40) {
        let date = acquired.format("%Y-%m-%d").to_string();
        let start = NaiveDate::from_ymd_opt(2050, 1, 1).unwrap();
        let later = NaiveDate::from_ymd_opt(2050 + step, 1, 1).unwrap();
        prop_assert!(LinearWear.calculate_at(&date, later) >= LinearWear.calculate_at(&date, start));
        prop_assert!(ExponentialWear.calculate_at(&date, later) >= ExponentialWear.calculate_at(&date, start));
    }

    #[test]
    fn garbage_dates_never_panic(raw in "\\PC*") {
        let as_of = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let wear = LinearWear.calculate_at(&raw, as_of);
        prop_assert!((0.0..=1.0).contains(&wear));
    }
}
