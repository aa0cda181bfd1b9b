//! Gregorian calendar arithmetic shared by the pattern expander.

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_MONTH,
};

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in `month` of `year`.
///
/// Months outside `1..=12` have no days at all, so that enumerating a
/// pattern with an impossible fixed month yields nothing.
pub const fn days_in_month(year: u16, month: u8) -> u8 {
    if month == 0 || month > MAX_MONTH {
        return 0;
    }

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year: u16,
            is_leap: bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year: 2024,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 2023,
                is_leap: false,
                description: "not divisible by 4",
            },
            TestCase {
                year: 1900,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2100,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2000,
                is_leap: true,
                description: "divisible by 400",
            },
            TestCase {
                year: 4,
                is_leap: true,
                description: "first leap year of the era",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description,
            );
        }
    }

    #[test]
    fn test_days_in_month_31_and_30_day_months() {
        for month in [1, 3, 5, 7, 8, 10, 12] {
            assert_eq!(days_in_month(2023, month), 31, "Month {month} should have 31 days");
        }
        for month in [4, 6, 9, 11] {
            assert_eq!(days_in_month(2023, month), 30, "Month {month} should have 30 days");
        }
    }

    #[test]
    fn test_days_in_month_february() {
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28, "Century year not divisible by 400");
        assert_eq!(days_in_month(2000, 2), 29, "Century year divisible by 400");
    }

    #[test]
    fn test_days_in_month_out_of_range() {
        assert_eq!(days_in_month(2024, 0), 0);
        assert_eq!(days_in_month(2024, 13), 0);
        assert_eq!(days_in_month(2024, 99), 0);
    }

    #[test]
    fn test_days_in_month_matches_chrono() {
        for year in [1, 4, 100, 400, 1900, 2000, 2023, 2024, 9999] {
            for month in 1..=12u8 {
                let last = (28..=31)
                    .rev()
                    .find(|&d| {
                        chrono::NaiveDate::from_ymd_opt(i32::from(year), u32::from(month), d).is_some()
                    })
                    .unwrap();
                assert_eq!(u32::from(days_in_month(year, month)), last, "{year}-{month:02}");
            }
        }
    }
}
