//! Calendar age as "X years, Y months, Z days".
//!
//! Chrono has no year/month/day difference, so the borrowing is done by hand:
//!   - day underflow borrows the length of the month before the reference month
//!   - month underflow borrows 12 months from the years
//!
//! A single borrow is not always enough. Born on the 31st with a reference
//! date of March 1st, borrowing February's 28 or 29 days still leaves the day
//! count negative, so the borrow walks back one more month.

use crate::domain::model::AgeResult;
use crate::utils::error::{AdvisorError, Result};
use chrono::{Datelike, NaiveDate};

/// Builds a calendar date, rejecting impossible triples such as Feb 30th.
pub fn calendar_date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    if !(1..=12).contains(&month) {
        return Err(AdvisorError::InvalidDate {
            message: format!("month must be in 1..12, got {}", month),
        });
    }
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| AdvisorError::InvalidDate {
        message: format!(
            "day {} is out of range for {}-{:02} (month has {} days)",
            day,
            year,
            month,
            days_in_month(year, month)
        ),
    })
}

/// Age of someone born on `birth_year-birth_month-birth_day` at `reference`.
pub fn compute_age(
    birth_year: i32,
    birth_month: u32,
    birth_day: u32,
    reference: NaiveDate,
) -> Result<AgeResult> {
    let birth = calendar_date(birth_year, birth_month, birth_day)?;
    age_between(birth, reference)
}

pub fn age_between(birth: NaiveDate, reference: NaiveDate) -> Result<AgeResult> {
    if birth > reference {
        return Err(AdvisorError::FutureDateOfBirth { birth, reference });
    }

    let mut years = reference.year() - birth.year();
    let mut months = reference.month() as i32 - birth.month() as i32;
    let mut days = reference.day() as i32 - birth.day() as i32;

    // Fix day underflow, borrowing from the months before `reference`.
    let (mut borrow_year, mut borrow_month) = (reference.year(), reference.month());
    while days < 0 {
        (borrow_year, borrow_month) = previous_month(borrow_year, borrow_month);
        days += days_in_month(borrow_year, borrow_month) as i32;
        months -= 1;
    }

    // Fix month underflow
    while months < 0 {
        months += 12;
        years -= 1;
    }

    debug_assert!(years >= 0, "birth <= reference implies a non-negative age");

    Ok(AgeResult::new(years as u32, months as u32, days as u32))
}

fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// Number of days in the given month (28-31). Out-of-range months return 0.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Gregorian leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_exact_anniversary() {
        let age = compute_age(1990, 5, 15, date(2020, 5, 15)).unwrap();
        assert_eq!(age.as_tuple(), (30, 0, 0));
    }

    #[test]
    fn test_same_day_is_zero() {
        let age = compute_age(2020, 2, 29, date(2020, 2, 29)).unwrap();
        assert_eq!(age.as_tuple(), (0, 0, 0));
    }

    #[test]
    fn test_day_borrow_uses_month_before_reference() {
        // April has 30 days; the birth month (January, 31) must not be used.
        let age = compute_age(2000, 1, 20, date(2000, 5, 10)).unwrap();
        assert_eq!(age.as_tuple(), (0, 3, 20));
    }

    #[test]
    fn test_day_borrow_wraps_to_december() {
        let age = compute_age(2010, 6, 25, date(2021, 1, 5)).unwrap();
        assert_eq!(age.as_tuple(), (10, 6, 11));
    }

    #[test]
    fn test_borrow_across_leap_february() {
        let age = compute_age(2000, 1, 31, date(2020, 3, 1)).unwrap();
        assert_eq!(age.years, 20);
        assert_eq!(age.as_tuple(), (20, 0, 30));
    }

    #[test]
    fn test_borrow_across_common_february() {
        let age = compute_age(2001, 1, 31, date(2001, 3, 28)).unwrap();
        assert_eq!(age.as_tuple(), (0, 1, 25));
    }

    #[test]
    fn test_month_underflow_borrows_a_year() {
        let age = compute_age(1990, 11, 3, date(2020, 2, 3)).unwrap();
        assert_eq!(age.as_tuple(), (29, 3, 0));
    }

    #[test]
    fn test_future_birth_is_rejected() {
        let err = compute_age(3000, 1, 1, date(2026, 10, 16)).unwrap_err();
        assert!(matches!(err, AdvisorError::FutureDateOfBirth { .. }));
    }

    #[test]
    fn test_invalid_dates_are_rejected() {
        for (y, m, d) in [(2021, 2, 29), (2020, 13, 1), (2020, 0, 10), (2020, 4, 31), (2020, 1, 0)] {
            let err = compute_age(y, m, d, date(2026, 1, 1)).unwrap_err();
            assert!(
                matches!(err, AdvisorError::InvalidDate { .. }),
                "{}-{}-{} should be invalid",
                y,
                m,
                d
            );
        }
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2023, 4), 30);
        assert_eq!(days_in_month(2023, 12), 31);
        assert_eq!(days_in_month(2023, 13), 0);
    }

    #[test]
    fn test_repeated_calls_agree() {
        let first = compute_age(1985, 7, 31, date(2024, 3, 1)).unwrap();
        let second = compute_age(1985, 7, 31, date(2024, 3, 1)).unwrap();
        assert_eq!(first, second);
    }
}
