use age_advisor::{age_between, compute_age, compute_bmi, days_in_month, AdvisorError, AgeResult};
use anyhow::Result;
use chrono::{Datelike, Days, Local, NaiveDate};
use proptest::prelude::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Adds years and months field-wise, rolls an overflowing day of month
/// forward into the following month, then adds the remaining days.
fn reconstruct(birth: NaiveDate, age: AgeResult) -> NaiveDate {
    let total_months = birth.month0() as i32 + age.months as i32;
    let year = birth.year() + age.years as i32 + total_months / 12;
    let month = (total_months % 12) as u32 + 1;
    date(year, month, 1) + Days::new(u64::from(birth.day() - 1 + age.days))
}

#[test]
fn test_exact_thirtieth_birthday() -> Result<()> {
    let age = compute_age(1990, 5, 15, date(2020, 5, 15))?;
    assert_eq!(age.as_tuple(), (30, 0, 0));
    Ok(())
}

#[test]
fn test_borrow_days_keeps_years() -> Result<()> {
    let age = compute_age(2000, 1, 31, date(2020, 3, 1))?;
    assert_eq!(age.years, 20);
    assert_eq!(reconstruct(date(2000, 1, 31), age), date(2020, 3, 1));
    Ok(())
}

#[test]
fn test_far_future_birth_fails_against_today() {
    let today = Local::now().date_naive();
    let result = compute_age(3000, 1, 1, today);
    assert!(matches!(
        result,
        Err(AdvisorError::FutureDateOfBirth { .. }) | Err(AdvisorError::InvalidDate { .. })
    ));
}

#[test]
fn test_leap_day_birthday_in_common_year() -> Result<()> {
    // 2021 has no Feb 29th; the first full year completes on March 1st.
    let age = compute_age(2020, 2, 29, date(2021, 2, 28))?;
    assert_eq!(age.as_tuple(), (0, 11, 30));
    let age = compute_age(2020, 2, 29, date(2021, 3, 1))?;
    assert_eq!(age.as_tuple(), (1, 0, 0));
    Ok(())
}

#[test]
fn test_calls_are_idempotent() -> Result<()> {
    let reference = date(2024, 3, 1);
    assert_eq!(
        compute_age(1999, 12, 31, reference)?,
        compute_age(1999, 12, 31, reference)?
    );
    assert_eq!(compute_bmi(81.3, 177.0)?, compute_bmi(81.3, 177.0)?);
    Ok(())
}

#[test]
fn test_bmi_reference_value() -> Result<()> {
    assert_eq!(compute_bmi(70.0, 170.0)?, 24.2);
    assert!(matches!(
        compute_bmi(70.0, 0.0),
        Err(AdvisorError::InvalidHeight { .. })
    ));
    Ok(())
}

fn any_date() -> impl Strategy<Value = NaiveDate> {
    (1900i32..2100, 1u32..=12, 1u32..=31)
        .prop_map(|(y, m, d)| date(y, m, d.min(days_in_month(y, m))))
}

proptest! {
    #[test]
    fn prop_age_reconstructs_reference(a in any_date(), b in any_date()) {
        let (birth, reference) = if a <= b { (a, b) } else { (b, a) };
        let age = age_between(birth, reference).unwrap();
        prop_assert!(age.months < 12);
        prop_assert_eq!(reconstruct(birth, age), reference);
    }

    #[test]
    fn prop_future_birth_always_fails(a in any_date(), b in any_date()) {
        prop_assume!(a != b);
        let (reference, birth) = if a < b { (a, b) } else { (b, a) };
        let is_future = matches!(
            age_between(birth, reference),
            Err(AdvisorError::FutureDateOfBirth { .. })
        );
        prop_assert!(is_future);
    }
}
