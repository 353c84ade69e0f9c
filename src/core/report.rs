use crate::core::advisor::recommend;
use crate::core::bmi::compute_bmi;
use crate::core::date_math::{age_between, calendar_date};
use crate::domain::model::{HealthReport, ProfileInput};
use crate::domain::ports::Clock;
use crate::utils::error::{AdvisorError, Result};

/// Form choice that means "no gender given".
pub const UNSPECIFIED_GENDER: &str = "prefer not to say";

pub struct AdvisorEngine<C: Clock> {
    clock: C,
}

impl<C: Clock> AdvisorEngine<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    pub fn today(&self) -> chrono::NaiveDate {
        self.clock.today()
    }

    /// Age, BMI and recommendations for one form submission.
    pub fn evaluate(&self, input: &ProfileInput) -> Result<HealthReport> {
        let reference_date = self.clock.today();
        tracing::debug!(
            "Evaluating birth date {}-{:02}-{:02} against {}",
            input.birth_year,
            input.birth_month,
            input.birth_day,
            reference_date
        );

        let birth_date = calendar_date(input.birth_year, input.birth_month, input.birth_day)?;
        let age = age_between(birth_date, reference_date)?;
        tracing::info!("Age: {}", age);

        let bmi = match compute_bmi(input.weight_kg, input.height_cm) {
            Ok(value) => {
                tracing::info!("BMI: {:.1}", value);
                Some(value)
            }
            Err(e @ AdvisorError::InvalidHeight { .. }) => {
                tracing::warn!("Skipping BMI: {}", e);
                None
            }
            Err(e) => return Err(e),
        };

        let gender = effective_gender(input.gender.as_deref());
        let recommendation = recommend(i64::from(age.years), gender)?;
        tracing::debug!(
            "Life stage {} with {} tips",
            recommendation.life_stage,
            recommendation.tips.len()
        );

        Ok(HealthReport {
            birth_date,
            reference_date,
            age,
            bmi,
            recommendation,
        })
    }
}

/// Drops the form's "Prefer not to say" choice so it routes to the generic bucket.
pub fn effective_gender(gender: Option<&str>) -> Option<&str> {
    gender.filter(|g| !g.trim().eq_ignore_ascii_case(UNSPECIFIED_GENDER))
}
