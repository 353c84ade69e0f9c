//! Life-stage and measurement recommendations.
//!
//! General, non-medical guidance picked from static tables by age and gender.

use crate::domain::model::{GenderBucket, LifeStage, Recommendation};
use crate::utils::error::{AdvisorError, Result};
use std::collections::BTreeMap;

/// Upper bounds (exclusive) of each life stage, checked in order.
const LIFE_STAGES: &[(i64, LifeStage, &str)] = &[
    (
        13,
        LifeStage::Child,
        "Focus on growth, regular pediatric checkups, and active play.",
    ),
    (
        20,
        LifeStage::Teen,
        "Ensure balanced nutrition and regular physical activity.",
    ),
    (
        40,
        LifeStage::Adult,
        "Maintain a balance of cardio and strength training.",
    ),
    (
        60,
        LifeStage::MiddleAged,
        "Prioritize strength training, flexibility, and joint care.",
    ),
];

const SENIOR_TIP: &str = "Prioritize balance, low-impact cardio, strength, and mobility.";

pub const GENERIC_MEASUREMENTS_TIP: &str =
    "Measurements are generic because gender was not specified.";

const MALE_MEASUREMENTS: [(&str, &str); 3] = [
    ("Chest_cm", "90-110 (varies by height)"),
    ("Waist_cm", "80-100"),
    ("Hip_cm", "95-105"),
];

const FEMALE_MEASUREMENTS: [(&str, &str); 3] = [
    ("Chest_cm", "80-100 (varies by height)"),
    ("Waist_cm", "70-95"),
    ("Hip_cm", "95-115"),
];

const GENERIC_MEASUREMENTS: [(&str, &str); 3] = [
    ("Chest_cm", "80-110 (varies by height and body type)"),
    ("Waist_cm", "70-100"),
    ("Hip_cm", "90-115"),
];

pub fn life_stage_for(age_years: u32) -> (LifeStage, &'static str) {
    let age = i64::from(age_years);
    LIFE_STAGES
        .iter()
        .find(|(upper, _, _)| age < *upper)
        .map(|(_, stage, tip)| (*stage, *tip))
        .unwrap_or((LifeStage::Senior, SENIOR_TIP))
}

/// Case-insensitive, whitespace-tolerant gender routing.
pub fn normalize_gender(gender: Option<&str>) -> GenderBucket {
    match gender.unwrap_or("").trim().to_lowercase().as_str() {
        "male" | "m" => GenderBucket::Male,
        "female" | "f" => GenderBucket::Female,
        _ => GenderBucket::Generic,
    }
}

fn measurements_for(bucket: GenderBucket) -> BTreeMap<String, String> {
    let table = match bucket {
        GenderBucket::Male => &MALE_MEASUREMENTS,
        GenderBucket::Female => &FEMALE_MEASUREMENTS,
        GenderBucket::Generic => &GENERIC_MEASUREMENTS,
    };
    table
        .iter()
        .map(|(region, range)| (region.to_string(), range.to_string()))
        .collect()
}

pub fn recommend(age_years: i64, gender: Option<&str>) -> Result<Recommendation> {
    if age_years < 0 {
        return Err(AdvisorError::invalid_argument(
            "age_years",
            format!("must not be negative, got {}", age_years),
        ));
    }
    let age_years = u32::try_from(age_years).map_err(|_| {
        AdvisorError::invalid_argument("age_years", format!("{} is out of range", age_years))
    })?;

    let (life_stage, stage_tip) = life_stage_for(age_years);
    let bucket = normalize_gender(gender);

    let mut tips = vec![stage_tip.to_string()];
    if bucket == GenderBucket::Generic {
        tips.push(GENERIC_MEASUREMENTS_TIP.to_string());
    }

    Ok(Recommendation {
        life_stage,
        measurements: measurements_for(bucket),
        tips,
    })
}
