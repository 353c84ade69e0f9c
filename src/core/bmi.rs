use crate::utils::error::{AdvisorError, Result};

/// Body Mass Index from kilograms and centimetres, rounded to one decimal.
///
/// Only the height is checked. A zero or negative weight gives a defined
/// (if meaningless) number and is passed through.
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> Result<f64> {
    if height_cm.is_nan() || height_cm <= 0.0 {
        return Err(AdvisorError::InvalidHeight { height_cm });
    }
    let height_m = height_cm / 100.0;
    Ok(round_to_tenth(weight_kg / (height_m * height_m)))
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
