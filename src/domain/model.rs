use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Calendar difference between a birth date and a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeResult {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

impl AgeResult {
    pub fn new(years: u32, months: u32, days: u32) -> Self {
        Self {
            years,
            months,
            days,
        }
    }

    pub fn as_tuple(&self) -> (u32, u32, u32) {
        (self.years, self.months, self.days)
    }
}

fn plural(n: u32) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

impl fmt::Display for AgeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} year{}, {} month{}, {} day{}",
            self.years,
            plural(self.years),
            self.months,
            plural(self.months),
            self.days,
            plural(self.days)
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifeStage {
    Child,
    Teen,
    Adult,
    #[serde(rename = "Middle-aged")]
    MiddleAged,
    Senior,
}

impl LifeStage {
    pub fn label(self) -> &'static str {
        match self {
            LifeStage::Child => "Child",
            LifeStage::Teen => "Teen",
            LifeStage::Adult => "Adult",
            LifeStage::MiddleAged => "Middle-aged",
            LifeStage::Senior => "Senior",
        }
    }
}

impl fmt::Display for LifeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which measurement table a gender string routes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenderBucket {
    Male,
    Female,
    Generic,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub life_stage: LifeStage,
    pub measurements: BTreeMap<String, String>,
    pub tips: Vec<String>,
}

/// Raw form input as collected by the shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileInput {
    pub birth_year: i32,
    pub birth_month: u32,
    pub birth_day: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub gender: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub birth_date: NaiveDate,
    pub reference_date: NaiveDate,
    pub age: AgeResult,
    /// `None` when the height did not allow a BMI to be computed. Only reachable
    /// through the library: the CLI rejects out-of-range heights before evaluating.
    pub bmi: Option<f64>,
    pub recommendation: Recommendation,
}

impl HealthReport {
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("Age: {}\n", self.age));
        match self.bmi {
            Some(bmi) => out.push_str(&format!("BMI: {:.1}\n", bmi)),
            None => out.push_str("BMI: enter valid height and weight for BMI calculation\n"),
        }
        out.push_str("\nRecommendations\n");
        out.push_str(&format!("Life stage: {}\n", self.recommendation.life_stage));
        if !self.recommendation.measurements.is_empty() {
            out.push_str("Suggested measurements:\n");
            for (region, range) in &self.recommendation.measurements {
                out.push_str(&format!("  {}: {}\n", region, range));
            }
        }
        if !self.recommendation.tips.is_empty() {
            out.push_str("Tips:\n");
            for tip in &self.recommendation.tips {
                out.push_str(&format!("  - {}\n", tip));
            }
        }
        out
    }
}
