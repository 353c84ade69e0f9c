pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::{
    advisor::recommend,
    bmi::compute_bmi,
    date_math::{age_between, compute_age, days_in_month},
    report::AdvisorEngine,
};
pub use config::toml_config::TomlConfig;
pub use domain::model::{
    AgeResult, GenderBucket, HealthReport, LifeStage, ProfileInput, Recommendation,
};
pub use domain::ports::{Clock, FixedClock, SystemClock};
pub use utils::error::{AdvisorError, Result};
