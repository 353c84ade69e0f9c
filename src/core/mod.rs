pub mod advisor;
pub mod bmi;
pub mod date_math;
pub mod report;

pub use crate::domain::model::{AgeResult, HealthReport, ProfileInput, Recommendation};
pub use crate::domain::ports::{Clock, FixedClock, SystemClock};
pub use crate::utils::error::Result;
