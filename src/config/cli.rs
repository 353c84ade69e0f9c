use crate::config::toml_config::{TomlConfig, OUTPUT_FORMATS};
use crate::domain::model::ProfileInput;
use crate::utils::error::{AdvisorError, Result};
use crate::utils::validation::{self, Validate};
use chrono::NaiveDate;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "age-advisor")]
#[command(about = "Calendar age, BMI and lifestyle tips from a date of birth")]
pub struct CliConfig {
    /// Date of birth as YYYY-MM-DD
    #[arg(long, conflicts_with_all = ["year", "month", "day"])]
    pub birth_date: Option<String>,

    /// Birth year (use with --month and --day)
    #[arg(long, requires_all = ["month", "day"])]
    pub year: Option<i32>,

    #[arg(long, requires_all = ["year", "day"])]
    pub month: Option<u32>,

    #[arg(long, requires_all = ["year", "month"])]
    pub day: Option<u32>,

    /// Weight in kilograms
    #[arg(long)]
    pub weight: Option<f64>,

    /// Height in centimetres
    #[arg(long)]
    pub height: Option<f64>,

    /// male, female, or anything else for generic guidance
    #[arg(long)]
    pub gender: Option<String>,

    /// Reference date as YYYY-MM-DD instead of today
    #[arg(long)]
    pub today: Option<String>,

    /// Path to a TOML file with defaults and limits
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format: text or json (overrides the config file)
    #[arg(long)]
    pub format: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Splits `YYYY-MM-DD` into fields without checking the calendar; that is left to date math.
pub fn parse_ymd(field_name: &str, value: &str) -> Result<(i32, u32, u32)> {
    let parts: Vec<&str> = value.trim().split('-').collect();
    let malformed = || {
        AdvisorError::invalid_argument(field_name, format!("expected YYYY-MM-DD, got '{}'", value))
    };
    match parts.as_slice() {
        [y, m, d] => Ok((
            y.parse().map_err(|_| malformed())?,
            m.parse().map_err(|_| malformed())?,
            d.parse().map_err(|_| malformed())?,
        )),
        _ => Err(malformed()),
    }
}

impl CliConfig {
    pub fn birth_ymd(&self) -> Result<(i32, u32, u32)> {
        if let Some(date) = &self.birth_date {
            return parse_ymd("birth_date", date);
        }
        match (self.year, self.month, self.day) {
            (Some(y), Some(m), Some(d)) => Ok((y, m, d)),
            _ => Err(AdvisorError::invalid_argument(
                "birth_date",
                "give --birth-date or all of --year, --month, --day",
            )),
        }
    }

    pub fn reference_date(&self) -> Result<Option<NaiveDate>> {
        self.today
            .as_deref()
            .map(|today| {
                NaiveDate::parse_from_str(today.trim(), "%Y-%m-%d").map_err(|e| {
                    AdvisorError::invalid_argument("today", format!("'{}': {}", today, e))
                })
            })
            .transpose()
    }

    /// Reads `--config` if given, otherwise an all-defaults config.
    pub fn load_file_config(&self) -> Result<TomlConfig> {
        match &self.config {
            Some(path) => {
                validation::validate_path("config", path)?;
                TomlConfig::from_file(path)
            }
            None => Ok(TomlConfig::default()),
        }
    }

    /// Command-line values win over the config file defaults.
    pub fn profile_input(&self, file: &TomlConfig) -> Result<ProfileInput> {
        let (birth_year, birth_month, birth_day) = self.birth_ymd()?;

        let weight_kg = self
            .weight
            .or(file.defaults.weight_kg)
            .ok_or_else(|| {
                AdvisorError::invalid_argument("weight", "no --weight given and no default configured")
            })?;
        let height_cm = self
            .height
            .or(file.defaults.height_cm)
            .ok_or_else(|| {
                AdvisorError::invalid_argument("height", "no --height given and no default configured")
            })?;

        Ok(ProfileInput {
            birth_year,
            birth_month,
            birth_day,
            weight_kg,
            height_cm,
            gender: self.gender.clone().or_else(|| file.defaults.gender.clone()),
        })
    }

    pub fn output_format<'a>(&'a self, file: &'a TomlConfig) -> &'a str {
        self.format.as_deref().unwrap_or_else(|| file.output_format())
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validation::validate_path("config", path)?;
        }
        if let Some(format) = &self.format {
            validation::validate_one_of("format", format, &OUTPUT_FORMATS)?;
        }
        if let Some(weight) = self.weight {
            validation::validate_finite("weight", weight)?;
        }
        if let Some(height) = self.height {
            validation::validate_finite("height", height)?;
        }
        self.birth_ymd()?;
        self.reference_date()?;
        Ok(())
    }
}
