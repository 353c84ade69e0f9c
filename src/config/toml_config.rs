use crate::domain::model::ProfileInput;
use crate::utils::error::{AdvisorError, Result};
use crate::utils::validation::{self, Validate};
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

pub const OUTPUT_FORMATS: [&str; 2] = ["text", "json"];

static ENV_VAR: LazyLock<Regex> = LazyLock::new(|| {
    // ${VAR_NAME}
    Regex::new(r"\$\{([^}]+)\}").expect("static regex is valid")
});

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub limits: LimitsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Values used when the command line leaves a field out.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    pub gender: Option<String>,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
}

/// Accepted input ranges. Defaults match the weight, height and year pickers of the web form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    pub min_weight_kg: f64,
    pub max_weight_kg: f64,
    pub min_height_cm: f64,
    pub max_height_cm: f64,
    pub min_birth_year: i32,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            min_weight_kg: 2.0,
            max_weight_kg: 200.0,
            min_height_cm: 40.0,
            max_height_cm: 220.0,
            min_birth_year: 1900,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
        }
    }
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| AdvisorError::ConfigError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value. Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        let limits = &self.limits;
        validation::validate_finite("limits.min_weight_kg", limits.min_weight_kg)?;
        validation::validate_finite("limits.max_weight_kg", limits.max_weight_kg)?;
        validation::validate_finite("limits.min_height_cm", limits.min_height_cm)?;
        validation::validate_finite("limits.max_height_cm", limits.max_height_cm)?;
        validation::validate_bounds("limits.weight_kg", limits.min_weight_kg, limits.max_weight_kg)?;
        validation::validate_bounds("limits.height_cm", limits.min_height_cm, limits.max_height_cm)?;
        if limits.min_height_cm <= 0.0 {
            return Err(AdvisorError::InvalidConfigValueError {
                field: "limits.min_height_cm".to_string(),
                value: limits.min_height_cm.to_string(),
                reason: "Height limits must be positive".to_string(),
            });
        }

        if let Some(weight) = self.defaults.weight_kg {
            validation::validate_finite("defaults.weight_kg", weight)?;
            validation::validate_range(
                "defaults.weight_kg",
                weight,
                limits.min_weight_kg,
                limits.max_weight_kg,
            )?;
        }
        if let Some(height) = self.defaults.height_cm {
            validation::validate_finite("defaults.height_cm", height)?;
            validation::validate_range(
                "defaults.height_cm",
                height,
                limits.min_height_cm,
                limits.max_height_cm,
            )?;
        }

        validation::validate_one_of("output.format", &self.output.format, &OUTPUT_FORMATS)?;

        Ok(())
    }

    pub fn output_format(&self) -> &str {
        &self.output.format
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

impl LimitsConfig {
    /// Checks a submission against the configured ranges, with `today` capping the birth year.
    pub fn check(&self, input: &ProfileInput, today: NaiveDate) -> Result<()> {
        validation::validate_finite("weight_kg", input.weight_kg)?;
        validation::validate_finite("height_cm", input.height_cm)?;
        validation::validate_range(
            "birth_year",
            input.birth_year,
            self.min_birth_year,
            today.year(),
        )?;
        validation::validate_range(
            "weight_kg",
            input.weight_kg,
            self.min_weight_kg,
            self.max_weight_kg,
        )?;
        validation::validate_range(
            "height_cm",
            input.height_cm,
            self.min_height_cm,
            self.max_height_cm,
        )?;
        Ok(())
    }
}
