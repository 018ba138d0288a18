use crate::domain::model::{ParcelOrder, PaymentOrder, ReportOrder};
use crate::utils::error::{LessonError, Result};
use crate::utils::validation::{
    validate_amount, validate_non_empty_string, validate_range, validate_required_field, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

pub const MAX_CAPTURE_ITERATIONS: usize = 1000;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern is valid"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub scenario: Option<ScenarioMeta>,
    pub payments: Option<Vec<PaymentOrder>>,
    pub parcels: Option<Vec<ParcelOrder>>,
    pub reports: Option<Vec<ReportOrder>>,
    pub capture: Option<CaptureConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioMeta {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptureConfig {
    pub iterations: Option<usize>,
}

impl ScenarioConfig {
    /// 從 TOML 檔案載入
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換 ${VAR_NAME}，未設定的變數保持原樣，交給 validate 回報
    fn substitute_env_vars(content: &str) -> String {
        PLACEHOLDER
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn name(&self) -> &str {
        self.scenario
            .as_ref()
            .map(|meta| meta.name.as_str())
            .unwrap_or("builtin")
    }

    pub fn capture_iterations(&self) -> Option<usize> {
        self.capture.as_ref().and_then(|c| c.iterations)
    }
}

fn validate_text(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    if let Some(caps) = PLACEHOLDER.captures(value) {
        return Err(LessonError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Environment variable {} is not set", &caps[1]),
        });
    }
    Ok(())
}

impl Validate for ScenarioConfig {
    fn validate(&self) -> Result<()> {
        if let Some(meta) = &self.scenario {
            validate_text("scenario.name", &meta.name)?;
        }

        for order in self.payments.iter().flatten() {
            validate_amount(order.amount)?;
        }

        for order in self.parcels.iter().flatten() {
            validate_text("parcels.title", &order.title)?;
        }

        for order in self.reports.iter().flatten() {
            validate_text("reports.body", &order.body)?;
            validate_text("reports.recipient", &order.recipient)?;
        }

        if let Some(capture) = &self.capture {
            let iterations = validate_required_field("capture.iterations", &capture.iterations)?;
            validate_range("capture.iterations", *iterations, 1, MAX_CAPTURE_ITERATIONS)?;
        }

        Ok(())
    }
}
