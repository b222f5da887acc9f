//! Turns a calculation outcome into what the user sees: two success lines or a
//! single error line, as plain text or JSON.

use crate::core::nectar::CalculationError;
use crate::domain::model::MixResult;
use crate::utils::error::{NectarError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub const NAMES: &'static [&'static str] = &["text", "json"];
}

impl FromStr for OutputFormat {
    type Err = NectarError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(NectarError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: other.to_string(),
                reason: format!("Unsupported format. Valid formats: {}", Self::NAMES.join(", ")),
            }),
        }
    }
}

pub fn success_messages(result: &MixResult) -> [String; 2] {
    [
        format!("Amount of water to add: {:.2} kg", result.water_added),
        format!("Amount of sugar to add: {:.2} kg", result.sugar_added),
    ]
}

pub fn error_message(error: &CalculationError) -> String {
    match error {
        CalculationError::UnexpectedArithmeticError { .. } => error.to_string(),
        _ => format!("Error: {}", error),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeStatus {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub status: OutcomeStatus,
    pub messages: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<MixResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<String>,
}

impl Outcome {
    pub fn success(result: &MixResult) -> Self {
        Self {
            status: OutcomeStatus::Success,
            messages: success_messages(result).to_vec(),
            result: Some(*result),
            error_kind: None,
        }
    }

    pub fn failure(error: &CalculationError) -> Self {
        Self {
            status: OutcomeStatus::Error,
            messages: vec![error_message(error)],
            result: None,
            error_kind: Some(error.kind().to_string()),
        }
    }

    pub fn from_result(result: &std::result::Result<MixResult, CalculationError>) -> Self {
        match result {
            Ok(mix) => Self::success(mix),
            Err(e) => Self::failure(e),
        }
    }

    /// Outcome of an engine run. Calculation errors become an error outcome;
    /// host errors (config, IO) are handed back to the caller.
    pub fn from_run(run: Result<MixResult>) -> Result<Self> {
        match run {
            Ok(mix) => Ok(Self::success(&mix)),
            Err(NectarError::Calculation(e)) => Ok(Self::failure(&e)),
            Err(e) => Err(e),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == OutcomeStatus::Success
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.messages.join("\n")),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}
