use serde::Serialize;

use super::driver_config::OutputFormat;
use crate::password::application::domain::rule_kind::RuleKind;
use crate::password::application::ports::incoming::validation_rule::ValidationError;
use crate::password::application::services::Validator;

/// Outcome of validating one candidate. The candidate itself is only kept for
/// text output and never serialized.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub rule: RuleKind,
    #[serde(skip)]
    pub candidate: String,
    pub candidate_length: usize,
    pub accepted: bool,
    pub reason: Option<&'static str>,
    #[serde(skip)]
    pub error: Option<ValidationError>,
}

impl ValidationReport {
    pub fn evaluate(rule: RuleKind, validator: &Validator, candidate: &str) -> Self {
        let outcome = validator.is_valid(candidate);

        Self {
            rule,
            candidate: candidate.to_string(),
            candidate_length: candidate.chars().count(),
            accepted: outcome.is_ok(),
            reason: outcome.as_ref().err().map(ValidationError::kind),
            error: outcome.err(),
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Text => Ok(self.to_text()),
            OutputFormat::Json => serde_json::to_string(self),
        }
    }

    fn to_text(&self) -> String {
        match &self.error {
            None => format!("\"{}\": accepted by {}", self.candidate, self.rule),
            Some(e) => format!("\"{}\": rejected by {}: {}", self.candidate, self.rule, e),
        }
    }
}
