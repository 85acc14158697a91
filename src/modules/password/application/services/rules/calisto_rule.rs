use super::checks::RuleChecks;
use crate::password::application::ports::incoming::validation_rule::{
    ValidationError, ValidationRule,
};

const SECRET_WORD: &str = "calisto";

/// Requires length, a digit and the secret word, checked in that order.
#[derive(Debug, Clone)]
pub struct CalistoRule {
    checks: RuleChecks,
}

impl CalistoRule {
    pub const NAME: &'static str = "Calisto";

    pub fn new(minimum_length: usize) -> Self {
        Self {
            checks: RuleChecks::new(minimum_length),
        }
    }

    /// Case-insensitive.
    pub fn check_has_secret_word(&self, candidate: &str) -> Result<(), ValidationError> {
        if !candidate.to_lowercase().contains(SECRET_WORD) {
            return Err(ValidationError::MissingSecretWord);
        }
        Ok(())
    }

    fn run_checks(&self, candidate: &str) -> Result<(), ValidationError> {
        self.checks.check_minimum_length(candidate)?;
        self.checks.check_has_digit(candidate)?;
        self.check_has_secret_word(candidate)
    }
}

impl ValidationRule for CalistoRule {
    fn is_valid(&self, candidate: &str) -> Result<bool, ValidationError> {
        self.run_checks(candidate).inspect_err(|e| {
            tracing::debug!(rule = Self::NAME, reason = e.kind(), "candidate rejected");
        })?;
        Ok(true)
    }

    fn minimum_length(&self) -> usize {
        self.checks.minimum_length()
    }

    fn name(&self) -> &'static str {
        Self::NAME
    }
}
