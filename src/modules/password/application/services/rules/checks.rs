use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

use crate::password::application::ports::incoming::validation_rule::ValidationError;

/// Checks shared by every rule. Each rule owns one and calls the checks it
/// needs in its own order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleChecks {
    minimum_length: usize,
}

impl RuleChecks {
    pub fn new(minimum_length: usize) -> Self {
        Self { minimum_length }
    }

    pub fn minimum_length(&self) -> usize {
        self.minimum_length
    }

    /// Length is counted in characters and must exceed the minimum.
    pub fn check_minimum_length(&self, candidate: &str) -> Result<(), ValidationError> {
        if candidate.chars().count() <= self.minimum_length {
            return Err(ValidationError::BelowMinimumLength {
                minimum_length: self.minimum_length,
            });
        }
        Ok(())
    }

    pub fn check_has_uppercase(&self, candidate: &str) -> Result<(), ValidationError> {
        if !candidate.chars().any(char::is_uppercase) {
            return Err(ValidationError::MissingUppercase);
        }
        Ok(())
    }

    pub fn check_has_lowercase(&self, candidate: &str) -> Result<(), ValidationError> {
        if !candidate.chars().any(char::is_lowercase) {
            return Err(ValidationError::MissingLowercase);
        }
        Ok(())
    }

    /// Any Unicode decimal digit (general category `Nd`) counts.
    pub fn check_has_digit(&self, candidate: &str) -> Result<(), ValidationError> {
        if !candidate
            .chars()
            .any(|c| c.general_category() == GeneralCategory::DecimalNumber)
        {
            return Err(ValidationError::MissingDigit);
        }
        Ok(())
    }
}
