use super::checks::RuleChecks;
use crate::password::application::ports::incoming::validation_rule::{
    ValidationError, ValidationRule,
};

const SPECIAL_CHARACTERS: [char; 5] = ['@', '_', '#', '$', '%'];

/// Requires length, both letter cases, a digit and a special character,
/// checked in that order.
#[derive(Debug, Clone)]
pub struct GanimedesRule {
    checks: RuleChecks,
}

impl GanimedesRule {
    pub const NAME: &'static str = "Ganimedes";

    pub fn new(minimum_length: usize) -> Self {
        Self {
            checks: RuleChecks::new(minimum_length),
        }
    }

    pub fn check_has_special_character(&self, candidate: &str) -> Result<(), ValidationError> {
        if !candidate.contains(SPECIAL_CHARACTERS) {
            return Err(ValidationError::MissingSpecialCharacter);
        }
        Ok(())
    }

    fn run_checks(&self, candidate: &str) -> Result<(), ValidationError> {
        self.checks.check_minimum_length(candidate)?;
        self.checks.check_has_uppercase(candidate)?;
        self.checks.check_has_lowercase(candidate)?;
        self.checks.check_has_digit(candidate)?;
        self.check_has_special_character(candidate)
    }
}

impl ValidationRule for GanimedesRule {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn rule() -> GanimedesRule {
        GanimedesRule::new(8)
    }

    #[test]
    fn accepts_strong_password() {
        assert_eq!(rule().is_valid("ClaveSegura123@"), Ok(true));
    }

    #[test]
    fn rejects_missing_uppercase() {
        assert_eq!(
            rule().is_valid("clavesegura123@"),
            Err(ValidationError::MissingUppercase)
        );
    }

    #[test]
    fn rejects_missing_lowercase() {
        assert_eq!(
            rule().is_valid("CLAVESEGURA123@"),
            Err(ValidationError::MissingLowercase)
        );
    }

    #[test]
    fn rejects_missing_digit() {
        assert_eq!(
            rule().is_valid("ClaveSegura@@"),
            Err(ValidationError::MissingDigit)
        );
    }

    #[test]
    fn rejects_missing_special_character() {
        assert_eq!(
            rule().is_valid("ClaveSegura123"),
            Err(ValidationError::MissingSpecialCharacter)
        );
    }

    #[test]
    fn every_special_character_is_accepted() {
        for special in SPECIAL_CHARACTERS {
            let candidate = format!("ClaveSegura123{special}");
            assert_eq!(rule().is_valid(&candidate), Ok(true), "{candidate}");
        }
    }

    #[test]
    fn other_punctuation_is_not_special() {
        assert_eq!(
            rule().is_valid("ClaveSegura123!&*"),
            Err(ValidationError::MissingSpecialCharacter)
        );
    }

    #[test]
    fn length_is_checked_before_anything_else() {
        // violates every check, only the length error surfaces
        assert_eq!(
            rule().is_valid("abc"),
            Err(ValidationError::BelowMinimumLength { minimum_length: 8 })
        );
    }

    #[test]
    fn uppercase_is_checked_before_digit_and_special() {
        assert_eq!(
            rule().is_valid("clavesinnada"),
            Err(ValidationError::MissingUppercase)
        );
    }

    #[test]
    fn exposes_name_and_minimum_length() {
        let rule = rule();
        assert_eq!(rule.name(), "Ganimedes");
        assert_eq!(rule.minimum_length(), 8);
    }
}
