/// A named, ordered sequence of checks deciding whether a candidate password
/// is acceptable.
///
/// `is_valid` never returns `Ok(false)`: the first violated check is reported
/// as an `Err`, so callers always learn why a candidate was rejected.
pub trait ValidationRule: Send + Sync {
    fn is_valid(&self, candidate: &str) -> Result<bool, ValidationError>;

    fn minimum_length(&self) -> usize;

    fn name(&self) -> &'static str;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Password must be longer than {minimum_length} characters")]
    BelowMinimumLength { minimum_length: usize },

    #[error("Password must contain an uppercase letter")]
    MissingUppercase,

    #[error("Password must contain a lowercase letter")]
    MissingLowercase,

    #[error("Password must contain a digit")]
    MissingDigit,

    #[error("Password must contain one of the special characters @ _ # $ %")]
    MissingSpecialCharacter,

    #[error("Password must contain the secret word")]
    MissingSecretWord,
}

impl ValidationError {
    /// Stable identifier for logs and machine-readable output.
    pub fn kind(&self) -> &'static str {
        match self {
            ValidationError::BelowMinimumLength { .. } => "below_minimum_length",
            ValidationError::MissingUppercase => "missing_uppercase",
            ValidationError::MissingLowercase => "missing_lowercase",
            ValidationError::MissingDigit => "missing_digit",
            ValidationError::MissingSpecialCharacter => "missing_special_character",
            ValidationError::MissingSecretWord => "missing_secret_word",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_message_names_the_bound() {
        let err = ValidationError::BelowMinimumLength { minimum_length: 8 };
        assert_eq!(err.to_string(), "Password must be longer than 8 characters");
    }

    #[test]
    fn kinds_are_distinct() {
        let kinds = [
            ValidationError::BelowMinimumLength { minimum_length: 0 }.kind(),
            ValidationError::MissingUppercase.kind(),
            ValidationError::MissingLowercase.kind(),
            ValidationError::MissingDigit.kind(),
            ValidationError::MissingSpecialCharacter.kind(),
            ValidationError::MissingSecretWord.kind(),
        ];

        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
