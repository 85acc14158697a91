use crate::password::application::ports::incoming::validation_rule::{
    ValidationError, ValidationRule,
};

/// Decouples callers from the concrete rule: every call is forwarded to the
/// held rule, result and error unchanged.
pub struct Validator {
    rule: Box<dyn ValidationRule>,
}

impl Validator {
    pub fn new(rule: Box<dyn ValidationRule>) -> Self {
        Self { rule }
    }

    pub fn is_valid(&self, candidate: &str) -> Result<bool, ValidationError> {
        tracing::trace!(rule = self.rule.name(), "validating candidate");
        self.rule.is_valid(candidate)
    }

    pub fn rule(&self) -> &dyn ValidationRule {
        self.rule.as_ref()
    }
}
