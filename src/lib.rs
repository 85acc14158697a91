pub mod modules;
pub use modules::password;

pub use password::application::domain::rule_kind::{RuleKind, UnknownRuleError};
pub use password::application::ports::incoming::{ValidationError, ValidationRule};
pub use password::application::services::rules::{CalistoRule, GanimedesRule};
pub use password::application::services::Validator;

#[cfg(test)]
mod tests;
