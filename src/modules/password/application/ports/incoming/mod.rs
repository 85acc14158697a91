pub mod validation_rule;

pub use validation_rule::{ValidationError, ValidationRule};
