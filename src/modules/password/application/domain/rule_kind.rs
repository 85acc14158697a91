use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::password::application::ports::incoming::validation_rule::ValidationRule;
use crate::password::application::services::rules::{CalistoRule, GanimedesRule};

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("Unknown validation rule: {0}")]
pub struct UnknownRuleError(pub String);

/// The built-in rules, by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    Ganimedes,
    Calisto,
}

impl RuleKind {
    pub fn default_minimum_length(self) -> usize {
        match self {
            RuleKind::Ganimedes => 8,
            RuleKind::Calisto => 6,
        }
    }

    pub fn build(self, minimum_length: usize) -> Box<dyn ValidationRule> {
        match self {
            RuleKind::Ganimedes => Box::new(GanimedesRule::new(minimum_length)),
            RuleKind::Calisto => Box::new(CalistoRule::new(minimum_length)),
        }
    }
}

impl FromStr for RuleKind {
    type Err = UnknownRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ganimedes" => Ok(RuleKind::Ganimedes),
            "calisto" => Ok(RuleKind::Calisto),
            _ => Err(UnknownRuleError(s.to_string())),
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleKind::Ganimedes => f.write_str(GanimedesRule::NAME),
            RuleKind::Calisto => f.write_str(CalistoRule::NAME),
        }
    }
}
