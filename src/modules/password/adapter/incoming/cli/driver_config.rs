use std::env;
use std::str::FromStr;

use crate::password::application::domain::rule_kind::{RuleKind, UnknownRuleError};

pub const RULE_VAR: &str = "VALIDATOR_RULE";
pub const MIN_LENGTH_VAR: &str = "VALIDATOR_MIN_LENGTH";
pub const OUTPUT_VAR: &str = "VALIDATOR_OUTPUT";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    UnknownRule(#[from] UnknownRuleError),

    #[error("Invalid VALIDATOR_MIN_LENGTH value: {0}")]
    InvalidMinimumLength(String),

    #[error("Unknown output format: {0}")]
    UnknownOutputFormat(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::UnknownOutputFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    pub rule: RuleKind,
    pub minimum_length: usize,
    pub output: OutputFormat,
}

impl DriverConfig {
    /// Load driver configuration from environment variables.
    ///
    /// `.env.{RUST_ENV}` is tried first, then `.env`; neither is required.
    pub fn from_env() -> Result<Self, ConfigError> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        if dotenvy::from_filename(format!(".env.{}", env_name)).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let rule = match lookup(RULE_VAR) {
            Some(name) => name.parse::<RuleKind>()?,
            None => RuleKind::Ganimedes,
        };

        let minimum_length = match lookup(MIN_LENGTH_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::InvalidMinimumLength(raw))?,
            None => rule.default_minimum_length(),
        };

        let output = match lookup(OUTPUT_VAR) {
            Some(raw) => raw.parse()?,
            None => OutputFormat::default(),
        };

        Ok(Self {
            rule,
            minimum_length,
            output,
        })
    }
}
