use std::process::ExitCode;

use super::driver_config::DriverConfig;
use super::report::ValidationReport;
use crate::password::application::domain::rule_kind::RuleKind;
use crate::password::application::services::Validator;

/// Run when no candidates are given: each rule with its default minimum
/// length against a password it accepts.
pub const DEMONSTRATIONS: [(RuleKind, &str); 2] = [
    (RuleKind::Ganimedes, "ClaveSegura123@"),
    (RuleKind::Calisto, "ClaveCalisto123"),
];

#[derive(Debug)]
pub struct DriverOutcome {
    pub reports: Vec<ValidationReport>,
}

impl DriverOutcome {
    pub fn all_accepted(&self) -> bool {
        self.reports.iter().all(|r| r.accepted)
    }

    /// 0 when every candidate was accepted, 1 otherwise.
    pub fn exit_status(&self) -> u8 {
        if self.all_accepted() {
            0
        } else {
            1
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }
}

pub fn run_driver(config: &DriverConfig, candidates: &[String]) -> DriverOutcome {
    let reports = if candidates.is_empty() {
        tracing::info!("No candidates given, running demonstrations");
        DEMONSTRATIONS
            .iter()
            .map(|&(kind, candidate)| {
                let validator = Validator::new(kind.build(kind.default_minimum_length()));
                ValidationReport::evaluate(kind, &validator, candidate)
            })
            .collect()
    } else {
        tracing::info!(
            rule = %config.rule,
            minimum_length = config.minimum_length,
            count = candidates.len(),
            "Validating candidates"
        );
        let validator = Validator::new(config.rule.build(config.minimum_length));
        candidates
            .iter()
            .map(|candidate| ValidationReport::evaluate(config.rule, &validator, candidate))
            .collect()
    };

    DriverOutcome { reports }
}
