use crate::{CalistoRule, GanimedesRule, Validator};

pub const GANIMEDES_MIN_LENGTH: usize = 8;
pub const CALISTO_MIN_LENGTH: usize = 6;

pub fn ganimedes_validator() -> Validator {
    Validator::new(Box::new(GanimedesRule::new(GANIMEDES_MIN_LENGTH)))
}

pub fn calisto_validator() -> Validator {
    Validator::new(Box::new(CalistoRule::new(CALISTO_MIN_LENGTH)))
}

/// A candidate of exactly `len` characters that satisfies every
/// non-length check of both rules.
pub fn strong_candidate_of_len(len: usize) -> String {
    let base = "Calisto1@";
    base.chars().cycle().take(len).collect()
}
