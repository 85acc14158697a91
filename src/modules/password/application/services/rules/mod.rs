mod calisto_rule;
mod checks;
mod ganimedes_rule;

pub use calisto_rule::CalistoRule;
pub use ganimedes_rule::GanimedesRule;
