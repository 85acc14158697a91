pub mod rule_kind;
