pub mod rule_fixtures;
