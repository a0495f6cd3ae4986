mod one_rule;

pub use one_rule::{OneRule, ValueRule};
