mod lineup_evaluator;
pub use lineup_evaluator::{EvaluationError, LineupEvaluator};
