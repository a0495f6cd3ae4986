mod evaluation_report;
mod prediction;

pub use evaluation_report::{EvaluationReport, ReportFormat};
pub use prediction::{ClassifierSummary, Prediction};
