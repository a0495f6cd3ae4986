mod report;

pub use report::{ClassifierSummary, EvaluationReport, Prediction, ReportFormat};
