use crate::evaluation::report::prediction::{ClassifierSummary, Prediction};
use serde::Serialize;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::fs::File;
use std::io::{BufWriter, Error, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Csv,
    Tsv,
    Json,
}

/// Predictions in the order they were made, with a running summary per
/// classifier.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EvaluationReport {
    predictions: Vec<Prediction>,
    summaries: Vec<ClassifierSummary>,
}

impl EvaluationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the next classifier and returns its lineup position.
    pub fn begin_learner(&mut self, classifier: String) -> usize {
        let learner = self.summaries.len();
        self.summaries.push(ClassifierSummary::new(learner, classifier));
        learner
    }

    /// Predictions for classifiers that were never registered are ignored.
    pub fn record(&mut self, prediction: Prediction) {
        let Some(summary) = self.summaries.get_mut(prediction.learner) else {
            return;
        };
        summary.observe(&prediction);
        self.predictions.push(prediction);
    }

    pub fn add_cpu_seconds(&mut self, learner: usize, seconds: f64) {
        if let Some(summary) = self.summaries.get_mut(learner) {
            summary.cpu_seconds += seconds;
        }
    }

    pub fn predictions(&self) -> &[Prediction] {
        &self.predictions
    }

    pub fn predictions_for(&self, learner: usize) -> impl Iterator<Item = &Prediction> {
        self.predictions.iter().filter(move |p| p.learner == learner)
    }

    pub fn summaries(&self) -> &[ClassifierSummary] {
        &self.summaries
    }

    pub fn to_delimited(&self, sep: char) -> String {
        let mut out = String::new();
        out.push_str(&["classifier", "dataset", "predicted", "expected", "correct"].join(&sep.to_string()));
        out.push('\n');

        for p in &self.predictions {
            let fields = [
                escape_field(&p.classifier, sep),
                p.dataset.to_string(),
                p.predicted.to_string(),
                p.expected.map(|e| e.to_string()).unwrap_or_default(),
                p.is_correct().map(|c| c.to_string()).unwrap_or_default(),
            ];
            out.push_str(&fields.join(&sep.to_string()));
            out.push('\n');
        }
        out
    }

    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self).map_err(Error::other)
    }

    pub fn export(&self, path: &Path, format: ReportFormat) -> Result<(), Error> {
        let mut writer = BufWriter::new(File::create(path)?);
        match format {
            ReportFormat::Csv => writer.write_all(self.to_delimited(',').as_bytes())?,
            ReportFormat::Tsv => writer.write_all(self.to_delimited('\t').as_bytes())?,
            ReportFormat::Json => writer.write_all(self.to_json()?.as_bytes())?,
        }
        writer.flush()
    }
}

fn escape_field(field: &str, sep: char) -> String {
    if field.contains(sep) || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

impl Display for EvaluationReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for s in &self.summaries {
            let accuracy = s.accuracy();
            let accuracy = if accuracy.is_nan() {
                "NaN".to_string()
            } else {
                format!("{:.4}", accuracy)
            };
            writeln!(
                f,
                "{:<24} predictions={} scored={} correct={} acc={} t={:.6}s",
                s.classifier, s.predictions, s.scored, s.correct, accuracy, s.cpu_seconds
            )?;
        }
        Ok(())
    }
}
