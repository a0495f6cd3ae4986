use crate::classifiers::{Classifier, ClassifierError};
use crate::core::ClassificationData;
use crate::evaluation::{EvaluationReport, Prediction};
use std::sync::mpsc::Sender;
use thiserror::Error;

use cpu_time::ThreadTime;

#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("{classifier} failed on dataset {dataset}: {source}")]
    Classification {
        classifier: String,
        dataset: usize,
        source: ClassifierError,
    },
}

/// Trains and queries every classifier of a lineup on every dataset, in
/// order: for each classifier, `train` then `classify` per dataset.
pub struct LineupEvaluator {
    learners: Vec<Box<dyn Classifier>>,
    datasets: Vec<ClassificationData>,
    report: EvaluationReport,
    progress_tx: Option<Sender<Prediction>>,
}

impl LineupEvaluator {
    pub fn new(learners: Vec<Box<dyn Classifier>>, datasets: Vec<ClassificationData>) -> Self {
        Self {
            learners,
            datasets,
            report: EvaluationReport::new(),
            progress_tx: None,
        }
    }

    /// Every prediction is also sent here as soon as it is made.
    pub fn with_progress(mut self, tx: Sender<Prediction>) -> Self {
        self.progress_tx = Some(tx);
        self
    }

    pub fn run(&mut self) -> Result<(), EvaluationError> {
        self.report = EvaluationReport::new();

        for learner in self.learners.iter_mut() {
            let classifier = learner.name();
            let position = self.report.begin_learner(classifier.clone());
            let start = ThreadTime::now();

            for (index, data) in self.datasets.iter().enumerate() {
                learner.train(data);
                let predicted =
                    learner
                        .classify(data)
                        .map_err(|source| EvaluationError::Classification {
                            classifier: classifier.clone(),
                            dataset: index,
                            source,
                        })?;

                let prediction = Prediction {
                    learner: position,
                    classifier: classifier.clone(),
                    dataset: index,
                    predicted,
                    expected: data.test_data().label(),
                };

                if let Some(tx) = &self.progress_tx {
                    let _ = tx.send(prediction.clone());
                }
                self.report.record(prediction);
            }

            self.report
                .add_cpu_seconds(position, start.elapsed().as_secs_f64());
        }

        Ok(())
    }

    pub fn report(&self) -> &EvaluationReport {
        &self.report
    }

    pub fn into_report(self) -> EvaluationReport {
        self.report
    }
}
