use crate::core::instances::Label;
use serde::Serialize;

/// One classifier's answer for one dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prediction {
    /// Position of the classifier in the lineup.
    pub learner: usize,
    pub classifier: String,
    pub dataset: usize,
    pub predicted: Label,
    /// Label carried by the test tuple, when there is one.
    pub expected: Option<Label>,
}

impl Prediction {
    pub fn is_correct(&self) -> Option<bool> {
        self.expected.map(|e| e == self.predicted)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifierSummary {
    pub learner: usize,
    pub classifier: String,
    pub predictions: usize,
    pub scored: usize,
    pub correct: usize,
    pub cpu_seconds: f64,
}

impl ClassifierSummary {
    pub fn new(learner: usize, classifier: String) -> Self {
        Self {
            learner,
            classifier,
            predictions: 0,
            scored: 0,
            correct: 0,
            cpu_seconds: 0.0,
        }
    }

    /// Fraction of scored predictions that were right; NaN when none were
    /// scored.
    pub fn accuracy(&self) -> f64 {
        if self.scored == 0 {
            f64::NAN
        } else {
            self.correct as f64 / self.scored as f64
        }
    }

    pub(super) fn observe(&mut self, prediction: &Prediction) {
        self.predictions += 1;
        if let Some(correct) = prediction.is_correct() {
            self.scored += 1;
            if correct {
                self.correct += 1;
            }
        }
    }
}
