use crate::classifiers::{Classifier, ClassifierError};
use crate::core::ClassificationData;
use crate::core::instances::Label;
use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

pub struct TrainSpyHandle(Arc<AtomicU64>);
impl TrainSpyHandle {
    pub fn count(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

/// Counts `train` calls and answers with the running count.
pub struct TrainSpyClassifier {
    count: Arc<AtomicU64>,
}

impl TrainSpyClassifier {
    pub fn new() -> (Self, TrainSpyHandle) {
        let counter = Arc::new(AtomicU64::new(0));
        (
            Self {
                count: counter.clone(),
            },
            TrainSpyHandle(counter),
        )
    }
}

impl Classifier for TrainSpyClassifier {
    fn train(&mut self, _data: &ClassificationData) {
        self.count.fetch_add(1, Ordering::Relaxed);
    }

    fn classify(&self, _data: &ClassificationData) -> Result<Label, ClassifierError> {
        match self.count.load(Ordering::Relaxed) {
            0 => Err(ClassifierError::Untrained),
            n => Ok(n as Label),
        }
    }

    fn name(&self) -> String {
        "Train Spy".to_string()
    }
}
