use crate::classifiers::{Classifier, ClassifierError};
use crate::core::ClassificationData;
use crate::core::instances::Label;

/// Answers with the test tuple's own label once it has seen any data.
#[derive(Default)]
pub struct OracleClassifier {
    trained: bool,
}

impl Classifier for OracleClassifier {
    fn train(&mut self, _data: &ClassificationData) {
        self.trained = true;
    }

    fn classify(&self, data: &ClassificationData) -> Result<Label, ClassifierError> {
        if !self.trained {
            return Err(ClassifierError::Untrained);
        }
        Ok(data.test_data().label_or_default())
    }

    fn name(&self) -> String {
        "Oracle".to_string()
    }
}
