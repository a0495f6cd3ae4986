use crate::classifiers::{Classifier, ClassifierError};
use crate::core::ClassificationData;
use crate::core::instances::Label;

#[derive(Default)]
pub struct ClassifierNeverTrained;

impl Classifier for ClassifierNeverTrained {
    fn train(&mut self, _data: &ClassificationData) {}

    fn classify(&self, _data: &ClassificationData) -> Result<Label, ClassifierError> {
        Err(ClassifierError::Untrained)
    }

    fn name(&self) -> String {
        "Never Trained".to_string()
    }
}
