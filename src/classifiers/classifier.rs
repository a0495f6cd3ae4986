use crate::core::ClassificationData;
use crate::core::instances::Label;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifierError {
    #[error("the classifier has not been trained")]
    Untrained,
}

pub trait Classifier {
    /// Builds the model from the training portion, replacing any earlier model.
    fn train(&mut self, data: &ClassificationData);
    /// Predicts the label of the dataset's test tuple.
    fn classify(&self, data: &ClassificationData) -> Result<Label, ClassifierError>;
    fn name(&self) -> String;
}
