use crate::core::instances::DataTuple;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read datasets: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("training data is empty")]
    EmptyTrainingData,

    #[error("training tuple {tuple} has {found} features, expected {expected}")]
    InconsistentTrainingTuple {
        tuple: usize,
        expected: usize,
        found: usize,
    },

    #[error("test tuple has {found} features, training data has {expected}")]
    TestTupleMismatch { expected: usize, found: usize },

    #[error("dataset {index}: {source}")]
    InvalidDataset {
        index: usize,
        source: Box<DatasetError>,
    },
}

/// Labeled training tuples paired with the single tuple to classify.
///
/// Built once and read-only afterwards. `new` trusts its input; data coming
/// from outside the process should go through [`ClassificationData::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationData {
    #[serde(rename = "training_data")]
    training_data: Vec<DataTuple>,
    #[serde(rename = "test_data")]
    test_data: DataTuple,
}

impl ClassificationData {
    pub fn new(training_data: Vec<DataTuple>, test_data: DataTuple) -> Self {
        Self {
            training_data,
            test_data,
        }
    }

    pub fn training_data(&self) -> &[DataTuple] {
        &self.training_data
    }

    pub fn test_data(&self) -> &DataTuple {
        &self.test_data
    }

    /// Feature count of the first training tuple, if any.
    pub fn number_of_features(&self) -> Option<usize> {
        self.training_data.first().map(DataTuple::number_of_features)
    }

    pub fn validate(&self) -> Result<(), DatasetError> {
        let expected = self
            .number_of_features()
            .ok_or(DatasetError::EmptyTrainingData)?;

        if let Some((tuple, found)) = self
            .training_data
            .iter()
            .map(DataTuple::number_of_features)
            .enumerate()
            .find(|&(_, n)| n != expected)
        {
            return Err(DatasetError::InconsistentTrainingTuple {
                tuple,
                expected,
                found,
            });
        }

        let found = self.test_data.number_of_features();
        if found != expected {
            return Err(DatasetError::TestTupleMismatch { expected, found });
        }

        Ok(())
    }
}
