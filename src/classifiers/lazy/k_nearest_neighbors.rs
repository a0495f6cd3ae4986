use crate::classifiers::classifier::{Classifier, ClassifierError};
use crate::core::ClassificationData;
use crate::core::instances::{DataTuple, FeatureValue, Label};
use crate::utils::FrequencyTable;
use std::num::NonZeroUsize;

/// Euclidean distance over the common prefix of two feature vectors.
pub fn euclidean_distance(a: &[FeatureValue], b: &[FeatureValue]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let diff = f64::from(x) - f64::from(y);
            diff * diff
        })
        .sum::<f64>()
        .sqrt()
}

/// Brute-force k-nearest-neighbors over a stored copy of the training set.
pub struct KNearestNeighbors {
    k: NonZeroUsize,
    training_data: Option<Vec<DataTuple>>,
}

impl KNearestNeighbors {
    pub fn new(k: NonZeroUsize) -> Self {
        Self {
            k,
            training_data: None,
        }
    }

    pub fn k(&self) -> usize {
        self.k.get()
    }

    /// The `k` stored tuples closest to `features`, nearest first. Equal
    /// distances keep training order.
    pub fn nearest_neighbors(&self, features: &[FeatureValue]) -> Vec<&DataTuple> {
        let Some(training) = self.training_data.as_deref() else {
            return Vec::new();
        };

        let mut distances: Vec<(f64, &DataTuple)> = training
            .iter()
            .map(|tuple| (euclidean_distance(features, tuple.features()), tuple))
            .collect();
        distances.sort_by(|a, b| a.0.total_cmp(&b.0));

        distances
            .into_iter()
            .take(self.k.get())
            .map(|(_, tuple)| tuple)
            .collect()
    }

    fn majority_label(neighbors: &[&DataTuple]) -> Option<Label> {
        neighbors
            .iter()
            .map(|n| n.label_or_default())
            .collect::<FrequencyTable<Label>>()
            .most_frequent()
            .map(|(label, _)| label)
    }
}

impl Classifier for KNearestNeighbors {
    fn train(&mut self, data: &ClassificationData) {
        self.training_data = Some(data.training_data().to_vec());
    }

    fn classify(&self, data: &ClassificationData) -> Result<Label, ClassifierError> {
        match self.training_data.as_deref() {
            Some(training) if !training.is_empty() => {}
            _ => return Err(ClassifierError::Untrained),
        }

        let neighbors = self.nearest_neighbors(data.test_data().features());
        Self::majority_label(&neighbors).ok_or(ClassifierError::Untrained)
    }

    fn name(&self) -> String {
        format!("{} Nearest Neighbors", self.k)
    }
}
