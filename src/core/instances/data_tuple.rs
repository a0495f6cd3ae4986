use serde::{Deserialize, Serialize};

pub type FeatureValue = i32;
pub type Label = i32;

/// Label used wherever an unlabeled tuple has to take part in counting.
pub const DEFAULT_LABEL: Label = 0;

/// A feature vector with an optional class label.
///
/// Feature positions are feature identities: index `i` means the same
/// attribute for every tuple of a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataTuple {
    #[serde(rename = "Q")]
    features: Vec<FeatureValue>,
    #[serde(rename = "S", default)]
    label: Option<Label>,
}

impl DataTuple {
    pub fn new(features: Vec<FeatureValue>, label: Option<Label>) -> Self {
        Self { features, label }
    }

    pub fn labeled(features: Vec<FeatureValue>, label: Label) -> Self {
        Self::new(features, Some(label))
    }

    pub fn unlabeled(features: Vec<FeatureValue>) -> Self {
        Self::new(features, None)
    }

    pub fn features(&self) -> &[FeatureValue] {
        &self.features
    }

    pub fn number_of_features(&self) -> usize {
        self.features.len()
    }

    pub fn value_at_index(&self, index: usize) -> Option<FeatureValue> {
        self.features.get(index).copied()
    }

    pub fn label(&self) -> Option<Label> {
        self.label
    }

    #[inline]
    pub fn label_or_default(&self) -> Label {
        self.label.unwrap_or(DEFAULT_LABEL)
    }
}
