use crate::classifiers::classifier::{Classifier, ClassifierError};
use crate::core::ClassificationData;
use crate::core::instances::{FeatureValue, Label};
use crate::utils::{FrequencyTable, argmax_first};
use std::collections::HashMap;

struct ClassModel {
    label: Label,
    prior: f64,
    /// `conditionals[i][v]` is P(feature i = v | label).
    conditionals: Vec<HashMap<FeatureValue, f64>>,
}

impl ClassModel {
    fn conditional(&self, feature_index: usize, value: FeatureValue) -> Option<f64> {
        self.conditionals
            .get(feature_index)
            .and_then(|values| values.get(&value))
            .copied()
    }
}

/// Categorical naive Bayes scored in the log domain.
pub struct NaiveBayes {
    class_models: Vec<ClassModel>,
}

impl NaiveBayes {
    pub fn new() -> Self {
        Self {
            class_models: Vec::new(),
        }
    }

    fn class_model(&self, label: Label) -> Option<&ClassModel> {
        self.class_models.iter().find(|m| m.label == label)
    }

    pub fn prior(&self, label: Label) -> Option<f64> {
        self.class_model(label).map(|m| m.prior)
    }

    pub fn conditional(&self, label: Label, feature_index: usize, value: FeatureValue) -> Option<f64> {
        self.class_model(label)
            .and_then(|m| m.conditional(feature_index, value))
    }

    /// Known labels in first-seen training order.
    pub fn labels(&self) -> impl Iterator<Item = Label> + '_ {
        self.class_models.iter().map(|m| m.label)
    }

    /// Log-probability charged for a value never seen with a class at a
    /// feature position.
    pub fn unseen_value_log_probability(&self) -> f64 {
        (1.0 / (self.class_models.len() as f64 + 1.0)).ln()
    }

    /// `ln P(label) + Σ ln P(value_i | label)` for every known label, in
    /// first-seen training order.
    pub fn log_posteriors(&self, features: &[FeatureValue]) -> Vec<(Label, f64)> {
        let unseen = self.unseen_value_log_probability();

        self.class_models
            .iter()
            .map(|model| {
                let mut score = model.prior.ln();
                for (feature_index, &value) in features.iter().enumerate() {
                    score += match model.conditional(feature_index, value) {
                        Some(p) => p.ln(),
                        None => unseen,
                    };
                }
                (model.label, score)
            })
            .collect()
    }
}

impl Default for NaiveBayes {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for NaiveBayes {
    fn train(&mut self, data: &ClassificationData) {
        self.class_models.clear();

        let training = data.training_data();
        let mut class_counts: FrequencyTable<Label> = FrequencyTable::new();
        let mut value_counts: HashMap<Label, Vec<FrequencyTable<FeatureValue>>> = HashMap::new();

        for tuple in training {
            let label = tuple.label_or_default();
            class_counts.increment(label);

            let per_feature = value_counts.entry(label).or_default();
            if per_feature.len() < tuple.number_of_features() {
                per_feature.resize_with(tuple.number_of_features(), FrequencyTable::new);
            }
            for (feature_index, &value) in tuple.features().iter().enumerate() {
                per_feature[feature_index].increment(value);
            }
        }

        let total = class_counts.total() as f64;
        for (label, count) in class_counts.iter() {
            let conditionals = value_counts
                .remove(&label)
                .unwrap_or_default()
                .into_iter()
                .map(|values| {
                    let feature_total = values.total() as f64;
                    values
                        .iter()
                        .map(|(value, n)| (value, n as f64 / feature_total))
                        .collect::<HashMap<_, _>>()
                })
                .collect();

            self.class_models.push(ClassModel {
                label,
                prior: count as f64 / total,
                conditionals,
            });
        }
    }

    fn classify(&self, data: &ClassificationData) -> Result<Label, ClassifierError> {
        if self.class_models.is_empty() {
            return Err(ClassifierError::Untrained);
        }

        argmax_first(self.log_posteriors(data.test_data().features()))
            .map(|(label, _)| label)
            .ok_or(ClassifierError::Untrained)
    }

    fn name(&self) -> String {
        "Naive Bayes".to_string()
    }
}
