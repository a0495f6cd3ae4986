use crate::classifiers::classifier::{Classifier, ClassifierError};
use crate::core::ClassificationData;
use crate::core::instances::{DataTuple, FeatureValue, Label};
use crate::utils::FrequencyTable;

/// Predicted label per observed value of a single feature, in first-seen
/// value order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueRule {
    predictions: Vec<(FeatureValue, Label)>,
}

impl ValueRule {
    pub fn prediction_for(&self, value: FeatureValue) -> Option<Label> {
        self.predictions
            .iter()
            .find(|&&(v, _)| v == value)
            .map(|&(_, label)| label)
    }

    /// Label predicted for the most values; the first-seen one on ties.
    pub fn most_common_prediction(&self) -> Option<Label> {
        self.predictions
            .iter()
            .map(|&(_, label)| label)
            .collect::<FrequencyTable<Label>>()
            .most_frequent()
            .map(|(label, _)| label)
    }

    pub fn len(&self) -> usize {
        self.predictions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predictions.is_empty()
    }
}

pub struct OneRule {
    best_feature_index: Option<usize>,
    best_rule: ValueRule,
    training_errors: usize,
}

impl OneRule {
    pub fn new() -> Self {
        Self {
            best_feature_index: None,
            best_rule: ValueRule::default(),
            training_errors: 0,
        }
    }

    pub fn best_feature_index(&self) -> Option<usize> {
        self.best_feature_index
    }

    pub fn best_rule(&self) -> &ValueRule {
        &self.best_rule
    }

    /// Misclassified training tuples under the selected rule.
    pub fn training_errors(&self) -> usize {
        self.training_errors
    }

    /// Majority-class rule for one feature and the number of training tuples
    /// it gets wrong.
    fn rule_for_feature(training: &[DataTuple], feature_index: usize) -> (ValueRule, usize) {
        let mut per_value: Vec<(FeatureValue, FrequencyTable<Label>)> = Vec::new();

        for tuple in training {
            let Some(value) = tuple.value_at_index(feature_index) else {
                continue;
            };
            let label = tuple.label_or_default();

            match per_value.iter_mut().find(|(v, _)| *v == value) {
                Some((_, classes)) => classes.increment(label),
                None => {
                    let mut classes = FrequencyTable::new();
                    classes.increment(label);
                    per_value.push((value, classes));
                }
            }
        }

        let mut errors = 0;
        let mut predictions = Vec::with_capacity(per_value.len());
        for (value, classes) in &per_value {
            if let Some((label, hits)) = classes.most_frequent() {
                errors += classes.total() - hits;
                predictions.push((*value, label));
            }
        }

        (ValueRule { predictions }, errors)
    }
}

impl Default for OneRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for OneRule {
    fn train(&mut self, data: &ClassificationData) {
        self.best_feature_index = None;
        self.best_rule = ValueRule::default();
        self.training_errors = 0;

        let training = data.training_data();
        let Some(num_features) = data.number_of_features() else {
            return;
        };

        let mut lowest_errors = usize::MAX;
        for feature_index in 0..num_features {
            let (rule, errors) = Self::rule_for_feature(training, feature_index);
            if errors < lowest_errors {
                lowest_errors = errors;
                self.best_feature_index = Some(feature_index);
                self.best_rule = rule;
                self.training_errors = errors;
            }
        }
    }

    fn classify(&self, data: &ClassificationData) -> Result<Label, ClassifierError> {
        let Some(feature_index) = self.best_feature_index else {
            return Err(ClassifierError::Untrained);
        };
        if self.best_rule.is_empty() {
            return Err(ClassifierError::Untrained);
        }

        let fallback = || {
            self.best_rule
                .most_common_prediction()
                .ok_or(ClassifierError::Untrained)
        };

        match data.test_data().value_at_index(feature_index) {
            Some(value) => match self.best_rule.prediction_for(value) {
                Some(label) => Ok(label),
                None => fallback(),
            },
            None => fallback(),
        }
    }

    fn name(&self) -> String {
        "1-Rule".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(features: &[i32], label: i32) -> DataTuple {
        DataTuple::labeled(features.to_vec(), label)
    }

    fn dataset(training: Vec<DataTuple>, test: &[i32]) -> ClassificationData {
        ClassificationData::new(training, DataTuple::unlabeled(test.to_vec()))
    }

    #[test]
    fn classify_before_train_is_untrained() {
        let one_rule = OneRule::new();
        let data = dataset(vec![t(&[0], 0)], &[0]);
        assert_eq!(one_rule.classify(&data), Err(ClassifierError::Untrained));
    }

    #[test]
    fn selects_the_determining_feature_over_noise() {
        let training = vec![
            t(&[0, 1], 0),
            t(&[0, 0], 0),
            t(&[1, 1], 1),
            t(&[1, 0], 1),
            t(&[0, 1], 0),
            t(&[1, 1], 1),
        ];
        let mut one_rule = OneRule::new();
        one_rule.train(&dataset(training.clone(), &[1, 0]));

        assert_eq!(one_rule.best_feature_index(), Some(0));
        assert_eq!(one_rule.training_errors(), 0);

        for tuple in &training {
            let data = dataset(training.clone(), tuple.features());
            assert_eq!(one_rule.classify(&data), Ok(tuple.label_or_default()));
        }
    }

    #[test]
    fn earliest_feature_wins_on_equal_error() {
        let training = vec![t(&[0, 0], 0), t(&[1, 1], 1)];
        let mut one_rule = OneRule::new();
        one_rule.train(&dataset(training, &[0, 0]));
        assert_eq!(one_rule.best_feature_index(), Some(0));
    }

    #[test]
    fn later_feature_wins_only_with_strictly_fewer_errors() {
        let training = vec![
            t(&[0, 0], 0),
            t(&[0, 1], 1),
            t(&[1, 0], 0),
            t(&[1, 1], 1),
        ];
        let mut one_rule = OneRule::new();
        one_rule.train(&dataset(training, &[1, 1]));

        assert_eq!(one_rule.best_feature_index(), Some(1));
        assert_eq!(one_rule.training_errors(), 0);
    }

    #[test]
    fn value_majority_ties_go_to_first_seen_label() {
        let training = vec![t(&[2], 5), t(&[2], 3), t(&[2], 3), t(&[2], 5)];
        let mut one_rule = OneRule::new();
        let data = dataset(training, &[2]);
        one_rule.train(&data);

        assert_eq!(one_rule.classify(&data), Ok(5));
        assert_eq!(one_rule.training_errors(), 2);
    }

    #[test]
    fn unseen_value_falls_back_to_most_common_prediction() {
        let training = vec![t(&[0], 1), t(&[1], 2), t(&[2], 2), t(&[3], 1)];
        let mut one_rule = OneRule::new();
        one_rule.train(&dataset(training.clone(), &[0]));

        assert_eq!(one_rule.best_rule().len(), 4);
        // predictions are 1, 2, 2, 1: a tie, so the first-seen label wins
        assert_eq!(one_rule.classify(&dataset(training, &[9])), Ok(1));
    }

    #[test]
    fn empty_training_leaves_model_untrained() {
        let mut one_rule = OneRule::new();
        let data = dataset(Vec::new(), &[1]);
        one_rule.train(&data);
        assert_eq!(one_rule.best_feature_index(), None);
        assert_eq!(one_rule.classify(&data), Err(ClassifierError::Untrained));
    }

    #[test]
    fn retraining_replaces_previous_rule() {
        let mut one_rule = OneRule::new();
        one_rule.train(&dataset(vec![t(&[0, 1], 7), t(&[1, 0], 8)], &[0, 1]));
        assert_eq!(one_rule.best_feature_index(), Some(0));

        let second = dataset(vec![t(&[4], 3)], &[4]);
        one_rule.train(&second);
        assert_eq!(one_rule.best_feature_index(), Some(0));
        assert_eq!(one_rule.best_rule().len(), 1);
        assert_eq!(one_rule.classify(&second), Ok(3));
    }

    #[test]
    fn training_twice_gives_identical_predictions() {
        let training = vec![t(&[0, 1], 0), t(&[1, 1], 1), t(&[1, 0], 1), t(&[0, 0], 0)];
        let data = dataset(training, &[1, 0]);

        let mut once = OneRule::new();
        once.train(&data);
        let mut twice = OneRule::new();
        twice.train(&data);
        twice.train(&data);

        assert_eq!(once.classify(&data), twice.classify(&data));
        assert_eq!(once.best_rule(), twice.best_rule());
    }

    #[test]
    fn name_is_fixed() {
        assert_eq!(OneRule::new().name(), "1-Rule");
    }
}
