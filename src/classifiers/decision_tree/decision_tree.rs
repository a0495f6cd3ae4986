use crate::classifiers::classifier::{Classifier, ClassifierError};
use crate::classifiers::decision_tree::nodes::Node;
use crate::classifiers::decision_tree::split_criteria::{GiniSplitCriterion, SplitCriterion};
use crate::core::ClassificationData;
use crate::core::instances::{DataTuple, FeatureValue, Label};
use crate::utils::FrequencyTable;
use std::collections::HashSet;

/// Leaf label for a branch that received no training tuples.
pub const EMPTY_SUBSET_LABEL: Label = 1;

/// Binary decision tree over 0 / non-0 feature tests.
///
/// Grown recursively until a subset is pure or every feature has been used
/// on the current path. A feature is never tested twice on one path, but
/// sibling branches may test the same feature.
pub struct DecisionTree {
    tree_root: Option<Node>,
    split_criterion: Box<dyn SplitCriterion>,
}

impl DecisionTree {
    pub fn new() -> Self {
        Self::with_split_criterion(Box::new(GiniSplitCriterion::new()))
    }

    pub fn with_split_criterion(split_criterion: Box<dyn SplitCriterion>) -> Self {
        Self {
            tree_root: None,
            split_criterion,
        }
    }

    pub fn root(&self) -> Option<&Node> {
        self.tree_root.as_ref()
    }

    fn build_tree(&self, subset: &[&DataTuple], used_features: &HashSet<usize>) -> Node {
        let Some(first) = subset.first() else {
            return Node::leaf(EMPTY_SUBSET_LABEL);
        };

        let first_label = first.label_or_default();
        if subset.iter().all(|t| t.label_or_default() == first_label) {
            return Node::leaf(first_label);
        }

        let Some(best_feature_index) = self.find_best_split_feature(subset, used_features) else {
            return Node::leaf(Self::majority_label(subset).unwrap_or(first_label));
        };

        let (left, right) = Self::split_data(subset, best_feature_index);

        let mut branch_used = used_features.clone();
        branch_used.insert(best_feature_index);

        Node::decision(
            best_feature_index,
            self.build_tree(&left, &branch_used),
            self.build_tree(&right, &branch_used),
        )
    }

    /// Unused feature with the lowest split impurity; the lowest index wins
    /// ties.
    fn find_best_split_feature(
        &self,
        subset: &[&DataTuple],
        used_features: &HashSet<usize>,
    ) -> Option<usize> {
        let num_features = subset.first()?.number_of_features();

        let mut best: Option<(usize, f64)> = None;
        for feature_index in (0..num_features).filter(|i| !used_features.contains(i)) {
            let dists = Self::class_dists_by_value(subset, feature_index);
            let impurity = self.split_criterion.impurity_of_split(&dists);

            let better = match best {
                Some((_, best_impurity)) => impurity < best_impurity,
                None => true,
            };
            if better {
                best = Some((feature_index, impurity));
            }
        }

        best.map(|(feature_index, _)| feature_index)
    }

    /// Label counts of each group of tuples sharing a value at `feature_index`.
    fn class_dists_by_value(subset: &[&DataTuple], feature_index: usize) -> Vec<Vec<f64>> {
        let mut groups: Vec<(FeatureValue, FrequencyTable<Label>)> = Vec::new();

        for tuple in subset {
            let value = Self::value_of(tuple, feature_index);
            let label = tuple.label_or_default();
            match groups.iter_mut().find(|(v, _)| *v == value) {
                Some((_, labels)) => labels.increment(label),
                None => {
                    let mut labels = FrequencyTable::new();
                    labels.increment(label);
                    groups.push((value, labels));
                }
            }
        }

        groups
            .iter()
            .map(|(_, labels)| labels.iter().map(|(_, n)| n as f64).collect())
            .collect()
    }

    fn split_data<'a>(
        subset: &[&'a DataTuple],
        feature_index: usize,
    ) -> (Vec<&'a DataTuple>, Vec<&'a DataTuple>) {
        subset
            .iter()
            .copied()
            .partition(|tuple| Self::value_of(tuple, feature_index) == 0)
    }

    fn majority_label(subset: &[&DataTuple]) -> Option<Label> {
        subset
            .iter()
            .map(|t| t.label_or_default())
            .collect::<FrequencyTable<Label>>()
            .most_frequent()
            .map(|(label, _)| label)
    }

    #[inline]
    fn value_of(tuple: &DataTuple, feature_index: usize) -> FeatureValue {
        tuple.value_at_index(feature_index).unwrap_or(0)
    }
}

impl Default for DecisionTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier for DecisionTree {
    fn train(&mut self, data: &ClassificationData) {
        let subset: Vec<&DataTuple> = data.training_data().iter().collect();
        self.tree_root = Some(self.build_tree(&subset, &HashSet::new()));
    }

    fn classify(&self, data: &ClassificationData) -> Result<Label, ClassifierError> {
        let root = self.tree_root.as_ref().ok_or(ClassifierError::Untrained)?;
        Ok(root.classify(data.test_data().features()))
    }

    fn name(&self) -> String {
        "Decision Tree".to_string()
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

    fn trained(training: Vec<DataTuple>) -> DecisionTree {
        let mut tree = DecisionTree::new();
        tree.train(&dataset(training, &[]));
        tree
    }

    fn assert_reproduces(tree: &DecisionTree, training: &[DataTuple]) {
        for tuple in training {
            let data = dataset(training.to_vec(), tuple.features());
            assert_eq!(
                tree.classify(&data),
                Ok(tuple.label_or_default()),
                "tuple {:?}",
                tuple
            );
        }
    }

    struct ConstantCriterion;

    impl SplitCriterion for ConstantCriterion {
        fn impurity_of_split(&self, _post_split_dists: &[Vec<f64>]) -> f64 {
            0.0
        }
    }

    #[test]
    fn test_classify_before_train_is_untrained() {
        let tree = DecisionTree::new();
        assert!(tree.root().is_none());
        let data = dataset(vec![t(&[0], 0)], &[0]);
        assert_eq!(tree.classify(&data), Err(ClassifierError::Untrained));
    }

    #[test]
    fn test_single_separating_feature_builds_one_decision_and_two_leaves() {
        let training = vec![t(&[0], 3), t(&[1], 4), t(&[0], 3), t(&[1], 4)];
        let tree = trained(training.clone());

        let root = tree.root().unwrap();
        assert_eq!(root, &Node::decision(0, Node::leaf(3), Node::leaf(4)));
        assert_eq!(root.count_decision_nodes(), 1);
        assert_eq!(root.count_leaves(), 2);
        assert_reproduces(&tree, &training);
    }

    #[test]
    fn test_xor_is_learned_with_two_levels() {
        let training = vec![
            t(&[0, 0], 0),
            t(&[0, 1], 1),
            t(&[1, 0], 1),
            t(&[1, 1], 0),
        ];
        let tree = trained(training.clone());

        let root = tree.root().unwrap();
        assert_eq!(root.depth(), 2);
        assert_eq!(root.count_leaves(), 4);
        assert_reproduces(&tree, &training);
    }

    #[test]
    fn test_picks_lowest_gini_feature() {
        let training = vec![
            t(&[1, 0, 1], 0),
            t(&[0, 0, 0], 0),
            t(&[1, 1, 0], 1),
            t(&[0, 1, 1], 1),
        ];
        let tree = trained(training.clone());
        assert_eq!(
            tree.root().unwrap(),
            &Node::decision(1, Node::leaf(0), Node::leaf(1))
        );
        assert_reproduces(&tree, &training);
    }

    #[test]
    fn test_gini_ties_go_to_lowest_feature_index() {
        let training = vec![t(&[0, 0], 0), t(&[1, 1], 1)];
        let tree = trained(training);
        assert!(matches!(
            tree.root(),
            Some(Node::Decision {
                feature_index: 0,
                ..
            })
        ));
    }

    #[test]
    fn test_split_criterion_is_pluggable() {
        let training = vec![
            t(&[1, 0], 0),
            t(&[0, 0], 0),
            t(&[1, 1], 1),
            t(&[0, 1], 1),
        ];
        let mut tree = DecisionTree::with_split_criterion(Box::new(ConstantCriterion));
        tree.train(&dataset(training.clone(), &[]));

        let root = tree.root().unwrap();
        assert!(matches!(
            root,
            Node::Decision {
                feature_index: 0,
                ..
            }
        ));
        assert_reproduces(&tree, &training);
    }

    #[test]
    fn test_pure_training_data_gives_single_leaf_with_that_label() {
        let tree = trained(vec![t(&[0, 1], 5), t(&[1, 1], 5)]);
        assert_eq!(tree.root(), Some(&Node::leaf(5)));
    }

    #[test]
    fn test_empty_training_data_yields_placeholder_leaf() {
        let mut tree = DecisionTree::new();
        let data = dataset(Vec::new(), &[0, 1]);
        tree.train(&data);

        assert_eq!(tree.root(), Some(&Node::leaf(EMPTY_SUBSET_LABEL)));
        assert_eq!(tree.classify(&data), Ok(1));
    }

    #[test]
    fn test_empty_branch_gets_placeholder_label() {
        // the only feature is constant, so the non-zero branch receives nothing
        let training = vec![t(&[0], 0), t(&[0], 2)];
        let tree = trained(training.clone());

        assert_eq!(
            tree.root().unwrap(),
            &Node::decision(0, Node::leaf(0), Node::leaf(EMPTY_SUBSET_LABEL))
        );
        assert_eq!(tree.classify(&dataset(training, &[7])), Ok(1));
    }

    #[test]
    fn test_exhausted_features_fall_back_to_majority_label() {
        let training = vec![t(&[1], 2), t(&[1], 3), t(&[1], 3)];
        let tree = trained(training.clone());

        assert_eq!(
            tree.root().unwrap(),
            &Node::decision(0, Node::leaf(EMPTY_SUBSET_LABEL), Node::leaf(3))
        );
        assert_eq!(tree.classify(&dataset(training, &[1])), Ok(3));
    }

    #[test]
    fn test_exhausted_features_majority_ties_go_to_first_seen() {
        let training = vec![t(&[1], 6), t(&[1], 4), t(&[1], 4), t(&[1], 6)];
        let tree = trained(training.clone());
        assert_eq!(tree.classify(&dataset(training, &[1])), Ok(6));
    }

    #[test]
    fn test_no_feature_repeats_along_a_path() {
        let mut training = Vec::new();
        for i in 0..64u32 {
            let features: Vec<i32> = (0..6).map(|b| ((i >> b) & 1) as i32).collect();
            let label = ((i * 7 + 3) % 5) as i32;
            training.push(DataTuple::labeled(features, label));
        }
        let tree = trained(training);
        let root = tree.root().unwrap();

        for path in root.paths() {
            let unique: HashSet<usize> = path.iter().copied().collect();
            assert_eq!(unique.len(), path.len(), "path {:?}", path);
        }
        assert!(root.depth() <= 6);
    }

    #[test]
    fn test_separable_data_is_reproduced() {
        let mut training = Vec::new();
        for i in 0..16u32 {
            let features: Vec<i32> = (0..4).map(|b| ((i >> b) & 1) as i32).collect();
            let label = (features[0] & features[2]) | features[3];
            training.push(DataTuple::labeled(features, label));
        }
        let tree = trained(training.clone());
        assert_reproduces(&tree, &training);
    }

    #[test]
    fn test_non_zero_values_route_right() {
        let training = vec![t(&[0], 0), t(&[3], 1), t(&[9], 1)];
        let tree = trained(training.clone());
        assert_eq!(tree.classify(&dataset(training, &[42])), Ok(1));
    }

    #[test]
    fn test_training_twice_gives_identical_tree() {
        let training = vec![t(&[0, 1], 0), t(&[1, 0], 1), t(&[1, 1], 1), t(&[0, 0], 0)];
        let data = dataset(training, &[1, 1]);

        let mut once = DecisionTree::new();
        once.train(&data);
        let mut twice = DecisionTree::new();
        twice.train(&data);
        twice.train(&data);

        assert_eq!(once.root(), twice.root());
        assert_eq!(once.classify(&data), twice.classify(&data));
    }

    #[test]
    fn test_retraining_replaces_previous_tree() {
        let mut tree = trained(vec![t(&[0], 0), t(&[1], 1)]);
        tree.train(&dataset(vec![t(&[0], 8)], &[0]));
        assert_eq!(tree.root(), Some(&Node::leaf(8)));
    }

    #[test]
    fn test_name_is_fixed() {
        assert_eq!(DecisionTree::new().name(), "Decision Tree");
    }
}
