pub mod bayes;
pub mod classifier;
pub mod decision_tree;
pub mod lazy;
pub mod rules;

pub use bayes::NaiveBayes;
pub use classifier::{Classifier, ClassifierError};
pub use decision_tree::DecisionTree;
pub use lazy::KNearestNeighbors;
pub use rules::OneRule;
