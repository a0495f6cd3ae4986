use crate::ui::types::choices::{NoParams, UIChoice};
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

const DEFAULT_K: usize = 1;
fn default_k() -> usize {
    DEFAULT_K
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct KnnParameters {
    #[serde(default = "default_k")]
    #[schemars(
        title = "Neighbors",
        description = "Number of nearest neighbors that vote",
        range(min = 1),
        default = "default_k"
    )]
    pub k: usize,
}

impl Default for KnnParameters {
    fn default() -> Self {
        Self { k: DEFAULT_K }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, EnumDiscriminants)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(LearnerKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum LearnerChoice {
    #[strum_discriminants(strum(
        message = "1-Rule",
        detailed_message = "Predicts from the single feature whose value rule makes the fewest training errors."
    ))]
    OneRule(NoParams),

    #[strum_discriminants(strum(
        message = "Naive Bayes",
        detailed_message = "Maximum log-posterior over categorical feature likelihoods."
    ))]
    NaiveBayes(NoParams),

    #[strum_discriminants(strum(
        message = "Decision Tree",
        detailed_message = "Binary tree of 0 / non-0 feature tests chosen by Gini impurity."
    ))]
    DecisionTree(NoParams),

    #[strum_discriminants(strum(
        message = "k Nearest Neighbors",
        detailed_message = "Majority vote among the k closest training points (Euclidean)."
    ))]
    KNearestNeighbors(KnnParameters),
}

impl LearnerChoice {
    pub fn k_nearest_neighbors(k: usize) -> Self {
        LearnerChoice::KNearestNeighbors(KnnParameters { k })
    }
}

impl UIChoice for LearnerChoice {
    type Kind = LearnerKind;

    fn schema() -> Schema {
        schema_for!(LearnerChoice)
    }

    fn default_params(kind: Self::Kind) -> Value {
        match kind {
            LearnerKind::OneRule | LearnerKind::NaiveBayes | LearnerKind::DecisionTree => json!({}),
            LearnerKind::KNearestNeighbors => json!({ "k": DEFAULT_K }),
        }
    }
}
