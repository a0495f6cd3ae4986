use crate::ui::types::choices::{LearnerChoice, NoParams};
use anyhow::{Context, Result};
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Ordered list of classifiers to evaluate.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Lineup {
    #[schemars(
        title = "Learners",
        description = "Classifiers to train and evaluate, in report order"
    )]
    pub learners: Vec<LearnerChoice>,
}

impl Default for Lineup {
    fn default() -> Self {
        Self {
            learners: vec![
                LearnerChoice::OneRule(NoParams::default()),
                LearnerChoice::NaiveBayes(NoParams::default()),
                LearnerChoice::DecisionTree(NoParams::default()),
                LearnerChoice::k_nearest_neighbors(1),
                LearnerChoice::k_nearest_neighbors(4),
            ],
        }
    }
}

impl Lineup {
    pub fn new(learners: Vec<LearnerChoice>) -> Self {
        Self { learners }
    }

    pub fn schema() -> Schema {
        schema_for!(Lineup)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("malformed lineup JSON")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read lineup {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("failed to parse lineup {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_lineup_matches_classic_lab() {
        let lineup = Lineup::default();
        assert_eq!(lineup.learners.len(), 5);
        assert_eq!(lineup.learners[3], LearnerChoice::k_nearest_neighbors(1));
        assert_eq!(lineup.learners[4], LearnerChoice::k_nearest_neighbors(4));
    }

    #[test]
    fn parses_lineup_json() {
        let lineup = Lineup::from_json(
            r#"{"learners": [
                {"type": "decision-tree", "params": {}},
                {"type": "k-nearest-neighbors", "params": {"k": 3}}
            ]}"#,
        )
        .unwrap();
        assert_eq!(
            lineup,
            Lineup::new(vec![
                LearnerChoice::DecisionTree(NoParams::default()),
                LearnerChoice::k_nearest_neighbors(3),
            ])
        );
    }

    #[test]
    fn rejects_unknown_learner_type() {
        let err = Lineup::from_json(r#"{"learners": [{"type": "svm", "params": {}}]}"#);
        assert!(err.is_err());
    }

    #[test]
    fn loads_from_file() {
        let mut f = NamedTempFile::new().unwrap();
        let json = serde_json::to_string(&Lineup::default()).unwrap();
        f.write_all(json.as_bytes()).unwrap();
        f.flush().unwrap();

        assert_eq!(Lineup::load(f.path()).unwrap(), Lineup::default());
    }

    #[test]
    fn schema_describes_learners_field() {
        let schema = serde_json::to_value(Lineup::schema()).unwrap();
        assert!(schema["properties"]["learners"].is_object());
    }
}
