use anyhow::{Context, Result, anyhow};
use std::num::NonZeroUsize;

use crate::classifiers::{Classifier, DecisionTree, KNearestNeighbors, NaiveBayes, OneRule};
use crate::ui::types::choices::{LearnerChoice, Lineup};

pub fn build_learner(choice: LearnerChoice) -> Result<Box<dyn Classifier>> {
    let learner: Box<dyn Classifier> = match choice {
        LearnerChoice::OneRule(_) => Box::new(OneRule::new()),
        LearnerChoice::NaiveBayes(_) => Box::new(NaiveBayes::new()),
        LearnerChoice::DecisionTree(_) => Box::new(DecisionTree::new()),
        LearnerChoice::KNearestNeighbors(p) => {
            let k = NonZeroUsize::new(p.k).ok_or_else(|| anyhow!("k must be at least 1"))?;
            Box::new(KNearestNeighbors::new(k))
        }
    };
    Ok(learner)
}

pub fn build_lineup(lineup: &Lineup) -> Result<Vec<Box<dyn Classifier>>> {
    lineup
        .learners
        .iter()
        .enumerate()
        .map(|(i, choice)| {
            build_learner(choice.clone()).with_context(|| format!("failed to build learner #{i}"))
        })
        .collect()
}
