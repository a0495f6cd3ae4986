mod learner_choice;
mod lineup;

pub use learner_choice::{KnnParameters, LearnerChoice, LearnerKind};
pub use lineup::Lineup;

use anyhow::{Context, Result};
use schemars::{JsonSchema, Schema};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Parameter block for choices that take no parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct NoParams {}

/// A `{"type": kind, "params": {...}}` choice whose kinds can be listed and
/// parsed by name.
pub trait UIChoice: Sized + DeserializeOwned {
    type Kind: Copy + Into<&'static str>;

    fn schema() -> Schema;

    fn default_params(kind: Self::Kind) -> Value;

    fn from_parts(kind: Self::Kind, params: Value) -> Result<Self> {
        let key: &'static str = kind.into();
        serde_json::from_value(json!({ "type": key, "params": params }))
            .with_context(|| format!("invalid parameters for '{key}'"))
    }
}
