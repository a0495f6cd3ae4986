pub mod dummies;
pub mod spies;
pub mod stubs;

pub use dummies::ClassifierNeverTrained;
pub use spies::{TrainSpyClassifier, TrainSpyHandle};
pub use stubs::OracleClassifier;
