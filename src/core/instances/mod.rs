mod data_tuple;

pub use data_tuple::{DEFAULT_LABEL, DataTuple, FeatureValue, Label};
