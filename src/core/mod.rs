pub mod classification_data;
pub mod instances;

pub use classification_data::{ClassificationData, DatasetError};
