use crate::core::{ClassificationData, DatasetError};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Parses a JSON array of datasets and validates each one.
pub fn parse_datasets(json: &str) -> Result<Vec<ClassificationData>, DatasetError> {
    let datasets: Vec<ClassificationData> = serde_json::from_str(json)?;
    validate_all(datasets)
}

pub fn read_datasets_from<R: Read>(reader: R) -> Result<Vec<ClassificationData>, DatasetError> {
    let datasets: Vec<ClassificationData> = serde_json::from_reader(reader)?;
    validate_all(datasets)
}

pub fn read_datasets(path: &Path) -> Result<Vec<ClassificationData>, DatasetError> {
    let file = File::open(path)?;
    read_datasets_from(BufReader::new(file))
}

fn validate_all(datasets: Vec<ClassificationData>) -> Result<Vec<ClassificationData>, DatasetError> {
    for (index, data) in datasets.iter().enumerate() {
        data.validate()
            .map_err(|e| DatasetError::InvalidDataset {
                index,
                source: Box::new(e),
            })?;
    }
    Ok(datasets)
}
