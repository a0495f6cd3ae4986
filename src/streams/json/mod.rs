mod reader;

pub use reader::{parse_datasets, read_datasets, read_datasets_from};
