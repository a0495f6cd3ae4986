pub mod frequency_table;

pub use frequency_table::{FrequencyTable, argmax_first};
