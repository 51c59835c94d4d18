pub mod bbh;
pub mod connectors;
pub mod dataset;

pub use connectors::{load_examples, CsvConnector, DataValidator, JsonConnector};
pub use dataset::Dataset;
