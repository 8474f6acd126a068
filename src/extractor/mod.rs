pub mod mapping_extractor;

pub use mapping_extractor::{ExtractReport, MappingExtractor};
