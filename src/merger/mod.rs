pub mod output_builder;
pub mod translation_index;

pub use output_builder::{MergeReport, OutputBuilder};
pub use translation_index::TranslationIndex;
