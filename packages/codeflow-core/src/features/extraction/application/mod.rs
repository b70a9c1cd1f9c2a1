mod extractor;

pub use extractor::StructuralExtractor;
