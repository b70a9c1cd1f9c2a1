//! Analyzer and outcome implementations

mod lines;
mod native;
mod outcome;

pub use lines::LineBasedSimulator;
pub use native::NativeAstAnalyzer;
pub use outcome::RandomOutcome;

use super::ports::LanguageAnalyzer;
use crate::shared::models::LanguageId;

/// Analyzer for a language: syntax tree when available, lines otherwise
pub fn analyzer_for(language: LanguageId) -> Box<dyn LanguageAnalyzer> {
    if language.has_native_parser() {
        Box::new(NativeAstAnalyzer::new())
    } else {
        Box::new(LineBasedSimulator::new(language))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyzer_selection() {
        assert_eq!(analyzer_for(LanguageId::Python).language(), LanguageId::Python);
        assert_eq!(analyzer_for(LanguageId::Java).language(), LanguageId::Java);
        assert!(analyzer_for(LanguageId::Cpp).parse("{{{").is_ok());
        assert!(analyzer_for(LanguageId::Python).parse("def (:").is_err());
    }
}
