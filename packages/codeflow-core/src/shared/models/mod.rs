//! Shared models

mod language;

pub use language::LanguageId;
