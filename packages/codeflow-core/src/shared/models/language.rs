//! Language identifier
//!
//! Only Python has a real parser; the other variants select the line-based
//! simulator and decide which files a project scan picks up.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Language identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageId {
    Python,
    Cpp,
    Java,
    JavaScript,
    Other,
}

impl LanguageId {
    /// Get language name as string
    pub fn name(&self) -> &'static str {
        match self {
            LanguageId::Python => "python",
            LanguageId::Cpp => "cpp",
            LanguageId::Java => "java",
            LanguageId::JavaScript => "javascript",
            LanguageId::Other => "other",
        }
    }

    /// Parse a user-facing language name
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "python" | "py" => Some(LanguageId::Python),
            "cpp" | "c++" => Some(LanguageId::Cpp),
            "java" => Some(LanguageId::Java),
            "javascript" | "js" => Some(LanguageId::JavaScript),
            "other" => Some(LanguageId::Other),
            _ => None,
        }
    }

    /// Get language from file extension (unrecognised extensions map to `Other`)
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "py" => LanguageId::Python,
            "cpp" | "h" | "hpp" => LanguageId::Cpp,
            "java" => LanguageId::Java,
            "js" => LanguageId::JavaScript,
            _ => LanguageId::Other,
        }
    }

    /// Get language from a file path's extension; `None` without one
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
    }

    /// Source file extensions; empty means "every file"
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            LanguageId::Python => &["py"],
            LanguageId::Cpp => &["cpp", "h", "hpp"],
            LanguageId::Java => &["java"],
            LanguageId::JavaScript => &["js"],
            LanguageId::Other => &[],
        }
    }

    /// Whether this language gets a real syntax tree
    pub fn has_native_parser(&self) -> bool {
        matches!(self, LanguageId::Python)
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
