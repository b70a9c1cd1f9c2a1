//! Project source discovery
//!
//! Recursively collects the files a project scan offers for analysis,
//! filtered by the selected language's extensions.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::shared::models::LanguageId;

/// List source files under `root` for `language`, sorted by path
///
/// `LanguageId::Other` accepts every regular file. Unreadable entries are
/// logged and skipped.
pub fn discover_sources(root: &Path, language: LanguageId) -> Vec<PathBuf> {
    let extensions = language.extensions();

    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                warn!(error = %err, "skipping unreadable entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| matches_extension(path, extensions))
        .collect();

    files.sort();
    debug!(root = %root.display(), %language, count = files.len(), "discovered sources");
    files
}

fn matches_extension(path: &Path, extensions: &[&str]) -> bool {
    if extensions.is_empty() {
        return true;
    }
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}
