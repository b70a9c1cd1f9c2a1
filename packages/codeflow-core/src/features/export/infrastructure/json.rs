//! JSON export

use std::path::Path;

use tracing::{error, info};

use crate::errors::Result;
use crate::features::export::domain::ExportBundle;

/// Pretty JSON (2-space indent) of the bundle
pub fn render_json(bundle: &ExportBundle) -> Result<String> {
    Ok(serde_json::to_string_pretty(bundle)?)
}

/// Write the bundle to `path`; failures are logged and reported as `false`
pub fn export_json(bundle: &ExportBundle, path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    let written = render_json(bundle).and_then(|text| Ok(std::fs::write(path, text)?));

    match written {
        Ok(()) => {
            info!(path = %path.display(), "exported JSON");
            true
        }
        Err(err) => {
            error!(path = %path.display(), error = %err, "error exporting to JSON");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use tempfile::TempDir;

    fn bundle() -> ExportBundle {
        ExportBundle {
            filename: "main.py".to_string(),
            code: "x = 1\n".to_string(),
            analysis_results: json!({"variables": [{"name": "x", "line": 1, "value": "integer(1)"}]}),
            execution_steps: json!([{"line": 1, "type": "expression_statement"}]),
            variables_state: json!({}),
            flow_graph: json!({"nodes": [], "edges": []}),
        }
    }

    #[test]
    fn test_render_json_indent_and_keys() {
        let text = render_json(&bundle()).unwrap();
        assert!(text.starts_with("{\n  \"filename\": \"main.py\""));

        let value: Value = serde_json::from_str(&text).unwrap();
        for key in [
            "filename",
            "code",
            "analysis_results",
            "execution_steps",
            "variables_state",
            "flow_graph",
        ] {
            assert!(value.get(key).is_some(), "missing {}", key);
        }
    }

    #[test]
    fn test_export_json_writes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.json");

        assert!(export_json(&bundle(), &path));
        let back: ExportBundle =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back, bundle());
    }

    #[test]
    fn test_export_json_unwritable_path_is_false() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("out.json");
        assert!(!export_json(&bundle(), &path));
    }
}
