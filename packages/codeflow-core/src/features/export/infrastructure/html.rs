//! HTML report export
//!
//! Fixed single-page template. Only `<` and `>` of the code are escaped;
//! table cells are written as-is.

use std::fmt::Write as _;
use std::path::Path;

use tracing::{error, info};

use crate::features::export::domain::ReportData;

const HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Code Analysis Report</title>
    <style>
        body { font-family: Arial, sans-serif; margin: 20px; background-color: #f5f5f5; }
        .container { max-width: 1200px; margin: 0 auto; background-color: white; padding: 20px; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
        h1, h2 { color: #333; }
        .panel { margin-bottom: 30px; }
        .panel h2 { border-bottom: 2px solid #4b6eaf; padding-bottom: 10px; }
        .code-block { background-color: #1e1e1e; color: #ffffff; padding: 15px; border-radius: 5px; font-family: 'Consolas', monospace; overflow-x: auto; }
        .data-table { width: 100%; border-collapse: collapse; margin-top: 10px; }
        .data-table th, .data-table td { border: 1px solid #ddd; padding: 8px; text-align: left; }
        .data-table th { background-color: #4b6eaf; color: white; }
        .data-table tr:nth-child(even) { background-color: #f2f2f2; }
    </style>
</head>
<body>
    <div class="container">
        <h1>Code Analysis Report</h1>
"#;

const TAIL: &str = "    </div>\n</body>\n</html>\n";

/// Render the full report page
pub fn render_html(report: &ReportData) -> String {
    let mut html = String::from(HEAD);

    let _ = write!(
        html,
        "        <div class=\"panel\">\n            <h2>Code</h2>\n            <div class=\"code-block\">\n                {}\n            </div>\n        </div>\n",
        escape_code(&report.code)
    );

    let variables = report
        .variables
        .iter()
        .map(|v| [v.name.clone(), v.value.clone(), v.line.to_string()]);
    push_table(&mut html, "Variables", ["Name", "Value", "Line"], variables);

    let functions = report
        .functions
        .iter()
        .map(|f| [f.name.clone(), f.params.join(", "), f.line.to_string()]);
    push_table(&mut html, "Functions", ["Name", "Parameters", "Line"], functions);

    let classes = report
        .classes
        .iter()
        .map(|c| [c.name.clone(), c.methods.join(", "), c.line.to_string()]);
    push_table(&mut html, "Classes", ["Name", "Methods", "Line"], classes);

    let steps = report
        .execution_steps
        .iter()
        .enumerate()
        .map(|(i, s)| [(i + 1).to_string(), s.description.clone(), s.line.to_string()]);
    push_table(&mut html, "Execution Steps", ["Step", "Description", "Line"], steps);

    html.push_str(TAIL);
    html
}

/// Write the report to `path`; failures are logged and reported as `false`
pub fn export_html(report: &ReportData, path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    match std::fs::write(path, render_html(report)) {
        Ok(()) => {
            info!(path = %path.display(), "exported HTML report");
            true
        }
        Err(err) => {
            error!(path = %path.display(), error = %err, "error exporting to HTML");
            false
        }
    }
}

fn escape_code(code: &str) -> String {
    code.replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\n', "<br>")
}

fn push_table<I>(html: &mut String, title: &str, headers: [&str; 3], rows: I)
where
    I: Iterator<Item = [String; 3]>,
{
    let _ = write!(
        html,
        "        <div class=\"panel\">\n            <h2>{}</h2>\n            <table class=\"data-table\">\n                <tr><th>{}</th><th>{}</th><th>{}</th></tr>\n",
        title, headers[0], headers[1], headers[2]
    );
    for [a, b, c] in rows {
        let _ = writeln!(
            html,
            "                <tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            a, b, c
        );
    }
    html.push_str("            </table>\n        </div>\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::execution::domain::ExecutionStep;
    use crate::features::extraction::domain::{FunctionRecord, VariableRecord};
    use tempfile::TempDir;

    #[test]
    fn test_empty_report_has_all_sections() {
        let html = render_html(&ReportData::default());

        for title in ["Code", "Variables", "Functions", "Classes", "Execution Steps"] {
            assert!(html.contains(&format!("<h2>{}</h2>", title)), "missing {}", title);
        }
        assert_eq!(html.matches("<td>").count(), 0);
        assert_eq!(html.matches("<table").count(), 4);
    }

    #[test]
    fn test_code_escaping() {
        let report = ReportData {
            code: "if a < b:\n    x = a > b & c\n".to_string(),
            ..ReportData::default()
        };
        let html = render_html(&report);

        assert!(html.contains("if a &lt; b:<br>    x = a &gt; b & c<br>"));
    }

    #[test]
    fn test_rows() {
        let report = ReportData {
            variables: vec![VariableRecord {
                name: "x".into(),
                line: 5,
                value: "integer(10)".into(),
            }],
            functions: vec![FunctionRecord {
                name: "f".into(),
                line: 1,
                params: vec!["a".into(), "b".into()],
                returns: None,
            }],
            execution_steps: vec![
                ExecutionStep::new(1, "function_definition", "main.py"),
                ExecutionStep::new(5, "assignment", "main.py"),
            ],
            ..ReportData::default()
        };
        let html = render_html(&report);

        assert!(html.contains("<tr><td>x</td><td>integer(10)</td><td>5</td></tr>"));
        assert!(html.contains("<tr><td>f</td><td>a, b</td><td>1</td></tr>"));
        assert!(html.contains(
            "<tr><td>2</td><td>Executing assignment at line 5</td><td>5</td></tr>"
        ));
    }

    #[test]
    fn test_export_html_writes_and_fails_gracefully() {
        let dir = TempDir::new().unwrap();
        let ok_path = dir.path().join("report.html");
        assert!(export_html(&ReportData::default(), &ok_path));
        assert!(std::fs::read_to_string(&ok_path)
            .unwrap()
            .starts_with("<!DOCTYPE html>"));

        let bad_path = dir.path().join("nope").join("report.html");
        assert!(!export_html(&ReportData::default(), &bad_path));
    }
}
