// Structural extraction over realistic Python sources

mod common;
use common::{fixture_n_assignments, CLASS_WITH_INIT, FACTORIAL, MIXED};

use codeflow_core::features::extraction::{LoopKind, StructuralExtractor};
use codeflow_core::features::parsing::PythonParser;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_factorial_scenario() {
    let mut extractor = StructuralExtractor::default();
    let results = extractor.analyze_source(FACTORIAL).unwrap();

    let variables: Vec<(&str, usize, &str)> = results
        .variables
        .iter()
        .map(|v| (v.name.as_str(), v.line, v.value.as_str()))
        .collect();
    assert_eq!(variables, vec![("x", 5, "integer(10)")]);

    assert_eq!(results.functions.len(), 1);
    assert_eq!(results.functions[0].name, "f");
    assert_eq!(results.functions[0].line, 1);
    assert_eq!(results.functions[0].params, vec!["n"]);

    assert_eq!(results.conditionals.len(), 1);
    assert_eq!(results.conditionals[0].line, 2);
    assert_eq!(
        results.conditionals[0].test,
        "comparison_operator(identifier(n), '<=', integer(1..."
    );
}

#[test]
fn test_short_source_scenario() {
    let code = "x = 10\ndef f(n):\n  if n <= 1:\n    return n\n";
    let mut extractor = StructuralExtractor::default();
    let results = extractor.analyze_source(code).unwrap();

    assert_eq!(results.variables.len(), 1);
    assert_eq!(results.variables[0].name, "x");
    assert_eq!(results.variables[0].line, 1);
    assert_eq!(results.variables[0].value, "integer(10)");

    assert_eq!(results.functions.len(), 1);
    assert_eq!(results.functions[0].name, "f");
    assert_eq!(results.functions[0].line, 2);
    assert_eq!(results.functions[0].params, vec!["n"]);

    assert_eq!(results.conditionals.len(), 1);
    assert_eq!(results.conditionals[0].line, 3);
    assert_eq!(results.conditionals[0].test.chars().count(), 53);
    assert!(results.conditionals[0].test.ends_with("..."));
    assert!(results.loops.is_empty());
    assert!(results.classes.is_empty());
}

#[test]
fn test_class_attributes_ignore_method_bodies() {
    let mut extractor = StructuralExtractor::default();
    let results = extractor.analyze_source(CLASS_WITH_INIT).unwrap();

    assert_eq!(results.classes.len(), 1);
    assert_eq!(results.classes[0].methods, vec!["__init__"]);
    assert!(results.classes[0].attributes.is_empty());
    // `self.x = 0` is an attribute target, not a variable
    assert!(results.variables.is_empty());
}

#[test]
fn test_mixed_source() {
    let mut extractor = StructuralExtractor::default();
    let results = extractor.analyze_source(MIXED).unwrap().clone();

    let mut variable_lines: Vec<usize> = results.variables.iter().map(|v| v.line).collect();
    variable_lines.sort_unstable();
    assert_eq!(variable_lines, vec![3, 6, 15, 19, 21, 24]);

    let mut function_names: Vec<&str> = results.functions.iter().map(|f| f.name.as_str()).collect();
    function_names.sort_unstable();
    assert_eq!(function_names, vec!["__init__", "area", "total"]);
    let total = results.functions.iter().find(|f| f.name == "total").unwrap();
    assert_eq!(total.params, vec!["values", "start"]);

    assert_eq!(results.classes.len(), 1);
    assert_eq!(results.classes[0].methods, vec!["__init__", "area"]);
    assert_eq!(results.classes[0].attributes, vec!["sides"]);

    assert_eq!(results.conditionals.len(), 1);
    assert_eq!(results.conditionals[0].line, 17);

    assert_eq!(results.loops.len(), 2);
    assert_eq!(results.loops[0].kind, LoopKind::For);
    assert_eq!(results.loops[0].target.as_deref(), Some("identifier(v)"));
    assert_eq!(results.loops[1].kind, LoopKind::While);
    assert_eq!(
        results.loops[1].test.as_deref(),
        Some("comparison_operator(identifier(acc), '>', integer(...")
    );

    let operation_lines: Vec<usize> = results.operations().iter().map(|op| op.line).collect();
    assert!(operation_lines.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_53_char_value_is_cut_to_50_plus_ellipsis() {
    // `string('...')` adds 10 characters around the literal body
    let body = "a".repeat(43);
    let code = format!("s = '{}'\n", body);
    let mut extractor = StructuralExtractor::default();
    let value = extractor.analyze_source(&code).unwrap().variables[0].value.clone();

    let full = format!("string('{}')", body);
    assert_eq!(full.chars().count(), 53);
    assert_eq!(value, format!("{}...", &full[..50]));
}

#[test]
fn test_syntax_failure_yields_no_artifacts() {
    let failure = PythonParser::new().parse("class :\n    pass\n").unwrap_err();
    assert_eq!(failure.line, 1);

    let mut extractor = StructuralExtractor::default();
    assert!(extractor.analyze_source("class :\n    pass\n").is_err());
    assert!(extractor.get_results().is_empty());
}

#[test]
fn test_many_assignments() {
    let code = fixture_n_assignments(200);
    let mut extractor = StructuralExtractor::default();
    let results = extractor.analyze_source(&code).unwrap();

    assert_eq!(results.variables.len(), 200);
    assert_eq!(results.variables[199].name, "v_199");
    assert_eq!(results.variables[199].line, 200);
}

fn assignments() -> impl Strategy<Value = Vec<(String, i64)>> {
    prop::collection::vec(("v_[a-z0-9]{0,6}", 0i64..100_000), 0..25)
}

proptest! {
    #[test]
    fn prop_extraction_is_idempotent(pairs in assignments()) {
        let code: String = pairs.iter().map(|(n, v)| format!("{} = {}\n", n, v)).collect();
        let mut extractor = StructuralExtractor::default();

        let first = extractor.analyze_source(&code).unwrap().clone();
        let second = extractor.analyze_source(&code).unwrap().clone();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.variables.len(), pairs.len());

        for (i, (record, (name, value))) in first.variables.iter().zip(&pairs).enumerate() {
            prop_assert_eq!(&record.name, name);
            prop_assert_eq!(record.line, i + 1);
            prop_assert_eq!(&record.value, &format!("integer({})", value));
        }
    }
}
