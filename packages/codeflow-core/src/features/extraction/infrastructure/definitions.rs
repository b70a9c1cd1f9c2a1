//! Function and class definitions

use tree_sitter::Node;

use super::assignment::AssignmentChain;
use super::dump::required_field;
use crate::features::extraction::domain::{ClassRecord, FunctionRecord, RenderError};
use crate::features::parsing::ParsedSource;
use crate::shared::utils::tree_sitter::{is_async, named_children, node_line, node_text, walk_breadth_first};

/// Every non-async function definition, methods and nested functions included
pub fn extract_functions(parsed: &ParsedSource) -> Result<Vec<FunctionRecord>, RenderError> {
    let source = parsed.source();
    let mut records = Vec::new();

    for node in walk_breadth_first(parsed.root()) {
        if !is_plain_function(node) {
            continue;
        }
        let name = node_text(required_field(node, "name")?, source)?.to_string();
        let params = match node.child_by_field_name("parameters") {
            Some(params) => positional_params(params, source)?,
            None => Vec::new(),
        };
        records.push(FunctionRecord {
            name,
            line: node_line(node),
            params,
            returns: None,
        });
    }

    Ok(records)
}

/// Every class definition with its immediate methods and attributes
pub fn extract_classes(parsed: &ParsedSource) -> Result<Vec<ClassRecord>, RenderError> {
    let source = parsed.source();
    let mut records = Vec::new();

    for node in walk_breadth_first(parsed.root()) {
        if node.kind() != "class_definition" {
            continue;
        }
        let name = node_text(required_field(node, "name")?, source)?.to_string();
        let mut methods = Vec::new();
        let mut attributes = Vec::new();

        if let Some(body) = node.child_by_field_name("body") {
            for item in named_children(body) {
                match item.kind() {
                    "function_definition" | "decorated_definition" => {
                        if let Some(method) = method_name(item, source)? {
                            methods.push(method);
                        }
                    }
                    "expression_statement" => {
                        for chain in named_children(item)
                            .into_iter()
                            .filter_map(AssignmentChain::unfold)
                        {
                            for target in chain.simple_targets() {
                                attributes.push(node_text(target, source)?.to_string());
                            }
                        }
                    }
                    _ => {}
                }
            }
        }

        records.push(ClassRecord {
            name,
            line: node_line(node),
            methods,
            attributes,
        });
    }

    Ok(records)
}

fn is_plain_function(node: Node<'_>) -> bool {
    node.kind() == "function_definition" && !is_async(node)
}

fn method_name(item: Node<'_>, source: &str) -> Result<Option<String>, RenderError> {
    let definition = if item.kind() == "decorated_definition" {
        match item.child_by_field_name("definition") {
            Some(definition) => definition,
            None => return Ok(None),
        }
    } else {
        item
    };

    if !is_plain_function(definition) {
        return Ok(None);
    }
    let name = node_text(required_field(definition, "name")?, source)?;
    Ok(Some(name.to_string()))
}

/// Names bound positionally: after any `/`, before any `*`, `*args` or `**kwargs`
fn positional_params(params: Node<'_>, source: &str) -> Result<Vec<String>, RenderError> {
    let mut names = Vec::new();

    for param in named_children(params) {
        match param.kind() {
            "identifier" => names.push(node_text(param, source)?.to_string()),
            "default_parameter" | "typed_default_parameter" => {
                let name = required_field(param, "name")?;
                if name.kind() == "identifier" {
                    names.push(node_text(name, source)?.to_string());
                }
            }
            "typed_parameter" => match named_children(param).first() {
                Some(inner) if inner.kind() == "identifier" => {
                    names.push(node_text(*inner, source)?.to_string());
                }
                // `*args: T` / `**kwargs: T`
                _ => break,
            },
            "positional_separator" => names.clear(),
            "list_splat_pattern" | "dictionary_splat_pattern" | "keyword_separator" => break,
            _ => {}
        }
    }

    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::parsing::PythonParser;
    use pretty_assertions::assert_eq;

    fn functions(code: &str) -> Vec<FunctionRecord> {
        let parsed = PythonParser::new().parse(code).unwrap();
        extract_functions(&parsed).unwrap()
    }

    fn classes(code: &str) -> Vec<ClassRecord> {
        let parsed = PythonParser::new().parse(code).unwrap();
        extract_classes(&parsed).unwrap()
    }

    #[test]
    fn test_function_params() {
        assert_eq!(
            functions("def f(n):\n    return n\n"),
            vec![FunctionRecord {
                name: "f".to_string(),
                line: 1,
                params: vec!["n".to_string()],
                returns: None,
            }]
        );
    }

    #[test]
    fn test_param_kinds() {
        let code = "def g(a, b=1, c: int = 2, d: str = 'x', *args, e, **kw):\n    pass\n";
        assert_eq!(functions(code)[0].params, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_positional_only_and_keyword_only_excluded() {
        let code = "def h(p, /, q, *, r):\n    pass\n";
        assert_eq!(functions(code)[0].params, vec!["q"]);
    }

    #[test]
    fn test_async_functions_excluded() {
        let code = "async def fetch():\n    pass\ndef sync():\n    pass\n";
        let names: Vec<String> = functions(code).into_iter().map(|f| f.name).collect();
        assert_eq!(names, vec!["sync"]);
    }

    #[test]
    fn test_class_methods_and_attributes() {
        let code = "\
class Counter:
    start = 0
    label: str = 'c'

    def __init__(self):
        self.x = 0

    @property
    def value(self):
        return self.x

    class Inner:
        pass
";
        let found = classes(code);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].name, "Counter");
        assert_eq!(found[0].methods, vec!["__init__", "value"]);
        assert_eq!(found[0].attributes, vec!["start"]);
        assert_eq!(found[1].name, "Inner");
    }

    #[test]
    fn test_attribute_inside_method_not_counted() {
        let code = "class A:\n    def __init__(self):\n        self.x = 0\n";
        let found = classes(code);
        assert_eq!(found[0].methods, vec!["__init__"]);
        assert!(found[0].attributes.is_empty());
    }
}
