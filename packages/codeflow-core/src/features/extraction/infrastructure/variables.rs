//! Variable assignments

use tracing::trace;

use super::assignment::AssignmentChain;
use super::dump::dump;
use crate::features::extraction::domain::{render_or_unknown, RenderError, VariableRecord};
use crate::features::parsing::ParsedSource;
use crate::shared::utils::tree_sitter::{node_line, node_text, walk_breadth_first};

/// One record per bare-name target of every plain assignment
pub fn extract_variables(
    parsed: &ParsedSource,
    value_cap: usize,
) -> Result<Vec<VariableRecord>, RenderError> {
    let source = parsed.source();
    let mut records = Vec::new();

    for chain in walk_breadth_first(parsed.root())
        .into_iter()
        .filter_map(AssignmentChain::unfold)
    {
        let line = node_line(chain.head);
        let value = render_or_unknown(dump(chain.value, source), value_cap);

        for target in chain.simple_targets() {
            let name = node_text(target, source)?.to_string();
            trace!(%name, line, "variable assignment");
            records.push(VariableRecord {
                name,
                line,
                value: value.clone(),
            });
        }
    }

    Ok(records)
}
