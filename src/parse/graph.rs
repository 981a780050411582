//! Name-keyed view of the connection map.

use std::collections::HashSet;

use super::types::WorkflowDocument;

/// A connection-map reference that does not resolve to a declared node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DanglingRef {
    Source(String),
    /// `None` when the wire names no target at all.
    Target(Option<String>),
}

pub struct ConnectionGraph<'a> {
    /// Names that sources and targets may resolve to.
    pub node_names: HashSet<&'a str>,
    /// Unresolved references, in the order they appear in the document.
    pub dangling: Vec<DanglingRef>,
}

impl<'a> ConnectionGraph<'a> {
    pub fn build(document: &'a WorkflowDocument) -> Self {
        let node_names: HashSet<&str> = document
            .nodes()
            .iter()
            .filter_map(|n| n.name.as_deref())
            .collect();
        let mut dangling = Vec::new();

        for (source, outputs) in document.connections.iter().flatten() {
            if !node_names.contains(source.as_str()) {
                dangling.push(DanglingRef::Source(source.clone()));
            }

            let wires = outputs.0.iter().flat_map(|(_, groups)| groups).flat_map(|g| &g.0);
            for wire in wires {
                let resolved = wire
                    .node
                    .as_deref()
                    .is_some_and(|name| node_names.contains(name));
                if !resolved {
                    dangling.push(DanglingRef::Target(wire.node.clone()));
                }
            }
        }

        ConnectionGraph {
            node_names,
            dangling,
        }
    }
}
