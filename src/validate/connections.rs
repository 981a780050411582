//! Referential integrity of the connection map.
//!
//! Every source key and every wire target must name a declared node.
//! Cycles, reachability and port typing are not checked here.

use crate::error::Findings;
use crate::parse::graph::{ConnectionGraph, DanglingRef};
use crate::parse::types::WorkflowDocument;

/// Shown when a wire has no target name.
pub const MISSING_TARGET: &str = "<missing>";

pub fn validate_connections(workflow: &WorkflowDocument) -> Findings {
    let mut findings = Findings::new();

    if workflow.connections.is_none() {
        findings.error("No connections defined in workflow");
        return findings;
    }

    let graph = ConnectionGraph::build(workflow);
    tracing::trace!(
        target: "workflow_validator::validate",
        nodes = graph.node_names.len(),
        dangling = graph.dangling.len(),
        "resolved connection map"
    );

    for reference in &graph.dangling {
        match reference {
            DanglingRef::Source(name) => findings.error(format!(
                "Connection references non-existent source node: {}",
                name
            )),
            DanglingRef::Target(name) => findings.error(format!(
                "Connection references non-existent target node: {}",
                name.as_deref().unwrap_or(MISSING_TARGET)
            )),
        }
    }

    findings
}
