//! Top-level structural checks: name, node list, connection map.

use crate::error::Findings;
use crate::parse::types::WorkflowDocument;

pub fn validate_structural(workflow: &WorkflowDocument) -> Findings {
    let mut findings = Findings::new();

    if workflow.name.is_none() {
        findings.error("Workflow is missing a name");
    }

    // Nothing else is meaningful without a node list.
    if workflow.nodes.is_none() {
        return Findings {
            errors: vec!["Workflow is missing nodes array".to_string()],
            warnings: vec![],
        };
    }

    if workflow.connections.is_none() {
        findings.error("Workflow is missing connections object");
    }

    findings
}
