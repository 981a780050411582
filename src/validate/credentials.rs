//! Credential reference completeness. Advisory only: never produces errors.

use crate::error::Findings;
use crate::parse::types::WorkflowDocument;

pub fn validate_credentials(workflow: &WorkflowDocument) -> Findings {
    let mut findings = Findings::new();

    let mut credential_nodes = workflow
        .nodes()
        .iter()
        .filter_map(|n| n.credentials.as_ref().map(|c| (n, c)))
        .peekable();

    if credential_nodes.peek().is_none() {
        findings.warning("No credential configurations found - make sure to set up API keys");
        return findings;
    }

    for (node, credentials) in credential_nodes {
        for (credential_type, reference) in credentials {
            if !reference.is_complete() {
                findings.warning(format!(
                    "Node '{}' has incomplete credential configuration for {}",
                    node.display_name(),
                    credential_type
                ));
            }
        }
    }

    findings
}
