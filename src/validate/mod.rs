//! Validation phase.
//!
//! Four independent checks over the same read-only document. Each returns
//! its own `Findings`; `validate_workflow` concatenates them in a fixed order.

pub mod connections;
pub mod credentials;
pub mod node_rules;
pub mod structural;

pub use connections::validate_connections;
pub use credentials::validate_credentials;
pub use node_rules::{validate_node, validate_nodes};
pub use structural::validate_structural;

use crate::error::Findings;
use crate::parse::types::WorkflowDocument;

pub type Validator = fn(&WorkflowDocument) -> Findings;

/// Validators in report order.
pub const VALIDATORS: [(&str, Validator); 4] = [
    ("structure", validate_structural),
    ("nodes", validate_nodes),
    ("connections", validate_connections),
    ("credentials", validate_credentials),
];

/// Run every validator and merge the findings.
pub fn validate_workflow(workflow: &WorkflowDocument) -> Findings {
    let mut all = Findings::new();

    for (name, validator) in VALIDATORS {
        let findings = validator(workflow);
        tracing::debug!(
            target: "workflow_validator::validate",
            validator = name,
            errors = findings.errors.len(),
            warnings = findings.warnings.len(),
            "validator finished"
        );
        all.extend(findings);
    }

    all
}
