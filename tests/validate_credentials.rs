//! Integration tests for credential completeness (warnings only).

#[allow(dead_code)]
mod helpers;

use helpers::*;
use serde_json::json;
use workflow_validator::validate::validate_credentials;

const NO_CREDENTIALS: &str = "No credential configurations found - make sure to set up API keys";

#[test]
fn no_credentials_anywhere_warns_once() {
    let workflow = workflow_with_nodes(vec![plain_node("A"), plain_node("B")]);
    let findings = validate_credentials(&workflow);
    assert!(findings.errors.is_empty());
    assert_eq!(findings.warnings, vec![NO_CREDENTIALS]);
}

#[test]
fn absent_node_list_warns_once() {
    let findings = validate_credentials(&document(json!({})));
    assert_eq!(findings.warnings, vec![NO_CREDENTIALS]);
}

#[test]
fn complete_credentials_are_quiet() {
    let json = include_str!("fixtures/video_generator.json");
    let workflow = workflow_validator::parse::parse(json).unwrap();
    let findings = validate_credentials(&workflow);
    assert!(findings.is_empty(), "got: {:?}", findings);
}

#[test]
fn incomplete_entries_warn_per_credential_type() {
    let workflow = workflow_with_nodes(vec![json!({
        "id": "1",
        "name": "Upload",
        "type": "n8n-nodes-base.s3",
        "credentials": {
            "s3": { "id": "c1" },
            "aws": { "name": "AWS" },
            "ok": { "id": "c2", "name": "Fine" }
        }
    })]);
    let findings = validate_credentials(&workflow);
    assert!(findings.errors.is_empty());
    assert_eq!(
        findings.warnings,
        vec![
            "Node 'Upload' has incomplete credential configuration for s3",
            "Node 'Upload' has incomplete credential configuration for aws",
        ]
    );
}

#[test]
fn empty_credential_map_counts_as_configured() {
    let workflow = workflow_with_nodes(vec![json!({ "id": "1", "name": "A", "credentials": {} })]);
    let findings = validate_credentials(&workflow);
    assert!(findings.is_empty(), "got: {:?}", findings);
}

#[test]
fn truthy_non_object_credentials_count_as_configured() {
    let workflow = workflow_with_nodes(vec![json!({ "id": "1", "name": "A", "credentials": [] })]);
    let findings = validate_credentials(&workflow);
    assert!(findings.is_empty(), "got: {:?}", findings);
}

#[test]
fn malformed_entry_is_incomplete() {
    let workflow = workflow_with_nodes(vec![json!({
        "id": "1",
        "name": "A",
        "credentials": { "httpHeaderAuth": "cred-1" }
    })]);
    let findings = validate_credentials(&workflow);
    assert_eq!(
        findings.warnings,
        vec!["Node 'A' has incomplete credential configuration for httpHeaderAuth"]
    );
}
