//! Integration tests for top-level structural validation.

#[allow(dead_code)]
mod helpers;

use helpers::*;
use serde_json::json;
use workflow_validator::validate::validate_structural;

#[test]
fn well_formed_document_has_no_findings() {
    let workflow = document(json!({ "name": "X", "nodes": [], "connections": {} }));
    let findings = validate_structural(&workflow);
    assert!(findings.is_empty(), "got: {:?}", findings);
}

#[test]
fn missing_name_is_an_error() {
    let workflow = document(json!({ "nodes": [], "connections": {} }));
    let findings = validate_structural(&workflow);
    assert_eq!(findings.errors, vec!["Workflow is missing a name"]);
    assert!(findings.warnings.is_empty());
}

#[test]
fn missing_nodes_short_circuits_to_one_error() {
    let variants = [
        json!({}),
        json!({ "name": "X" }),
        json!({ "connections": {} }),
        json!({ "name": "X", "nodes": "not a list", "connections": {} }),
        json!({ "nodes": null }),
    ];
    for value in variants {
        let findings = validate_structural(&document(value.clone()));
        assert_eq!(
            findings.errors,
            vec!["Workflow is missing nodes array"],
            "for {value}"
        );
        assert!(findings.warnings.is_empty(), "for {value}");
    }
}

#[test]
fn missing_connections_does_not_short_circuit() {
    let workflow = document(json!({ "nodes": [] }));
    let findings = validate_structural(&workflow);
    assert_eq!(
        findings.errors,
        vec![
            "Workflow is missing a name",
            "Workflow is missing connections object"
        ]
    );
}
