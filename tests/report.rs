//! End-to-end: Parse → all validators → merged report, exit code and rendering.

#[allow(dead_code)]
mod helpers;

use helpers::*;
use serde_json::json;
use workflow_validator::error::Findings;
use workflow_validator::parse;
use workflow_validator::parse::types::S3_TYPE;
use workflow_validator::report::{EXIT_FAIL, EXIT_PASS, Outcome, Report};
use workflow_validator::validate::validate_workflow;

fn report_for(json: &str) -> Report {
    let workflow = parse::parse(json).expect("Should parse");
    Report::from(validate_workflow(&workflow))
}

#[test]
fn example_workflow_passes_cleanly() {
    let report = report_for(include_str!("fixtures/video_generator.json"));
    assert_eq!(report.status, Outcome::Pass);
    assert_eq!(report.exit_code(), EXIT_PASS);
    assert!(report.render(false).contains("✅ Workflow validation passed with no issues!"));
}

#[test]
fn empty_workflow_passes_with_warnings() {
    let workflow = document(json!({ "name": "X", "nodes": [], "connections": {} }));
    let findings = validate_workflow(&workflow);
    assert!(findings.errors.is_empty());
    assert_eq!(findings.warnings.len(), 5);
    assert_eq!(
        findings.warnings.last().map(String::as_str),
        Some("No credential configurations found - make sure to set up API keys")
    );

    let report = Report::from(findings);
    assert_eq!(report.status, Outcome::PassWithWarnings);
    assert_eq!(report.exit_code(), EXIT_PASS);
}

#[test]
fn findings_merge_in_validator_order() {
    let workflow = document(json!({ "nodes": [] }));
    let findings = validate_workflow(&workflow);
    assert_eq!(
        findings.errors,
        vec![
            "Workflow is missing a name",
            "Workflow is missing connections object",
            "No connections defined in workflow",
        ]
    );
}

#[test]
fn null_node_entry_keeps_the_rest_of_the_list() {
    let workflow = workflow_with_connections(
        vec![node("1", "Store", S3_TYPE, json!({})), json!(null)],
        json!({ "Store": main_to(&[]) }),
    );
    let findings = validate_workflow(&workflow);
    assert_eq!(
        findings.errors,
        vec![
            "S3 node 'Store' missing bucket name",
            "Node at index 1 is missing ID",
            "Node at index 1 is missing name",
            "Node at index 1 is missing type",
        ]
    );
    assert_lacks(&findings.errors, "Workflow is missing nodes array");
    assert_lacks(&findings.errors, "non-existent source node: Store");
    assert_lacks(&findings.warnings, &format!("Recommended node type missing: {S3_TYPE}"));
    assert_eq!(Report::from(findings).status, Outcome::Fail);
}

#[test]
fn any_error_fails_regardless_of_warnings() {
    let mut findings = Findings::new();
    findings.warning("advisory");
    assert_eq!(Report::from(findings.clone()).exit_code(), EXIT_PASS);

    findings.error("blocking");
    let report = Report::from(findings);
    assert_eq!(report.status, Outcome::Fail);
    assert_eq!(report.exit_code(), EXIT_FAIL);
}

#[test]
fn broken_workflow_text_report_snapshot() {
    let report = report_for(include_str!("fixtures/broken_workflow.json"));
    assert_eq!(report.exit_code(), EXIT_FAIL);
    let rendered = report.render(false);
    insta::assert_snapshot!("broken_workflow_report", rendered.trim());
}

#[test]
fn broken_workflow_json_report_snapshot() {
    let report = report_for(include_str!("fixtures/broken_workflow.json"));
    insta::assert_json_snapshot!("broken_workflow_json", report);
}

#[test]
fn warnings_only_report_ends_with_review_notice() {
    let mut findings = Findings::new();
    findings.warning("Voice field has no options defined");
    let rendered = Report::from(findings).render(false);
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(
        lines.last().copied(),
        Some("⚠️  Validation passed with warnings - review before deployment")
    );
    assert!(lines.contains(&"1. Voice field has no options defined"));
    assert!(!rendered.contains("error(s)"));
}

#[test]
fn uncolored_render_has_no_escape_codes() {
    let report = report_for(include_str!("fixtures/broken_workflow.json"));
    assert!(!report.render(false).contains('\u{1b}'));
}
