use serde_json::{Value, json};
use workflow_validator::parse::{self, WorkflowDocument};

// =============================================================================
// Document builders
// =============================================================================

/// Parse an inline JSON value as a workflow document.
pub fn document(value: Value) -> WorkflowDocument {
    parse::parse(&value.to_string()).expect("document should load")
}

/// Named workflow with the given nodes and an empty connection map.
pub fn workflow_with_nodes(nodes: Vec<Value>) -> WorkflowDocument {
    document(json!({ "name": "Test Workflow", "nodes": nodes, "connections": {} }))
}

/// Named workflow with the given nodes and connections.
pub fn workflow_with_connections(nodes: Vec<Value>, connections: Value) -> WorkflowDocument {
    document(json!({ "name": "Test Workflow", "nodes": nodes, "connections": connections }))
}

pub fn node(id: &str, name: &str, node_type: &str, parameters: Value) -> Value {
    json!({ "id": id, "name": name, "type": node_type, "parameters": parameters })
}

pub fn plain_node(name: &str) -> Value {
    node(&format!("id-{name}"), name, "n8n-nodes-base.set", json!({}))
}

/// Single `main` output with one group wired to `targets`.
pub fn main_to(targets: &[&str]) -> Value {
    let wires: Vec<Value> = targets
        .iter()
        .map(|t| json!({ "node": t, "type": "main", "index": 0 }))
        .collect();
    json!({ "main": [wires] })
}

pub fn form_field(label: &str) -> Value {
    json!({ "fieldLabel": label })
}

pub fn form_trigger(fields: Vec<Value>) -> Value {
    node(
        "form",
        "On form submission",
        "n8n-nodes-base.formTrigger",
        json!({ "formFields": { "values": fields } }),
    )
}

pub fn all_form_fields() -> Vec<Value> {
    ["Idea", "Style", "Tone", "Voice", "Type"]
        .into_iter()
        .map(form_field)
        .collect()
}

// =============================================================================
// Assertions
// =============================================================================

pub fn assert_has(messages: &[String], expected: &str) {
    assert!(
        messages.iter().any(|m| m == expected),
        "Expected '{}', got: {:?}",
        expected,
        messages
    );
}

pub fn assert_lacks(messages: &[String], unexpected: &str) {
    assert!(
        !messages.iter().any(|m| m.contains(unexpected)),
        "Did not expect '{}', but got: {:?}",
        unexpected,
        messages
    );
}
