//! Per-node validation: universal fields, then one rule per known node type.
//! Unknown node types get the universal checks only.

use std::collections::HashSet;

use crate::error::Findings;
use crate::parse::types::*;

/// Form labels the generation pipeline reads from the trigger.
pub const REQUIRED_FORM_LABELS: [&str; 5] = ["Idea", "Style", "Tone", "Voice", "Type"];

const VOICE_LABEL: &str = "Voice";
const LOCAL_URL_MARKERS: [&str; 2] = ["localhost", "192.168."];
const AUTHENTICATED_PROVIDER_DOMAIN: &str = "huggingface.co";

/// Validate every node in document order. Returns all findings.
pub fn validate_nodes(workflow: &WorkflowDocument) -> Findings {
    let mut findings = Findings::new();
    let nodes = workflow.nodes();

    let present: HashSet<&str> = nodes.iter().filter_map(|n| n.node_type.as_deref()).collect();
    for kind in NodeKind::RECOMMENDED {
        if !present.contains(kind.type_name()) {
            findings.warning(format!(
                "Recommended node type missing: {}",
                kind.type_name()
            ));
        }
    }

    for (index, node) in nodes.iter().enumerate() {
        findings.extend(validate_node(index, node));
    }

    findings
}

/// Validate a single node at `index` in the node list.
pub fn validate_node(index: usize, node: &Node) -> Findings {
    let mut findings = Findings::new();

    if node.id.is_none() {
        findings.error(format!("Node at index {} is missing ID", index));
    }
    if node.name.is_none() {
        findings.error(format!("Node at index {} is missing name", index));
    }
    if node.node_type.is_none() {
        findings.error(format!("Node at index {} is missing type", index));
    }

    match node.kind() {
        Some(NodeKind::FormTrigger) => validate_form_trigger(node, &mut findings),
        Some(NodeKind::ChainLlm) => validate_chain_llm(node, &mut findings),
        Some(NodeKind::HttpRequest) => validate_http_request(node, &mut findings),
        Some(NodeKind::S3) => validate_s3(node, &mut findings),
        Some(NodeKind::Other(_)) | None => {}
    }

    findings
}

fn validate_form_trigger(node: &Node, findings: &mut Findings) {
    let params: FormTriggerParams = node.params();
    let Some(fields) = params.form_fields.and_then(|f| f.values) else {
        findings.error(format!(
            "Form trigger node '{}' missing form fields",
            node.display_name()
        ));
        return;
    };

    let labels: HashSet<&str> = fields
        .iter()
        .filter_map(|f| f.field_label.as_deref())
        .collect();
    for required in REQUIRED_FORM_LABELS {
        if !labels.contains(required) {
            findings.error(format!("Form trigger missing required field: {}", required));
        }
    }

    let voice_options = fields
        .iter()
        .find(|f| f.field_label.as_deref() == Some(VOICE_LABEL))
        .and_then(|f| f.field_options.as_ref())
        .and_then(|o| o.values.as_ref());
    if voice_options.is_some_and(|options| options.is_empty()) {
        findings.warning("Voice field has no options defined");
    }
}

fn validate_chain_llm(node: &Node, findings: &mut Findings) {
    let params: ChainLlmParams = node.params();

    if params.text.is_none() {
        findings.warning(format!(
            "LLM node '{}' missing prompt text",
            node.display_name()
        ));
    }

    if params.messages.and_then(|m| m.message_values).is_none() {
        findings.warning(format!(
            "LLM node '{}' missing system messages",
            node.display_name()
        ));
    }
}

fn validate_http_request(node: &Node, findings: &mut Findings) {
    let params: HttpRequestParams = node.params();
    let name = node.display_name();

    let Some(url) = params.url.as_deref() else {
        findings.error(format!("HTTP Request node '{}' missing URL", name));
        return;
    };

    // Both local markers are checked only when a URL is set. The editor-side
    // script this rule comes from let the private-range clause escape the
    // presence guard through operator precedence; that reading is not kept.
    if LOCAL_URL_MARKERS.iter().any(|marker| url.contains(marker)) {
        findings.warning(format!(
            "HTTP Request node '{}' uses local URL: {}",
            name, url
        ));
    }

    if url.contains(AUTHENTICATED_PROVIDER_DOMAIN) && params.authentication.is_none() {
        findings.warning(format!(
            "HuggingFace request in '{}' might need authentication",
            name
        ));
    }
}

fn validate_s3(node: &Node, findings: &mut Findings) {
    let params: S3Params = node.params();

    if params.bucket_name.is_none() {
        findings.error(format!(
            "S3 node '{}' missing bucket name",
            node.display_name()
        ));
    }

    if params.operation.as_deref() == Some("upload") && params.file_name.is_none() {
        findings.error(format!(
            "S3 upload node '{}' missing file name",
            node.display_name()
        ));
    }
}
