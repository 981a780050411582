//! WASM entry points for browser use.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::parse::types::Node;
use crate::report::Report;

/// Validate a workflow JSON document with all four validators.
/// Returns the serialized report, or a `loadError` object.
#[wasm_bindgen]
pub fn validate_workflow(json: &str) -> JsValue {
    let result = validate_workflow_inner(json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn validate_workflow_inner(json: &str) -> ValidateResult {
    let workflow = match crate::parse::parse(json) {
        Ok(w) => w,
        Err(e) => return ValidateResult::load_error(e),
    };

    let findings = crate::validate::validate_workflow(&workflow);
    ValidateResult::Checked(Report::from(findings))
}

/// Validate a single node JSON object, as if it sat at index 0.
#[wasm_bindgen]
pub fn validate_node(node_json: &str) -> JsValue {
    let result = validate_node_inner(node_json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn validate_node_inner(node_json: &str) -> ValidateResult {
    let node = match serde_json::from_str::<Node>(node_json) {
        Ok(n) => n,
        Err(e) => return ValidateResult::load_error(e),
    };

    let findings = crate::validate::validate_node(0, &node);
    ValidateResult::Checked(Report::from(findings))
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum ValidateResult {
    LoadError(LoadErrorDto),
    Checked(Report),
}

#[derive(Debug, Serialize)]
struct LoadErrorDto {
    status: &'static str,
    message: String,
}

impl ValidateResult {
    fn load_error(e: impl std::fmt::Display) -> Self {
        ValidateResult::LoadError(LoadErrorDto {
            status: "loadError",
            message: e.to_string(),
        })
    }
}
