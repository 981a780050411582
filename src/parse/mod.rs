//! Parse phase: workflow JSON → Rust types + connection graph.

pub mod graph;
pub mod lenient;
pub mod types;

use std::path::Path;

pub use graph::ConnectionGraph;
pub use types::*;

use crate::error::LoadError;

/// File the CLI validates when no path is given.
pub const DEFAULT_WORKFLOW_FILE: &str = "Video generator.json";

/// Deserialize a workflow JSON string into a `WorkflowDocument`.
pub fn parse(json: &str) -> Result<WorkflowDocument, LoadError> {
    let document: WorkflowDocument = serde_json::from_str(json)?;
    tracing::debug!(
        target: "workflow_validator::parse",
        nodes = document.nodes().len(),
        has_connections = document.connections.is_some(),
        "parsed workflow document"
    );
    Ok(document)
}

/// Read and parse a workflow file.
pub fn load(path: impl AsRef<Path>) -> Result<WorkflowDocument, LoadError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(LoadError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let json = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let document = parse(&json)?;
    tracing::info!(
        target: "workflow_validator::parse",
        path = %path.display(),
        "loaded workflow"
    );
    Ok(document)
}
