//! Rust types for the exported node-graph workflow JSON.
//!
//! Every field is optional: the document comes from outside and the
//! validators report on what is missing instead of refusing to load it.
//! See `lenient` for how mismatched shapes are handled.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use super::lenient;

// =============================================================================
// TOP-LEVEL WORKFLOW
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkflowDocument {
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
    /// A non-object entry becomes an all-absent node at the same index.
    #[serde(default, deserialize_with = "lenient::list")]
    pub nodes: Option<Vec<Node>>,
    /// Source node name → output ports, in document order.
    #[serde(default, deserialize_with = "lenient::entries")]
    pub connections: Option<Vec<(String, OutputMap)>>,
}

impl WorkflowDocument {
    /// Declared nodes, or an empty slice when the node list is absent.
    pub fn nodes(&self) -> &[Node] {
        self.nodes.as_deref().unwrap_or_default()
    }
}

// =============================================================================
// NODES
// =============================================================================

pub const UNNAMED_NODE: &str = "<unnamed>";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Node {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: Option<String>,
    /// Join key for connections. Uniqueness is not checked.
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "lenient::string")]
    pub node_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub parameters: Option<Map<String, Value>>,
    /// Credential type → reference, in document order. Any truthy value
    /// marks the node as carrying credentials.
    #[serde(default, deserialize_with = "lenient::present_entries")]
    pub credentials: Option<Vec<(String, CredentialRef)>>,
}

impl Node {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED_NODE)
    }

    pub fn kind(&self) -> Option<NodeKind<'_>> {
        self.node_type.as_deref().map(NodeKind::from_type)
    }

    /// Decode `parameters` into a per-type view. Missing or mismatched
    /// parameters yield the default (all-absent) view.
    pub fn params<T: DeserializeOwned + Default>(&self) -> T {
        self.parameters
            .clone()
            .map(Value::Object)
            .and_then(lenient::decode)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CredentialRef {
    #[serde(default, deserialize_with = "lenient::string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
}

impl CredentialRef {
    pub fn is_complete(&self) -> bool {
        self.id.is_some() && self.name.is_some()
    }
}

// =============================================================================
// NODE KINDS
// =============================================================================

pub const FORM_TRIGGER_TYPE: &str = "n8n-nodes-base.formTrigger";
pub const CHAIN_LLM_TYPE: &str = "@n8n/n8n-nodes-langchain.chainLlm";
pub const HTTP_REQUEST_TYPE: &str = "n8n-nodes-base.httpRequest";
pub const S3_TYPE: &str = "n8n-nodes-base.s3";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind<'a> {
    FormTrigger,
    ChainLlm,
    HttpRequest,
    S3,
    Other(&'a str),
}

impl<'a> NodeKind<'a> {
    /// Node kinds a complete generation pipeline is expected to contain.
    pub const RECOMMENDED: [NodeKind<'static>; 4] = [
        NodeKind::FormTrigger,
        NodeKind::ChainLlm,
        NodeKind::HttpRequest,
        NodeKind::S3,
    ];

    pub fn from_type(type_name: &'a str) -> Self {
        match type_name {
            FORM_TRIGGER_TYPE => NodeKind::FormTrigger,
            CHAIN_LLM_TYPE => NodeKind::ChainLlm,
            HTTP_REQUEST_TYPE => NodeKind::HttpRequest,
            S3_TYPE => NodeKind::S3,
            other => NodeKind::Other(other),
        }
    }

    pub fn type_name(&self) -> &'a str {
        match self {
            NodeKind::FormTrigger => FORM_TRIGGER_TYPE,
            NodeKind::ChainLlm => CHAIN_LLM_TYPE,
            NodeKind::HttpRequest => HTTP_REQUEST_TYPE,
            NodeKind::S3 => S3_TYPE,
            NodeKind::Other(t) => *t,
        }
    }
}

// =============================================================================
// PER-TYPE PARAMETERS
// =============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormTriggerParams {
    #[serde(default, deserialize_with = "lenient::option")]
    pub form_fields: Option<FormFields>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormFields {
    #[serde(default, deserialize_with = "lenient::list")]
    pub values: Option<Vec<FormField>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    #[serde(default, deserialize_with = "lenient::string")]
    pub field_label: Option<String>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub field_options: Option<FieldOptions>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FieldOptions {
    #[serde(default, deserialize_with = "lenient::list")]
    pub values: Option<Vec<FieldOption>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FieldOption {
    #[serde(default, deserialize_with = "lenient::string")]
    pub option: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChainLlmParams {
    #[serde(default, deserialize_with = "lenient::present")]
    pub text: Option<Value>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub messages: Option<LlmMessages>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LlmMessages {
    #[serde(default, deserialize_with = "lenient::present")]
    pub message_values: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HttpRequestParams {
    #[serde(default, deserialize_with = "lenient::string")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient::present")]
    pub authentication: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct S3Params {
    #[serde(default, deserialize_with = "lenient::string")]
    pub bucket_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub operation: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub file_name: Option<String>,
}

// =============================================================================
// CONNECTIONS
// =============================================================================

/// Output port name (e.g. `main`) → parallel groups of wires.
#[derive(Debug, Clone, Default)]
pub struct OutputMap(pub Vec<(String, Vec<ConnectionGroup>)>);

impl<'de> Deserialize<'de> for OutputMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        lenient::entries(deserializer).map(|entries| OutputMap(entries.unwrap_or_default()))
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConnectionGroup(pub Vec<Connection>);

impl<'de> Deserialize<'de> for ConnectionGroup {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wires = match Value::deserialize(deserializer)? {
            Value::Array(items) => items.into_iter().map(Connection::from).collect(),
            _ => Vec::new(),
        };
        Ok(ConnectionGroup(wires))
    }
}

/// One wire. Only the target name is read; the input type and index are
/// not validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub struct Connection {
    pub node: Option<String>,
}

impl From<Value> for Connection {
    fn from(value: Value) -> Self {
        Connection {
            node: value.get("node").and_then(lenient::text),
        }
    }
}
