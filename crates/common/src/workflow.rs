//! n8n workflow document model
//!
//! Field names and presence rules follow n8n's clipboard/import format for
//! `n8n-nodes-base.httpRequest` nodes; optional blocks are omitted entirely
//! rather than serialized as `null`.

use crate::HttpMethod;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Node type tag for n8n's HTTP Request node
pub const HTTP_REQUEST_NODE_TYPE: &str = "n8n-nodes-base.httpRequest";

/// HTTP Request node schema version the parameters are written for
pub const HTTP_REQUEST_TYPE_VERSION: f64 = 4.3;

/// Importable workflow document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workflow {
    /// Nodes, in conversion order
    pub nodes: Vec<HttpRequestNode>,

    /// Node wiring; always empty
    pub connections: Map<String, Value>,
}

impl Workflow {
    /// Wrap nodes with an empty connection map
    pub fn new(nodes: Vec<HttpRequestNode>) -> Self {
        Self {
            nodes,
            connections: Map::new(),
        }
    }

    /// Serialize as indented JSON
    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serialize as single-line JSON
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// One generated HTTP Request node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HttpRequestNode {
    /// Opaque identifier, fresh per conversion
    pub id: String,

    /// Display name (operationId or "METHOD path")
    pub name: String,

    /// Always [`HTTP_REQUEST_NODE_TYPE`]
    #[serde(rename = "type")]
    pub node_type: String,

    /// Always [`HTTP_REQUEST_TYPE_VERSION`]
    #[serde(rename = "typeVersion")]
    pub type_version: f64,

    /// Canvas position `[x, y]`
    pub position: [i64; 2],

    pub parameters: NodeParameters,
}

impl HttpRequestNode {
    /// Create a node with the fixed HTTP Request type tag and version
    pub fn new(id: String, name: String, position: [i64; 2], parameters: NodeParameters) -> Self {
        Self {
            id,
            name,
            node_type: HTTP_REQUEST_NODE_TYPE.to_string(),
            type_version: HTTP_REQUEST_TYPE_VERSION,
            position,
            parameters,
        }
    }
}

/// HTTP Request node parameter block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeParameters {
    pub method: HttpMethod,

    pub url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_query: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_parameters: Option<ParameterList>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_headers: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_parameters: Option<ParameterList>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<NodeOptions>,
}

impl NodeParameters {
    /// Parameters with only method and URL set
    pub fn new(method: HttpMethod, url: String) -> Self {
        Self {
            method,
            url,
            send_query: None,
            query_parameters: None,
            send_headers: None,
            header_parameters: None,
            options: None,
        }
    }

    /// Attach query parameters; an empty list leaves both fields unset
    pub fn with_query(mut self, parameters: Vec<NameValue>) -> Self {
        if !parameters.is_empty() {
            self.send_query = Some(true);
            self.query_parameters = Some(ParameterList { parameters });
        }
        self
    }

    /// Attach header parameters; an empty list leaves both fields unset
    pub fn with_headers(mut self, parameters: Vec<NameValue>) -> Self {
        if !parameters.is_empty() {
            self.send_headers = Some(true);
            self.header_parameters = Some(ParameterList { parameters });
        }
        self
    }

    /// Attach a description; an empty string leaves options unset
    pub fn with_description(mut self, description: String) -> Self {
        if !description.is_empty() {
            self.options = Some(NodeOptions { description });
        }
        self
    }
}

/// Wrapper n8n expects around query/header entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterList {
    pub parameters: Vec<NameValue>,
}

/// A single name/value entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameValue {
    pub name: String,
    pub value: String,
}

impl NameValue {
    /// Entry with the empty placeholder value
    pub fn placeholder(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: String::new(),
        }
    }
}

/// Node options block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeOptions {
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_node_shape() {
        let node = HttpRequestNode::new(
            "id-1".to_string(),
            "GET /health".to_string(),
            [0, 150],
            NodeParameters::new(HttpMethod::Get, "https://api.x.com/health".to_string()),
        );

        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "id-1",
                "name": "GET /health",
                "type": "n8n-nodes-base.httpRequest",
                "typeVersion": 4.3,
                "position": [0, 150],
                "parameters": {
                    "method": "GET",
                    "url": "https://api.x.com/health"
                }
            })
        );
    }

    #[test]
    fn test_optional_blocks_serialized_when_present() {
        let params = NodeParameters::new(HttpMethod::Post, "/users".to_string())
            .with_query(vec![NameValue::placeholder("limit")])
            .with_headers(vec![NameValue::placeholder("X-Trace")])
            .with_description("Create a user".to_string());

        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(
            value,
            json!({
                "method": "POST",
                "url": "/users",
                "sendQuery": true,
                "queryParameters": { "parameters": [{ "name": "limit", "value": "" }] },
                "sendHeaders": true,
                "headerParameters": { "parameters": [{ "name": "X-Trace", "value": "" }] },
                "options": { "description": "Create a user" }
            })
        );
    }

    #[test]
    fn test_empty_inputs_leave_blocks_absent() {
        let params = NodeParameters::new(HttpMethod::Delete, "/x".to_string())
            .with_query(Vec::new())
            .with_headers(Vec::new())
            .with_description(String::new());

        assert_eq!(params.send_query, None);
        assert_eq!(params.query_parameters, None);
        assert_eq!(params.send_headers, None);
        assert_eq!(params.header_parameters, None);
        assert_eq!(params.options, None);
    }

    #[test]
    fn test_empty_workflow() {
        let workflow = Workflow::new(Vec::new());
        assert_eq!(workflow.to_json().unwrap(), r#"{"nodes":[],"connections":{}}"#);
    }
}
