//! HTTP Request node construction

use crate::auth::{dedupe_by_name, AuthHints};
use crate::options::AuthHeaderValues;
use openapi_n8n_common::{HttpMethod, HttpRequestNode, NameValue, NodeParameters};
use openapi_n8n_parser::{Operation, ParameterLocation};

/// Builds one node per operation against a fixed base URL
#[derive(Debug, Clone)]
pub struct NodeBuilder<'a> {
    base_url: &'a str,
    header_values: AuthHeaderValues,
}

impl<'a> NodeBuilder<'a> {
    pub fn new(base_url: &'a str, header_values: AuthHeaderValues) -> Self {
        Self {
            base_url,
            header_values,
        }
    }

    /// Build the node for `method path`
    ///
    /// The URL is `base_url + path` verbatim; slashes are not normalized.
    pub fn build(
        &self,
        id: String,
        path: &str,
        method: HttpMethod,
        operation: &Operation,
        auth: &AuthHints,
        position: [i64; 2],
    ) -> HttpRequestNode {
        let url = format!("{}{}", self.base_url, path);

        let query: Vec<NameValue> = operation
            .parameters_in(ParameterLocation::Query)
            .map(|p| NameValue::placeholder(p.name.as_str()))
            .collect();

        let parameters = NodeParameters::new(method, url)
            .with_query(query)
            .with_headers(self.headers(operation, auth))
            .with_description(describe(operation, auth));

        HttpRequestNode::new(id, node_name(operation, path, method), position, parameters)
    }

    /// Explicit header parameters first, then auth headers; first name wins
    fn headers(&self, operation: &Operation, auth: &AuthHints) -> Vec<NameValue> {
        let explicit = operation
            .parameters_in(ParameterLocation::Header)
            .map(|p| NameValue::placeholder(p.name.as_str()));

        let synthetic = auth.headers.iter().map(|h| match self.header_values {
            AuthHeaderValues::Blank => NameValue::placeholder(h.name.as_str()),
            AuthHeaderValues::Templated => NameValue {
                name: h.name.clone(),
                value: h.value.clone(),
            },
        });

        let headers: Vec<NameValue> = explicit.chain(synthetic).collect();
        dedupe_by_name(headers, |h| h.name.as_str())
    }
}

/// operationId, or "METHOD path" when absent
fn node_name(operation: &Operation, path: &str, method: HttpMethod) -> String {
    match operation.operation_id.as_deref() {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => format!("{} {}", method, path),
    }
}

/// Auth summary, summary, and description; empty parts dropped
fn describe(operation: &Operation, auth: &AuthHints) -> String {
    [
        Some(auth.summary.as_str()),
        operation.summary.as_deref(),
        operation.description.as_deref(),
    ]
    .into_iter()
    .flatten()
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join("\n")
}
