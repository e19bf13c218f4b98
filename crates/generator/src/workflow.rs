//! Workflow assembly and node selection

use openapi_n8n_common::{HttpMethod, HttpRequestNode, Workflow};

/// Wrap nodes into an importable workflow document
///
/// Nodes are kept as-is and in order; connections are always empty. An
/// empty node list yields an empty but well-formed document.
pub fn assemble(nodes: Vec<HttpRequestNode>) -> Workflow {
    Workflow::new(nodes)
}

/// Which converted nodes to keep
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    All,

    /// Nodes whose display name is listed
    Names(Vec<String>),

    /// Nodes using one of the listed methods
    Methods(Vec<HttpMethod>),
}

impl Selection {
    pub fn matches(&self, node: &HttpRequestNode) -> bool {
        match self {
            Selection::All => true,
            Selection::Names(names) => names.iter().any(|name| *name == node.name),
            Selection::Methods(methods) => methods.contains(&node.parameters.method),
        }
    }
}

/// Keep the selected nodes, preserving conversion order
pub fn select(nodes: Vec<HttpRequestNode>, selection: &Selection) -> Vec<HttpRequestNode> {
    nodes
        .into_iter()
        .filter(|node| selection.matches(node))
        .collect()
}
