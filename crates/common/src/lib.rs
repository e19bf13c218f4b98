//! Common types and utilities for openapi-n8n
//!
//! This crate contains the error type, the HTTP method vocabulary and the
//! n8n workflow document model shared by the parser, generator, and CLI.

mod workflow;

pub use workflow::{
    HttpRequestNode, NameValue, NodeOptions, NodeParameters, ParameterList, Workflow,
    HTTP_REQUEST_NODE_TYPE, HTTP_REQUEST_TYPE_VERSION,
};

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors that can occur while loading or converting a spec
#[derive(Error, Debug)]
pub enum ConverterError {
    /// Malformed input or missing structural field
    #[error("Parse error: {0}")]
    Parse(String),

    /// Remote spec retrieval failed
    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for converter operations
pub type Result<T> = std::result::Result<T, ConverterError>;

/// HTTP methods recognized on a path item
///
/// Variant order is the order in which operations on one path are visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Options,
    Head,
}

impl HttpMethod {
    /// Every recognized method, in visiting order
    pub const ALL: [HttpMethod; 7] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Patch,
        HttpMethod::Delete,
        HttpMethod::Options,
        HttpMethod::Head,
    ];

    /// Uppercase wire form (e.g., "GET")
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Head => "HEAD",
        }
    }

    /// Parse a method name, ignoring case
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|method| method.as_str().eq_ignore_ascii_case(s.trim()))
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
