//! API description document types
//!
//! One lenient representation covers both OpenAPI 3.x and Swagger 2.0:
//! fields that exist in only one dialect are optional, and anything the
//! converter does not read (schemas, request bodies, responses) is skipped.
//! Maps are `IndexMap` so paths and schemes keep their source order.

use super::lenient;
use indexmap::IndexMap;
use openapi_n8n_common::HttpMethod;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Security requirement: scheme name -> required scopes
pub type SecurityRequirement = IndexMap<String, Vec<String>>;

/// Parsed API description document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpecDocument {
    /// OpenAPI version marker (e.g., "3.0.3")
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub openapi: Option<Value>,

    /// Swagger version marker (e.g., "2.0")
    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub swagger: Option<Value>,

    /// API metadata
    #[serde(default, deserialize_with = "lenient::object_or_default")]
    pub info: Info,

    /// OpenAPI 3 servers
    #[serde(default, deserialize_with = "lenient::objects")]
    pub servers: Vec<Server>,

    /// Swagger 2 host (e.g., "api.example.com")
    #[serde(default, deserialize_with = "lenient::optional")]
    pub host: Option<String>,

    /// Swagger 2 base path (e.g., "/v1")
    #[serde(rename = "basePath", default, deserialize_with = "lenient::optional")]
    pub base_path: Option<String>,

    /// Swagger 2 transfer schemes
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub schemes: Vec<String>,

    /// OpenAPI 3 reusable components
    #[serde(default, deserialize_with = "lenient::object")]
    pub components: Option<Components>,

    /// Swagger 2 security scheme registry
    #[serde(
        rename = "securityDefinitions",
        default,
        deserialize_with = "lenient::object_map"
    )]
    pub security_definitions: IndexMap<String, RawSecurityScheme>,

    /// API paths, in document order
    ///
    /// Only mapping values are path items; `x-*` extensions holding lists or
    /// scalars are skipped.
    #[serde(default, deserialize_with = "lenient::object_map")]
    pub paths: IndexMap<String, PathItem>,

    /// Document-wide default security requirements
    #[serde(default, deserialize_with = "lenient::optional")]
    pub security: Option<Vec<SecurityRequirement>>,
}

impl SpecDocument {
    /// API title, if declared
    pub fn title(&self) -> Option<&str> {
        self.info.title.as_deref().filter(|t| !t.is_empty())
    }

    /// Declared API version (`info.version`), if any
    pub fn api_version(&self) -> Option<String> {
        self.info.version.as_ref().and_then(marker_text)
    }

    /// Text of the `openapi` marker, if declared
    pub fn openapi_version(&self) -> Option<String> {
        self.openapi.as_ref().and_then(marker_text)
    }

    /// Text of the `swagger` marker, if declared
    pub fn swagger_version(&self) -> Option<String> {
        self.swagger.as_ref().and_then(marker_text)
    }

    /// Every operation as `(path, method, operation)`, paths in document
    /// order and methods in [`HttpMethod::ALL`] order
    pub fn operations(&self) -> impl Iterator<Item = (&str, HttpMethod, &Operation)> + '_ {
        self.paths.iter().flat_map(|(path, item)| {
            item.operations()
                .map(move |(method, operation)| (path.as_str(), method, operation))
        })
    }

    /// Number of operations across all paths
    pub fn operation_count(&self) -> usize {
        self.paths.values().map(|item| item.operations().count()).sum()
    }
}

/// Render a scalar version marker as text; null and empty values count as absent
pub(crate) fn marker_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// API information
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Info {
    #[serde(default, deserialize_with = "lenient::optional")]
    pub title: Option<String>,

    /// Often written unquoted in YAML (`version: 1.0`), so kept as a scalar
    #[serde(default, deserialize_with = "lenient::optional")]
    pub version: Option<Value>,

    #[serde(default, deserialize_with = "lenient::optional")]
    pub description: Option<String>,
}

/// Server information (OpenAPI 3)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    /// Empty when the entry omits it
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub url: String,

    #[serde(
        default,
        deserialize_with = "lenient::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
}

/// Reusable components (OpenAPI 3); only security schemes are read
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Components {
    #[serde(
        rename = "securitySchemes",
        default,
        deserialize_with = "lenient::object_map"
    )]
    pub security_schemes: IndexMap<String, RawSecurityScheme>,
}

/// Operations defined on one path
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathItem {
    #[serde(
        default,
        deserialize_with = "lenient::object",
        skip_serializing_if = "Option::is_none"
    )]
    pub get: Option<Operation>,

    #[serde(
        default,
        deserialize_with = "lenient::object",
        skip_serializing_if = "Option::is_none"
    )]
    pub post: Option<Operation>,

    #[serde(
        default,
        deserialize_with = "lenient::object",
        skip_serializing_if = "Option::is_none"
    )]
    pub put: Option<Operation>,

    #[serde(
        default,
        deserialize_with = "lenient::object",
        skip_serializing_if = "Option::is_none"
    )]
    pub patch: Option<Operation>,

    #[serde(
        default,
        deserialize_with = "lenient::object",
        skip_serializing_if = "Option::is_none"
    )]
    pub delete: Option<Operation>,

    #[serde(
        default,
        deserialize_with = "lenient::object",
        skip_serializing_if = "Option::is_none"
    )]
    pub options: Option<Operation>,

    #[serde(
        default,
        deserialize_with = "lenient::object",
        skip_serializing_if = "Option::is_none"
    )]
    pub head: Option<Operation>,
}

impl PathItem {
    /// Operation for one method
    pub fn operation(&self, method: HttpMethod) -> Option<&Operation> {
        match method {
            HttpMethod::Get => self.get.as_ref(),
            HttpMethod::Post => self.post.as_ref(),
            HttpMethod::Put => self.put.as_ref(),
            HttpMethod::Patch => self.patch.as_ref(),
            HttpMethod::Delete => self.delete.as_ref(),
            HttpMethod::Options => self.options.as_ref(),
            HttpMethod::Head => self.head.as_ref(),
        }
    }

    /// Defined operations in [`HttpMethod::ALL`] order
    pub fn operations(&self) -> impl Iterator<Item = (HttpMethod, &Operation)> + '_ {
        HttpMethod::ALL
            .into_iter()
            .filter_map(move |method| self.operation(method).map(|op| (method, op)))
    }
}

/// HTTP operation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Operation {
    #[serde(rename = "operationId", default, deserialize_with = "lenient::optional")]
    pub operation_id: Option<String>,

    #[serde(default, deserialize_with = "lenient::optional")]
    pub summary: Option<String>,

    #[serde(default, deserialize_with = "lenient::optional")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "lenient::objects")]
    pub parameters: Vec<Parameter>,

    /// Overrides the document default when present, even if empty
    #[serde(default, deserialize_with = "lenient::optional")]
    pub security: Option<Vec<SecurityRequirement>>,
}

impl Operation {
    /// Parameters declared in one location, in declaration order
    pub fn parameters_in(
        &self,
        location: ParameterLocation,
    ) -> impl Iterator<Item = &Parameter> + '_ {
        self.parameters
            .iter()
            .filter(move |p| p.location == location)
    }
}

/// Parameter definition
///
/// Unresolved `$ref` parameters deserialize with an empty name and an
/// [`ParameterLocation::Other`] location.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Parameter {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub name: String,

    #[serde(rename = "in", default, deserialize_with = "lenient::or_default")]
    pub location: ParameterLocation,
}

/// Parameter location
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Query,
    Header,
    Path,
    Cookie,
    /// `body`, `formData`, or anything unrecognized
    #[default]
    #[serde(other)]
    Other,
}

/// Security scheme as written in the document
///
/// Dialect-specific interpretation happens in [`crate::SecurityScheme`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSecurityScheme {
    #[serde(rename = "type", default, deserialize_with = "lenient::optional")]
    pub scheme_type: Option<String>,

    /// HTTP auth scheme (OpenAPI 3 `http` type)
    #[serde(default, deserialize_with = "lenient::optional")]
    pub scheme: Option<String>,

    /// Header, query, or cookie parameter name (apiKey)
    #[serde(default, deserialize_with = "lenient::optional")]
    pub name: Option<String>,

    /// apiKey location: header, query, cookie
    #[serde(rename = "in", default, deserialize_with = "lenient::optional")]
    pub location: Option<String>,
}
