//! Dialect detection and dialect-specific extraction
//!
//! OpenAPI 3.x and Swagger 2.0 differ in where they keep the base endpoint
//! and the security scheme registry. [`Dialect`] is detected once per
//! document and then answers those questions uniformly:
//!
//! | Concern | OpenAPI 3 | Swagger 2 |
//! |---|---|---|
//! | Base URL | first `servers[].url` | `scheme://host` + `basePath` |
//! | Schemes | `components.securitySchemes` | `securityDefinitions` |

mod openapi3;
mod security;
mod swagger2;

pub use security::{SchemeRegistry, SecurityScheme};

use crate::document::{Server, SpecDocument};
use std::fmt;

/// Supported spec dialects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// OpenAPI 3.x (`openapi: 3.x.y`)
    OpenApi3,

    /// Swagger 2.0 (`swagger: "2.0"`)
    Swagger2,
}

impl Dialect {
    /// Classify a document
    ///
    /// Swagger 2 if and only if a `swagger` marker is present and starts
    /// with `2`; every other document is treated as OpenAPI 3.
    pub fn detect(doc: &SpecDocument) -> Self {
        match doc.swagger_version() {
            Some(version) if version.starts_with('2') => Dialect::Swagger2,
            _ => Dialect::OpenApi3,
        }
    }

    /// Version marker the document declares for this dialect
    pub fn version(self, doc: &SpecDocument) -> Option<String> {
        match self {
            Dialect::OpenApi3 => doc.openapi_version(),
            Dialect::Swagger2 => doc.swagger_version(),
        }
    }

    /// Base endpoint declared by the document, or an empty string
    pub fn base_url(self, doc: &SpecDocument) -> String {
        match self {
            Dialect::OpenApi3 => openapi3::base_url(doc),
            Dialect::Swagger2 => swagger2::base_url(doc),
        }
    }

    /// Candidate servers declared by the document
    pub fn servers(self, doc: &SpecDocument) -> Vec<Server> {
        match self {
            Dialect::OpenApi3 => openapi3::servers(doc),
            Dialect::Swagger2 => swagger2::servers(doc),
        }
    }

    /// Security scheme registry, interpreted for this dialect
    pub fn security_schemes(self, doc: &SpecDocument) -> SchemeRegistry {
        match self {
            Dialect::OpenApi3 => openapi3::security_schemes(doc),
            Dialect::Swagger2 => swagger2::security_schemes(doc),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::OpenApi3 => write!(f, "OpenAPI 3"),
            Dialect::Swagger2 => write!(f, "Swagger 2"),
        }
    }
}

/// Detect the dialect of a document
pub fn detect_dialect(doc: &SpecDocument) -> Dialect {
    Dialect::detect(doc)
}

/// Resolve the document's base URL using its detected dialect
pub fn resolve_base_url(doc: &SpecDocument) -> String {
    let dialect = Dialect::detect(doc);
    let base_url = dialect.base_url(doc);
    if base_url.is_empty() {
        tracing::warn!(%dialect, "spec declares no base URL");
    }
    base_url
}

/// Resolve the document's security scheme registry using its detected dialect
pub fn resolve_security_schemes(doc: &SpecDocument) -> SchemeRegistry {
    Dialect::detect(doc).security_schemes(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: serde_json::Value) -> SpecDocument {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_detect_swagger2() {
        let d = doc(json!({ "swagger": "2.0", "paths": {} }));
        assert_eq!(Dialect::detect(&d), Dialect::Swagger2);
    }

    #[test]
    fn test_detect_openapi3() {
        let d = doc(json!({ "openapi": "3.1.0", "paths": {} }));
        assert_eq!(Dialect::detect(&d), Dialect::OpenApi3);
    }

    #[test]
    fn test_non_2_swagger_marker_is_openapi3() {
        let d = doc(json!({ "swagger": "1.2", "paths": {} }));
        assert_eq!(Dialect::detect(&d), Dialect::OpenApi3);
    }

    #[test]
    fn test_declared_version() {
        let d = doc(json!({ "openapi": "3.0.3", "swagger": "2.0", "paths": {} }));
        assert_eq!(Dialect::OpenApi3.version(&d).as_deref(), Some("3.0.3"));
        assert_eq!(Dialect::Swagger2.version(&d).as_deref(), Some("2.0"));
    }

    #[test]
    fn test_numeric_swagger_marker() {
        let d = doc(json!({ "swagger": 2.0, "paths": {} }));
        assert_eq!(Dialect::detect(&d), Dialect::Swagger2);
    }

    #[test]
    fn test_display() {
        assert_eq!(Dialect::OpenApi3.to_string(), "OpenAPI 3");
        assert_eq!(Dialect::Swagger2.to_string(), "Swagger 2");
    }
}
