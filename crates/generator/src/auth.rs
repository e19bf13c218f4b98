//! Authentication hints derived from security requirements
//!
//! n8n has no notion of alternative auth flows, so every alternative in an
//! operation's security requirement list is unioned: each resolvable scheme
//! contributes at most one synthetic header and one summary fragment.

use indexmap::IndexSet;
use openapi_n8n_parser::{
    Dialect, Operation, SchemeRegistry, SecurityRequirement, SecurityScheme, SpecDocument,
};

const AUTHORIZATION: &str = "Authorization";
const BEARER_TEMPLATE: &str = "Bearer {{token}}";
const BASIC_TEMPLATE: &str = "Basic {{credentials}}";
const API_KEY_TEMPLATE: &str = "{{apiKey}}";

/// Synthetic header injected for an authentication scheme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthHeader {
    pub name: String,

    /// Credential template, e.g. `Bearer {{token}}`
    pub value: String,
}

impl AuthHeader {
    fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}

/// Authentication derived for one operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthHints {
    /// Headers de-duplicated by name, first occurrence kept
    pub headers: Vec<AuthHeader>,

    /// "Auth: ..." summary, or empty when nothing resolved
    pub summary: String,
}

/// Resolves operation security against a scheme registry
#[derive(Debug, Clone)]
pub struct AuthResolver<'a> {
    dialect: Dialect,
    schemes: SchemeRegistry,
    default_security: Option<&'a [SecurityRequirement]>,
}

impl<'a> AuthResolver<'a> {
    pub fn new(
        dialect: Dialect,
        schemes: SchemeRegistry,
        default_security: Option<&'a [SecurityRequirement]>,
    ) -> Self {
        Self {
            dialect,
            schemes,
            default_security,
        }
    }

    /// Resolver for a document, using its detected dialect
    pub fn for_document(doc: &'a SpecDocument) -> Self {
        let dialect = Dialect::detect(doc);
        Self::new(
            dialect,
            dialect.security_schemes(doc),
            doc.security.as_deref(),
        )
    }

    /// Derive headers and summary for an operation
    ///
    /// The operation's own security list wins when present, even if empty;
    /// otherwise the document default applies.
    pub fn resolve(&self, operation: &Operation) -> AuthHints {
        let requirements = operation.security.as_deref().or(self.default_security);
        let Some(requirements) = requirements.filter(|r| !r.is_empty()) else {
            return AuthHints::default();
        };

        let mut headers = Vec::new();
        let mut fragments: IndexSet<String> = IndexSet::new();

        for requirement in requirements {
            for scheme_name in requirement.keys() {
                let Some(scheme) = self.schemes.get(scheme_name) else {
                    tracing::warn!(
                        scheme = %scheme_name,
                        "security requirement references an undefined scheme"
                    );
                    continue;
                };

                let (header, fragment) = scheme_hint(self.dialect, scheme);
                headers.extend(header);
                if !fragment.is_empty() {
                    fragments.insert(fragment);
                }
            }
        }

        AuthHints {
            headers: dedupe_by_name(headers, |h| h.name.as_str()),
            summary: summarize(&fragments),
        }
    }
}

/// Header and summary fragment for one scheme
fn scheme_hint(dialect: Dialect, scheme: &SecurityScheme) -> (Option<AuthHeader>, String) {
    match (dialect, scheme) {
        (Dialect::OpenApi3, SecurityScheme::HttpBearer) => (
            Some(AuthHeader::new(AUTHORIZATION, BEARER_TEMPLATE)),
            "Bearer token".to_string(),
        ),
        (Dialect::OpenApi3, SecurityScheme::HttpBasic)
        | (Dialect::Swagger2, SecurityScheme::Basic) => (
            Some(AuthHeader::new(AUTHORIZATION, BASIC_TEMPLATE)),
            "Basic auth".to_string(),
        ),
        (Dialect::OpenApi3, SecurityScheme::ApiKey { location, name }) => {
            let header = header_key_name(location, name)
                .map(|name| AuthHeader::new(name, API_KEY_TEMPLATE));
            (header, api_key_fragment(location, name))
        }
        (Dialect::Swagger2, SecurityScheme::ApiKey { location, name }) => {
            if name.as_deref() == Some(AUTHORIZATION) {
                let header = header_key_name(location, name)
                    .map(|_| AuthHeader::new(AUTHORIZATION, BEARER_TEMPLATE));
                (header, "Bearer token".to_string())
            } else {
                let header = header_key_name(location, name)
                    .map(|name| AuthHeader::new(name, API_KEY_TEMPLATE));
                (header, api_key_fragment(location, name))
            }
        }
        (Dialect::OpenApi3, SecurityScheme::OAuth2) => (None, "OAuth2".to_string()),
        (Dialect::Swagger2, SecurityScheme::OAuth2) => (
            Some(AuthHeader::new(AUTHORIZATION, BEARER_TEMPLATE)),
            "OAuth2".to_string(),
        ),
        (_, other) => (None, other.kind().to_string()),
    }
}

/// Header name for an apiKey scheme sent in a header
fn header_key_name<'s>(location: &Option<String>, name: &'s Option<String>) -> Option<&'s str> {
    if location.as_deref() != Some("header") {
        return None;
    }
    name.as_deref().filter(|n| !n.is_empty())
}

fn api_key_fragment(location: &Option<String>, name: &Option<String>) -> String {
    format!(
        "API Key ({}: {})",
        location.as_deref().unwrap_or_default(),
        name.as_deref().unwrap_or_default()
    )
}

fn summarize(fragments: &IndexSet<String>) -> String {
    if fragments.is_empty() {
        return String::new();
    }
    let joined: Vec<&str> = fragments.iter().map(String::as_str).collect();
    format!("Auth: {}", joined.join(", "))
}

/// Keep the first entry for each name, preserving order
pub(crate) fn dedupe_by_name<T>(items: Vec<T>, name: impl Fn(&T) -> &str) -> Vec<T> {
    let mut seen: IndexSet<String> = IndexSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(name(item).to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use openapi_n8n_parser::parse_spec;

    fn openapi3(schemes: &str, security: &str) -> SpecDocument {
        parse_spec(&format!(
            r#"{{
                "openapi": "3.0.0",
                "paths": {{}},
                "components": {{ "securitySchemes": {schemes} }},
                "security": {security}
            }}"#
        ))
        .unwrap()
    }

    fn swagger2(definitions: &str, security: &str) -> SpecDocument {
        parse_spec(&format!(
            r#"{{
                "swagger": "2.0",
                "paths": {{}},
                "securityDefinitions": {definitions},
                "security": {security}
            }}"#
        ))
        .unwrap()
    }

    fn header_names(hints: &AuthHints) -> Vec<&str> {
        hints.headers.iter().map(|h| h.name.as_str()).collect()
    }

    #[test]
    fn test_no_security_is_unauthenticated() {
        let doc = parse_spec(r#"{"openapi": "3.0.0", "paths": {}}"#).unwrap();
        let hints = AuthResolver::for_document(&doc).resolve(&Operation::default());
        assert_eq!(hints, AuthHints::default());
    }

    #[test]
    fn test_openapi3_bearer() {
        let doc = openapi3(
            r#"{ "bearerAuth": { "type": "http", "scheme": "bearer" } }"#,
            r#"[{ "bearerAuth": [] }]"#,
        );
        let hints = AuthResolver::for_document(&doc).resolve(&Operation::default());

        assert_eq!(
            hints.headers,
            vec![AuthHeader::new("Authorization", "Bearer {{token}}")]
        );
        assert_eq!(hints.summary, "Auth: Bearer token");
    }

    #[test]
    fn test_openapi3_api_key_locations() {
        let doc = openapi3(
            r#"{
                "headerKey": { "type": "apiKey", "in": "header", "name": "X-API-Key" },
                "queryKey": { "type": "apiKey", "in": "query", "name": "api_key" }
            }"#,
            r#"[{ "headerKey": [] }, { "queryKey": [] }]"#,
        );
        let hints = AuthResolver::for_document(&doc).resolve(&Operation::default());

        assert_eq!(
            hints.headers,
            vec![AuthHeader::new("X-API-Key", "{{apiKey}}")]
        );
        assert_eq!(
            hints.summary,
            "Auth: API Key (header: X-API-Key), API Key (query: api_key)"
        );
    }

    #[test]
    fn test_openapi3_oauth2_has_no_header() {
        let doc = openapi3(
            r#"{ "oauth": { "type": "oauth2", "flows": {} } }"#,
            r#"[{ "oauth": ["read"] }]"#,
        );
        let hints = AuthResolver::for_document(&doc).resolve(&Operation::default());

        assert!(hints.headers.is_empty());
        assert_eq!(hints.summary, "Auth: OAuth2");
    }

    #[test]
    fn test_openapi3_unrecognized_kinds_use_raw_type() {
        let doc = openapi3(
            r#"{
                "oidc": { "type": "openIdConnect", "openIdConnectUrl": "https://x" },
                "tls": { "type": "mutualTLS" },
                "digest": { "type": "http", "scheme": "digest" }
            }"#,
            r#"[{ "oidc": [], "tls": [], "digest": [] }]"#,
        );
        let hints = AuthResolver::for_document(&doc).resolve(&Operation::default());

        assert!(hints.headers.is_empty());
        assert_eq!(hints.summary, "Auth: openIdConnect, mutualTLS, http");
    }

    #[test]
    fn test_alternatives_are_unioned_and_deduplicated() {
        let doc = openapi3(
            r#"{
                "bearerAuth": { "type": "http", "scheme": "bearer" },
                "basicAuth": { "type": "http", "scheme": "basic" },
                "otherBearer": { "type": "http", "scheme": "bearer" }
            }"#,
            r#"[{ "bearerAuth": [] }, { "basicAuth": [] }, { "otherBearer": [] }]"#,
        );
        let hints = AuthResolver::for_document(&doc).resolve(&Operation::default());

        assert_eq!(
            hints.headers,
            vec![AuthHeader::new("Authorization", "Bearer {{token}}")]
        );
        assert_eq!(hints.summary, "Auth: Bearer token, Basic auth");
    }

    #[test]
    fn test_operation_security_overrides_default() {
        let doc = openapi3(
            r#"{
                "bearerAuth": { "type": "http", "scheme": "bearer" },
                "apiKey": { "type": "apiKey", "in": "header", "name": "X-Key" }
            }"#,
            r#"[{ "bearerAuth": [] }]"#,
        );
        let resolver = AuthResolver::for_document(&doc);

        let op: Operation =
            serde_json::from_str(r#"{ "security": [{ "apiKey": [] }] }"#).unwrap();
        assert_eq!(header_names(&resolver.resolve(&op)), vec!["X-Key"]);

        let public: Operation = serde_json::from_str(r#"{ "security": [] }"#).unwrap();
        assert_eq!(resolver.resolve(&public), AuthHints::default());
    }

    #[test]
    fn test_undefined_scheme_is_skipped() {
        let doc = openapi3(r#"{}"#, r#"[{ "missing": [] }]"#);
        let hints = AuthResolver::for_document(&doc).resolve(&Operation::default());
        assert_eq!(hints, AuthHints::default());
    }

    #[test]
    fn test_swagger2_table() {
        let doc = swagger2(
            r#"{
                "jwt": { "type": "apiKey", "in": "header", "name": "Authorization" },
                "key": { "type": "apiKey", "in": "header", "name": "X-Key" },
                "basic": { "type": "basic" },
                "oauth": { "type": "oauth2", "flow": "implicit" }
            }"#,
            r#"[{ "key": [] }, { "basic": [] }, { "jwt": [] }, { "oauth": [] }]"#,
        );
        let hints = AuthResolver::for_document(&doc).resolve(&Operation::default());

        assert_eq!(
            hints.headers,
            vec![
                AuthHeader::new("X-Key", "{{apiKey}}"),
                AuthHeader::new("Authorization", "Basic {{credentials}}"),
            ]
        );
        assert_eq!(
            hints.summary,
            "Auth: API Key (header: X-Key), Basic auth, Bearer token, OAuth2"
        );
    }

    #[test]
    fn test_swagger2_oauth2_injects_bearer() {
        let doc = swagger2(
            r#"{ "oauth": { "type": "oauth2", "flow": "password" } }"#,
            r#"[{ "oauth": [] }]"#,
        );
        let hints = AuthResolver::for_document(&doc).resolve(&Operation::default());

        assert_eq!(
            hints.headers,
            vec![AuthHeader::new("Authorization", "Bearer {{token}}")]
        );
        assert_eq!(hints.summary, "Auth: OAuth2");
    }

    #[test]
    fn test_swagger2_query_api_key() {
        let doc = swagger2(
            r#"{ "key": { "type": "apiKey", "in": "query", "name": "api_key" } }"#,
            r#"[{ "key": [] }]"#,
        );
        let hints = AuthResolver::for_document(&doc).resolve(&Operation::default());

        assert!(hints.headers.is_empty());
        assert_eq!(hints.summary, "Auth: API Key (query: api_key)");
    }

    #[test]
    fn test_swagger2_authorization_key_in_query() {
        let doc = swagger2(
            r#"{ "jwt": { "type": "apiKey", "in": "query", "name": "Authorization" } }"#,
            r#"[{ "jwt": [] }]"#,
        );
        let hints = AuthResolver::for_document(&doc).resolve(&Operation::default());

        assert!(hints.headers.is_empty());
        assert_eq!(hints.summary, "Auth: Bearer token");
    }

    #[test]
    fn test_scheme_without_type_contributes_nothing() {
        let doc = openapi3(r#"{ "odd": { "name": "x" } }"#, r#"[{ "odd": [] }]"#);
        let hints = AuthResolver::for_document(&doc).resolve(&Operation::default());
        assert_eq!(hints, AuthHints::default());
    }

    #[test]
    fn test_dedupe_by_name_keeps_first() {
        let items = vec![("a", 1), ("b", 2), ("a", 3)];
        let deduped = dedupe_by_name(items, |item| item.0);
        assert_eq!(deduped, vec![("a", 1), ("b", 2)]);
    }
}
