//! Normalized security scheme descriptors

use super::Dialect;
use crate::document::RawSecurityScheme;
use indexmap::IndexMap;

/// Scheme name -> descriptor, in registry order
pub type SchemeRegistry = IndexMap<String, SecurityScheme>;

/// Authentication mechanism, interpreted for one dialect
///
/// The same raw `type` can mean different things per dialect: Swagger 2
/// spells HTTP basic as `basic`, while OpenAPI 3 uses `http` + `scheme`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecurityScheme {
    /// API key sent in a header, query string, or cookie
    ApiKey {
        location: Option<String>,
        name: Option<String>,
    },

    /// OpenAPI 3 `http` with scheme `bearer`
    HttpBearer,

    /// OpenAPI 3 `http` with scheme `basic`
    HttpBasic,

    /// OpenAPI 3 `http` with any other scheme (e.g., digest)
    Http { scheme: Option<String> },

    /// Swagger 2 `basic`
    Basic,

    OAuth2,

    OpenIdConnect,

    /// Type not recognized for the dialect; holds the raw type string
    Unknown(String),
}

impl SecurityScheme {
    /// Interpret a raw scheme for the given dialect
    pub fn from_raw(dialect: Dialect, raw: &RawSecurityScheme) -> Self {
        let scheme_type = raw.scheme_type.as_deref().unwrap_or_default();

        match (dialect, scheme_type) {
            (_, "apiKey") => SecurityScheme::ApiKey {
                location: raw.location.clone(),
                name: raw.name.clone(),
            },
            (_, "oauth2") => SecurityScheme::OAuth2,
            (Dialect::OpenApi3, "http") => match raw.scheme.as_deref() {
                Some(s) if s.eq_ignore_ascii_case("bearer") => SecurityScheme::HttpBearer,
                Some(s) if s.eq_ignore_ascii_case("basic") => SecurityScheme::HttpBasic,
                other => SecurityScheme::Http {
                    scheme: other.map(str::to_string),
                },
            },
            (Dialect::OpenApi3, "openIdConnect") => SecurityScheme::OpenIdConnect,
            (Dialect::Swagger2, "basic") => SecurityScheme::Basic,
            (_, other) => SecurityScheme::Unknown(other.to_string()),
        }
    }

    /// Raw `type` string this scheme was declared with
    pub fn kind(&self) -> &str {
        match self {
            SecurityScheme::ApiKey { .. } => "apiKey",
            SecurityScheme::HttpBearer | SecurityScheme::HttpBasic | SecurityScheme::Http { .. } => {
                "http"
            }
            SecurityScheme::Basic => "basic",
            SecurityScheme::OAuth2 => "oauth2",
            SecurityScheme::OpenIdConnect => "openIdConnect",
            SecurityScheme::Unknown(kind) => kind,
        }
    }
}

/// Build a registry from raw schemes
pub(crate) fn registry_from(
    dialect: Dialect,
    raw: &IndexMap<String, RawSecurityScheme>,
) -> SchemeRegistry {
    raw.iter()
        .map(|(name, scheme)| (name.clone(), SecurityScheme::from_raw(dialect, scheme)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(scheme_type: &str) -> RawSecurityScheme {
        RawSecurityScheme {
            scheme_type: Some(scheme_type.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_http_schemes_openapi3() {
        let bearer = RawSecurityScheme {
            scheme: Some("Bearer".to_string()),
            ..raw("http")
        };
        assert_eq!(
            SecurityScheme::from_raw(Dialect::OpenApi3, &bearer),
            SecurityScheme::HttpBearer
        );

        let basic = RawSecurityScheme {
            scheme: Some("basic".to_string()),
            ..raw("http")
        };
        assert_eq!(
            SecurityScheme::from_raw(Dialect::OpenApi3, &basic),
            SecurityScheme::HttpBasic
        );

        let digest = RawSecurityScheme {
            scheme: Some("digest".to_string()),
            ..raw("http")
        };
        let scheme = SecurityScheme::from_raw(Dialect::OpenApi3, &digest);
        assert_eq!(scheme.kind(), "http");
    }

    #[test]
    fn test_basic_depends_on_dialect() {
        assert_eq!(
            SecurityScheme::from_raw(Dialect::Swagger2, &raw("basic")),
            SecurityScheme::Basic
        );
        assert_eq!(
            SecurityScheme::from_raw(Dialect::OpenApi3, &raw("basic")),
            SecurityScheme::Unknown("basic".to_string())
        );
    }

    #[test]
    fn test_openid_only_in_openapi3() {
        assert_eq!(
            SecurityScheme::from_raw(Dialect::OpenApi3, &raw("openIdConnect")),
            SecurityScheme::OpenIdConnect
        );
        assert_eq!(
            SecurityScheme::from_raw(Dialect::Swagger2, &raw("openIdConnect")).kind(),
            "openIdConnect"
        );
    }

    #[test]
    fn test_missing_type() {
        let scheme = SecurityScheme::from_raw(Dialect::OpenApi3, &RawSecurityScheme::default());
        assert_eq!(scheme, SecurityScheme::Unknown(String::new()));
        assert_eq!(scheme.kind(), "");
    }
}
