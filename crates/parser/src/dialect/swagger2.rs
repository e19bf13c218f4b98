//! Swagger 2.0 extraction

use super::security::{registry_from, SchemeRegistry};
use super::Dialect;
use crate::document::{Server, SpecDocument};

/// Transfer scheme used when `schemes` is absent
const DEFAULT_SCHEME: &str = "https";

pub(super) fn base_url(doc: &SpecDocument) -> String {
    let Some(host) = doc.host.as_deref().filter(|h| !h.is_empty()) else {
        return String::new();
    };

    let scheme = doc
        .schemes
        .first()
        .map(String::as_str)
        .unwrap_or(DEFAULT_SCHEME);
    let base_path = doc.base_path.as_deref().unwrap_or_default();

    format!("{}://{}{}", scheme, host, base_path)
}

pub(super) fn servers(doc: &SpecDocument) -> Vec<Server> {
    let url = base_url(doc);
    if url.is_empty() {
        return Vec::new();
    }

    vec![Server {
        url,
        description: None,
    }]
}

pub(super) fn security_schemes(doc: &SpecDocument) -> SchemeRegistry {
    registry_from(Dialect::Swagger2, &doc.security_definitions)
}
