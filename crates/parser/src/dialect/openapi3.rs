//! OpenAPI 3.x extraction

use super::security::{registry_from, SchemeRegistry};
use super::Dialect;
use crate::document::{Server, SpecDocument};

/// First declared server; an entry without a url counts as no base URL
pub(super) fn base_url(doc: &SpecDocument) -> String {
    doc.servers
        .first()
        .map(|server| server.url.clone())
        .unwrap_or_default()
}

pub(super) fn servers(doc: &SpecDocument) -> Vec<Server> {
    doc.servers
        .iter()
        .filter(|server| !server.url.is_empty())
        .cloned()
        .collect()
}

pub(super) fn security_schemes(doc: &SpecDocument) -> SchemeRegistry {
    doc.components
        .as_ref()
        .map(|components| registry_from(Dialect::OpenApi3, &components.security_schemes))
        .unwrap_or_default()
}
