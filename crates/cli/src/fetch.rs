//! Remote spec retrieval

use openapi_n8n_common::{ConverterError, Result};
use reqwest::header::ACCEPT;
use url::Url;

/// Content types a spec endpoint may answer with
const SPEC_ACCEPT: &str = "application/json, application/yaml, text/yaml, */*";

/// True when the source looks like an http(s) URL rather than a path
pub fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// GET a spec document and return its body unchanged
pub fn fetch(url: &str) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(concat!("openapi-n8n/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| ConverterError::Fetch(e.to_string()))?;

    let response = client
        .get(url)
        .header(ACCEPT, SPEC_ACCEPT)
        .send()
        .map_err(|e| ConverterError::Fetch(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ConverterError::Fetch(format!(
            "Failed to fetch: {} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or_default()
        )));
    }

    response
        .text()
        .map_err(|e| ConverterError::Fetch(e.to_string()))
}

/// `scheme://host[:port]` of the URL a spec was fetched from, or an empty
/// string when it cannot be derived
pub fn origin_of(source_url: &str) -> String {
    match Url::parse(source_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => url.origin().ascii_serialization(),
        _ => String::new(),
    }
}
