//! Spec loading from raw JSON or YAML text

use super::types::SpecDocument;
use openapi_n8n_common::{ConverterError, Result};
use std::fs;
use std::path::Path;

/// Top-level fields checked before typed deserialization
const PATHS_FIELD: &str = "paths";
const OPENAPI_FIELD: &str = "openapi";
const SWAGGER_FIELD: &str = "swagger";

/// Parse raw spec text into a [`SpecDocument`]
///
/// JSON is attempted first, then YAML. The only structural checks are a
/// `paths` field and an `openapi` or `swagger` version marker.
///
/// # Example
/// ```rust,ignore
/// let doc = parse_spec(r#"{"openapi": "3.0.0", "paths": {}}"#)?;
/// ```
pub fn parse_spec(raw: &str) -> Result<SpecDocument> {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(value) => {
            tracing::debug!("spec text parsed as JSON");
            check_structure(&value)?;
            serde_json::from_value(value).map_err(|e| {
                ConverterError::Parse(format!("Invalid OpenAPI spec: {}", e))
            })
        }
        Err(json_err) => {
            let mut value = serde_yaml::from_str::<serde_yaml::Value>(raw).map_err(|yaml_err| {
                tracing::debug!(error = %yaml_err, "spec text is not valid YAML either");
                ConverterError::Parse(format!(
                    "Invalid OpenAPI spec: not valid JSON or YAML ({})",
                    json_err
                ))
            })?;
            tracing::debug!("spec text parsed as YAML");
            if let Err(e) = value.apply_merge() {
                tracing::warn!(error = %e, "could not apply YAML merge keys");
            }
            check_structure(&value)?;
            serde_yaml::from_value(value).map_err(|e| {
                ConverterError::Parse(format!("Invalid OpenAPI spec: {}", e))
            })
        }
    }
}

/// Read a spec file and parse it with [`parse_spec`]
pub fn load_spec_file<P: AsRef<Path>>(path: P) -> Result<SpecDocument> {
    let content = fs::read_to_string(path.as_ref()).map_err(|e| {
        ConverterError::Parse(format!(
            "Failed to read spec file {}: {}",
            path.as_ref().display(),
            e
        ))
    })?;

    parse_spec(&content)
}

/// Minimal view of a parsed tree, shared by the JSON and YAML paths
trait Tree {
    /// True when the top-level field exists with a non-null, non-empty value
    fn has_field(&self, name: &str) -> bool;
}

impl Tree for serde_json::Value {
    fn has_field(&self, name: &str) -> bool {
        match self.get(name) {
            None | Some(serde_json::Value::Null) => false,
            Some(serde_json::Value::String(s)) => !s.is_empty(),
            Some(_) => true,
        }
    }
}

impl Tree for serde_yaml::Value {
    fn has_field(&self, name: &str) -> bool {
        match self.get(name) {
            None | Some(serde_yaml::Value::Null) => false,
            Some(serde_yaml::Value::String(s)) => !s.is_empty(),
            Some(_) => true,
        }
    }
}

fn check_structure<T: Tree>(tree: &T) -> Result<()> {
    if !tree.has_field(PATHS_FIELD) {
        return Err(ConverterError::Parse(
            "Invalid OpenAPI spec: missing \"paths\"".to_string(),
        ));
    }

    if !tree.has_field(OPENAPI_FIELD) && !tree.has_field(SWAGGER_FIELD) {
        return Err(ConverterError::Parse(
            "Invalid OpenAPI spec: missing \"openapi\" or \"swagger\" version".to_string(),
        ));
    }

    Ok(())
}
