//! Spec loading for openapi-n8n
//!
//! This crate turns raw API description text into a [`SpecDocument`] and
//! normalizes the two supported dialects behind [`Dialect`].
//!
//! ## Parsing Strategy
//!
//! Raw text is tried as JSON first and then as YAML. Only three structural
//! checks are made:
//! - the text parses at all
//! - a `paths` field exists
//! - an `openapi` or `swagger` version marker exists
//!
//! Everything else degrades gracefully: missing servers, schemes, or
//! parameters become empty values rather than errors.

pub mod dialect;
pub mod document;

pub use dialect::{
    detect_dialect, resolve_base_url, resolve_security_schemes, Dialect, SchemeRegistry,
    SecurityScheme,
};
pub use document::{
    load_spec_file, parse_spec, Operation, Parameter, ParameterLocation, PathItem,
    RawSecurityScheme, SecurityRequirement, Server, SpecDocument,
};
