//! n8n node generation from API specs
//!
//! This crate turns a parsed [`SpecDocument`](openapi_n8n_parser::SpecDocument)
//! into n8n HTTP Request nodes and wraps them into an importable workflow:
//! - [`AuthResolver`] derives auth headers and a summary per operation
//! - [`NodeBuilder`] turns one operation into one node
//! - [`Converter`] walks every operation and lays nodes out on a grid
//! - [`assemble`] wraps a selection of nodes into a [`Workflow`]
//!
//! ## Usage
//! ```rust,ignore
//! use openapi_n8n_generator::{assemble, convert};
//! use openapi_n8n_parser::{parse_spec, resolve_base_url};
//!
//! let doc = parse_spec(&text)?;
//! let nodes = convert(&doc, &resolve_base_url(&doc));
//! let json = assemble(nodes).to_json_pretty()?;
//! ```
//!
//! Conversion is pure apart from identifier generation; see [`IdGenerator`].

mod auth;
mod engine;
mod node;
mod options;
mod workflow;

pub use auth::{AuthHeader, AuthHints, AuthResolver};
pub use engine::{convert, Converter, IdGenerator, SequentialIdGenerator, UuidGenerator};
pub use node::NodeBuilder;
pub use options::{
    AuthHeaderValues, ConvertOptions, GridLayout, DEFAULT_COLUMN_SPACING, DEFAULT_ROW_SPACING,
};
pub use workflow::{assemble, select, Selection};

pub use openapi_n8n_common::Workflow;
