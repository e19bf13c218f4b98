//! Conversion engine: one node per operation, laid out on a grid

use crate::auth::AuthResolver;
use crate::node::NodeBuilder;
use crate::options::ConvertOptions;
use openapi_n8n_common::HttpRequestNode;
use openapi_n8n_parser::{Dialect, SpecDocument};
use std::cell::Cell;

/// Source of node identifiers
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator {
    /// A fresh identifier; never reused within a conversion
    fn generate(&self) -> String;
}

/// Random v4 UUIDs
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Deterministic `<prefix>-1`, `<prefix>-2`, ... identifiers
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: Cell<u64>,
}

impl SequentialIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: Cell::new(1),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate(&self) -> String {
        let n = self.next.get();
        self.next.set(n + 1);
        format!("{}-{}", self.prefix, n)
    }
}

/// Converts a spec document into HTTP Request nodes
///
/// Dialect handling is limited to building the [`AuthResolver`]; path and
/// method iteration is shared by both dialects.
pub struct Converter<'a> {
    doc: &'a SpecDocument,
    options: ConvertOptions,
    ids: Box<dyn IdGenerator + 'a>,
}

impl<'a> Converter<'a> {
    /// Converter with default options and random UUID identifiers
    pub fn new(doc: &'a SpecDocument) -> Self {
        Self {
            doc,
            options: ConvertOptions::default(),
            ids: Box::new(UuidGenerator),
        }
    }

    pub fn with_options(mut self, options: ConvertOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_id_generator(mut self, ids: impl IdGenerator + 'a) -> Self {
        self.ids = Box::new(ids);
        self
    }

    /// Build every node, paths in document order and methods in
    /// GET, POST, PUT, PATCH, DELETE, OPTIONS, HEAD order
    ///
    /// Each path with at least one operation occupies one grid row; each
    /// operation on it takes the next column.
    pub fn convert(&self, base_url: &str) -> Vec<HttpRequestNode> {
        let dialect = Dialect::detect(self.doc);
        tracing::debug!(%dialect, base_url, "converting spec");

        let resolver = AuthResolver::new(
            dialect,
            dialect.security_schemes(self.doc),
            self.doc.security.as_deref(),
        );
        let builder = NodeBuilder::new(base_url, self.options.auth_header_values);
        let layout = self.options.layout;

        let mut nodes = Vec::with_capacity(self.doc.operation_count());
        let mut row = 0;

        for (path, item) in &self.doc.paths {
            let mut column = 0;

            for (method, operation) in item.operations() {
                let auth = resolver.resolve(operation);
                let node = builder.build(
                    self.ids.generate(),
                    path,
                    method,
                    operation,
                    &auth,
                    layout.position(column, row),
                );
                tracing::debug!(name = %node.name, %method, path = %path, "built node");

                nodes.push(node);
                column += 1;
            }

            if column > 0 {
                row += 1;
            }
        }

        nodes
    }
}

/// Convert with default options and random identifiers
pub fn convert(doc: &SpecDocument, base_url: &str) -> Vec<HttpRequestNode> {
    Converter::new(doc).convert(base_url)
}
