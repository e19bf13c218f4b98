//! API description documents (OpenAPI 3.x and Swagger 2.0)
//!
//! ## Usage
//! ```rust,ignore
//! use openapi_n8n_parser::{load_spec_file, parse_spec};
//!
//! let doc = load_spec_file("petstore.yaml")?;
//! let doc = parse_spec(&text)?;
//! ```

mod lenient;
mod loader;
mod types;

pub use loader::{load_spec_file, parse_spec};
pub use types::*;
