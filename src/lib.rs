//! Templated, structured errors for HTTP APIs.
//!
//! Define an error kind once (status code, reason, message template with
//! `%{name}` placeholders) and instantiate it with positional arguments:
//!
//! ```ignore
//! use ara_http_errors::ErrorFactory;
//!
//! let invalid_format = ErrorFactory::must_new(
//!     400,
//!     "FormatError",
//!     "Expected format is '[a-z]*', actual %{format}",
//! );
//!
//! let err = invalid_format.new_error(["a0"]);
//! // {"reason":"FormatError","message":"Expected format is '[a-z]*', actual a0","data":{"format":"a0"}}
//! ```

// Core
pub mod error;
pub mod factory;
pub mod template;
pub mod value;

// Configuration-driven catalog
pub mod catalog;
pub mod config;

// Supporting modules
pub mod metrics;

pub use catalog::{CatalogError, ErrorCatalog};
pub use error::ApiError;
pub use factory::ErrorFactory;
pub use template::{compile, CompiledTemplate, TemplateError};
pub use value::Value;
