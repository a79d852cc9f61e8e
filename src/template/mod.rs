//! Error message templates.
//!
//! This module provides:
//! - A compiler for `%{name}` placeholder templates (`%%` escapes a literal percent)
//! - The compiled, immutable template form with its placeholder names
//! - Positional rendering with visible markers for missing and extra arguments
//!
//! # Example
//!
//! ```ignore
//! let template = compile("Expected format is '[a-z]*', actual %{format}")?;
//!
//! assert_eq!(template.var_names(), ["format"]);
//! assert_eq!(template.format(), "Expected format is '[a-z]*', actual %v");
//!
//! let message = template.render(&["a0".into()]);
//! ```

mod compiler;
mod render;
mod types;

pub use compiler::compile;
pub use render::{EXTRA_MARKER_PREFIX, MISSING_MARKER};
pub use types::{CompiledTemplate, Segment, TemplateError, TemplateResult};
