//! Compiled template types and error definitions

use std::str::FromStr;

use thiserror::Error;

/// Malformed template error.
///
/// Offsets are char indices into the raw template text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("Malformed template: `%` inside `{{}}` is not allowed (at char {0})")]
    PercentInPlaceholder(usize),

    #[error("Malformed template: param name should not be empty (at char {0})")]
    EmptyParamName(usize),

    #[error("Malformed template: placeholder opened at char {0} is never closed")]
    UnclosedPlaceholder(usize),
}

/// Result type for template operations
pub type TemplateResult<T> = Result<T, TemplateError>;

/// One piece of a compiled template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text copied to the output as-is (escapes already resolved)
    Literal(String),
    /// Rendering slot filled by the next positional argument
    Slot,
}

/// A parsed, render-ready template.
///
/// Holds the segment list and the placeholder names in occurrence order.
/// The number of [`Segment::Slot`] entries always equals `var_names().len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledTemplate {
    pub(super) segments: Vec<Segment>,
    pub(super) var_names: Vec<String>,
}

impl CompiledTemplate {
    /// Placeholder names, one per occurrence
    pub fn var_names(&self) -> &[String] {
        &self.var_names
    }

    /// Number of rendering slots
    pub fn slot_count(&self) -> usize {
        self.var_names.len()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Positional format string: `%v` per slot, literal `%` escaped as `%%`.
    pub fn format(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => {
                    for c in text.chars() {
                        if c == '%' {
                            out.push_str("%%");
                        } else {
                            out.push(c);
                        }
                    }
                }
                Segment::Slot => out.push_str("%v"),
            }
        }
        out
    }
}

impl FromStr for CompiledTemplate {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        super::compile(s)
    }
}
