//! Single-pass template compiler.
//!
//! Scans the raw template one char at a time through three states:
//!
//! | State | `%` | `{` | `}` | other |
//! |-------|-----|-----|-----|-------|
//! | `Normal` | -> `Sign` | literal | literal | literal |
//! | `Sign` | literal `%`, -> `Normal` | -> `Placeholder` | `%` + char, -> `Normal` | `%` + char, -> `Normal` |
//! | `Placeholder` | error | name char | close slot, -> `Normal` | name char |
//!
//! At end of input a pending `Sign` becomes a literal `%`; an open placeholder
//! is an error.

use super::types::{CompiledTemplate, Segment, TemplateError, TemplateResult};

#[derive(Debug)]
enum ScanState {
    Normal,
    /// Previous char was an unconsumed `%`
    Sign,
    /// Inside `%{ ... }`; `start` is the offset of the opening `%`
    Placeholder { start: usize, name: String },
}

#[derive(Default)]
struct Builder {
    segments: Vec<Segment>,
    var_names: Vec<String>,
    literal: String,
}

impl Builder {
    fn flush_literal(&mut self) {
        if !self.literal.is_empty() {
            self.segments
                .push(Segment::Literal(std::mem::take(&mut self.literal)));
        }
    }

    fn push_slot(&mut self, name: String) {
        self.flush_literal();
        self.segments.push(Segment::Slot);
        self.var_names.push(name);
    }

    fn finish(mut self) -> CompiledTemplate {
        self.flush_literal();
        CompiledTemplate {
            segments: self.segments,
            var_names: self.var_names,
        }
    }
}

/// Compile a raw `%{name}` template.
///
/// A placeholder still open at end of input is rejected with
/// [`TemplateError::UnclosedPlaceholder`] instead of dropping the trailing
/// text, so `"x %{name"` is an error rather than a template rendering `x %`.
pub fn compile(raw: &str) -> TemplateResult<CompiledTemplate> {
    let mut builder = Builder::default();
    let mut state = ScanState::Normal;

    for (idx, c) in raw.chars().enumerate() {
        state = match (state, c) {
            (ScanState::Normal, '%') => ScanState::Sign,
            (ScanState::Normal, c) => {
                builder.literal.push(c);
                ScanState::Normal
            }
            (ScanState::Sign, '%') => {
                builder.literal.push('%');
                ScanState::Normal
            }
            (ScanState::Sign, '{') => ScanState::Placeholder {
                start: idx - 1,
                name: String::new(),
            },
            (ScanState::Sign, c) => {
                builder.literal.push('%');
                builder.literal.push(c);
                ScanState::Normal
            }
            (ScanState::Placeholder { .. }, '%') => {
                return Err(TemplateError::PercentInPlaceholder(idx));
            }
            (ScanState::Placeholder { start, name }, '}') => {
                let name = name.trim();
                if name.is_empty() {
                    return Err(TemplateError::EmptyParamName(start));
                }
                builder.push_slot(name.to_string());
                ScanState::Normal
            }
            (ScanState::Placeholder { start, mut name }, c) => {
                name.push(c);
                ScanState::Placeholder { start, name }
            }
        };
    }

    match state {
        ScanState::Normal => {}
        ScanState::Sign => builder.literal.push('%'),
        ScanState::Placeholder { start, .. } => {
            return Err(TemplateError::UnclosedPlaceholder(start));
        }
    }

    Ok(builder.finish())
}
