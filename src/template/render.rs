//! Positional rendering of compiled templates

use std::fmt::Write;

use super::types::{CompiledTemplate, Segment};
use crate::value::Value;

/// Written in place of a slot that has no argument
pub const MISSING_MARKER: &str = "%!v(MISSING)";

/// Prefix of the group appended for surplus arguments
pub const EXTRA_MARKER_PREFIX: &str = "%!(EXTRA ";

impl CompiledTemplate {
    /// Render the template against positional arguments.
    ///
    /// Never fails. Slots without an argument render as [`MISSING_MARKER`];
    /// surplus arguments are appended as `%!(EXTRA type=value, ...)`.
    pub fn render(&self, args: &[Value]) -> String {
        let mut out = String::new();
        let mut next = args.iter();

        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Slot => match next.next() {
                    Some(arg) => {
                        let _ = write!(out, "{}", arg);
                    }
                    None => out.push_str(MISSING_MARKER),
                },
            }
        }

        let extra: Vec<&Value> = next.collect();
        if !extra.is_empty() {
            out.push_str(EXTRA_MARKER_PREFIX);
            for (i, arg) in extra.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                let _ = write!(out, "{}={}", arg.type_name(), arg);
            }
            out.push(')');
        }

        out
    }
}
