//! Error factories.
//!
//! A factory is built once per error kind (status code, reason, message
//! template) and then produces fresh [`ApiError`] values on every call.
//!
//! # Example
//!
//! ```ignore
//! let factory = ErrorFactory::new(
//!     400,
//!     "FormatError",
//!     "Expected format is '[a-z]*', actual %{format}",
//! )?;
//!
//! let err = factory.new_error(["a0"]);
//! assert_eq!(err.message, "Expected format is '[a-z]*', actual a0");
//! ```

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::ApiError;
use crate::metrics::ErrorMetrics;
use crate::template::{compile, CompiledTemplate, TemplateResult};
use crate::value::Value;

/// Key prefix for data entries of surplus arguments
pub const EXTRA_KEY_PREFIX: &str = "(EXTRA)";

/// Produces structured errors of one kind.
///
/// Immutable after construction; clones share the compiled template.
#[derive(Debug, Clone)]
pub struct ErrorFactory {
    code: u16,
    reason: String,
    template: Arc<CompiledTemplate>,
}

impl ErrorFactory {
    /// Create a factory, compiling `template`
    pub fn new(code: u16, reason: impl Into<String>, template: &str) -> TemplateResult<Self> {
        let reason = reason.into();
        let template = compile(template)?;

        tracing::debug!(
            code,
            reason = %reason,
            placeholders = template.slot_count(),
            "Error factory compiled"
        );

        Ok(Self {
            code,
            reason,
            template: Arc::new(template),
        })
    }

    /// Create a factory from a template known to be valid.
    ///
    /// # Panics
    ///
    /// Panics if `template` is malformed.
    pub fn must_new(code: u16, reason: impl Into<String>, template: &str) -> Self {
        match Self::new(code, reason, template) {
            Ok(factory) => factory,
            Err(e) => panic!("{}", e),
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn template(&self) -> &CompiledTemplate {
        &self.template
    }

    /// Build an error from positional arguments.
    ///
    /// Never fails: a wrong argument count shows up as markers in the message.
    pub fn new_error<I>(&self, args: I) -> ApiError
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let args: Vec<Value> = args.into_iter().map(Into::into).collect();
        self.build(args)
    }

    fn build(&self, args: Vec<Value>) -> ApiError {
        let expected = self.template.slot_count();
        match args.len().cmp(&expected) {
            Ordering::Less => {
                tracing::warn!(
                    reason = %self.reason,
                    expected,
                    actual = args.len(),
                    "Missing arguments for error message"
                );
                ErrorMetrics::record_missing(&self.reason);
            }
            Ordering::Greater => {
                tracing::warn!(
                    reason = %self.reason,
                    expected,
                    actual = args.len(),
                    "Extra arguments for error message"
                );
                ErrorMetrics::record_extra(&self.reason);
            }
            Ordering::Equal => {}
        }
        ErrorMetrics::record_created(&self.reason);

        let message = self.template.render(&args);
        let data = build_data(self.template.var_names(), args);

        ApiError {
            code: self.code,
            reason: self.reason.clone(),
            message,
            data,
        }
    }
}

/// Pair names with arguments; later duplicates overwrite earlier ones and
/// surplus arguments get `(EXTRA)<value>` keys.
fn build_data(var_names: &[String], args: Vec<Value>) -> BTreeMap<String, Value> {
    let mut data = BTreeMap::new();
    for (i, arg) in args.into_iter().enumerate() {
        let key = match var_names.get(i) {
            Some(name) => name.clone(),
            None => format!("{}{}", EXTRA_KEY_PREFIX, arg),
        };
        data.insert(key, arg);
    }
    data
}

/// Build an error from heterogeneous arguments.
///
/// ```ignore
/// let err = new_error!(factory, "a0", 42, true);
/// ```
#[macro_export]
macro_rules! new_error {
    ($factory:expr $(, $arg:expr)* $(,)?) => {{
        let args: ::std::vec::Vec<$crate::value::Value> =
            ::std::vec![$($crate::value::Value::from($arg)),*];
        $factory.new_error(args)
    }};
}
