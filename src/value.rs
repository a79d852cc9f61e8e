//! Argument values supplied to an error factory.
//!
//! Every argument passed to [`ErrorFactory::new_error`](crate::factory::ErrorFactory::new_error)
//! is converted into a [`Value`]. The same value is used twice: its canonical
//! string form fills a placeholder in the rendered message, and the value itself
//! is stored in the error's `data` map for JSON serialization.
//!
//! # Stringification
//!
//! | Variant | Rendered as |
//! |---------|-------------|
//! | `String` | the string, verbatim |
//! | `Int` / `Uint` | decimal digits |
//! | `Float` | `f64` `Display`: plain decimal, never an exponent, fewest digits that round-trip (`1.5`, `3`, `0.0000001`, `NaN`) |
//! | `Bool` | `true` / `false` |
//! | `Null` | `<nil>` |
//! | `Json` | compact JSON, object keys sorted at every level |

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single positional argument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    String(String),
    /// Arrays and objects
    Json(serde_json::Value),
}

impl Value {
    /// Short type label used by the extra-argument marker
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "nil",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Uint(_) => "uint",
            Value::Float(_) => "float64",
            Value::String(_) => "string",
            Value::Json(serde_json::Value::Array(_)) => "array",
            Value::Json(serde_json::Value::Object(_)) => "object",
            Value::Json(_) => "json",
        }
    }

    /// Convert into a plain `serde_json::Value`
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(n) => serde_json::Value::from(*n),
            Value::Uint(n) => serde_json::Value::from(*n),
            // Non-finite floats have no JSON form and become null
            Value::Float(f) => serde_json::Value::from(*f),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Json(v) => v.clone(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("<nil>"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Uint(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", x),
            Value::String(s) => f.write_str(s),
            Value::Json(v) => write_sorted_json(f, v),
        }
    }
}

/// Compact JSON with object keys sorted, whatever map order `serde_json` keeps
fn write_sorted_json(f: &mut fmt::Formatter<'_>, value: &serde_json::Value) -> fmt::Result {
    match value {
        serde_json::Value::Array(items) => {
            f.write_str("[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write_sorted_json(f, item)?;
            }
            f.write_str("]")
        }
        serde_json::Value::Object(map) => {
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));

            f.write_str("{")?;
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{}:", serde_json::Value::String(key.clone()))?;
                write_sorted_json(f, item)?;
            }
            f.write_str("}")
        }
        scalar => write!(f, "{}", scalar),
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&String> for Value {
    fn from(s: &String) -> Self {
        Value::String(s.clone())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(n: $t) -> Self {
                Value::Int(n as i64)
            }
        })*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(impl From<$t> for Value {
            fn from(n: $t) -> Self {
                Value::Uint(n as u64)
            }
        })*
    };
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for Value {
    fn from(x: f32) -> Self {
        Value::Float(x as f64)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or(Value::Null)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Value::Uint(u)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            other => Value::Json(other),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(v: Value) -> Self {
        v.to_json()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_scalars() {
        assert_eq!(Value::from("a0").to_string(), "a0");
        assert_eq!(Value::from(-42).to_string(), "-42");
        assert_eq!(Value::from(7u8).to_string(), "7");
        assert_eq!(Value::from(1.5).to_string(), "1.5");
        assert_eq!(Value::from(3.0).to_string(), "3");
        assert_eq!(Value::from(true).to_string(), "true");
        assert_eq!(Value::Null.to_string(), "<nil>");
    }

    #[test]
    fn test_display_structured_is_compact_json() {
        let v = Value::from(json!({"b": 1, "a": [1, 2]}));
        assert_eq!(v.to_string(), r#"{"a":[1,2],"b":1}"#);
    }

    #[test]
    fn test_display_float_magnitudes() {
        assert_eq!(Value::from(1e21).to_string(), "1000000000000000000000");
        assert_eq!(Value::from(1e-7).to_string(), "0.0000001");
        assert_eq!(Value::from(0.1 + 0.2).to_string(), "0.30000000000000004");
        assert_eq!(Value::from(f64::NAN).to_string(), "NaN");
        assert_eq!(Value::from(f64::INFINITY).to_string(), "inf");
    }

    #[test]
    fn test_display_structured_sorts_nested_keys() {
        let v = Value::from(json!({"z": {"y": 1, "x": [{"b": true, "a": null}]}, "m": "q\"t"}));
        assert_eq!(
            v.to_string(),
            r#"{"m":"q\"t","z":{"x":[{"a":null,"b":true}],"y":1}}"#
        );
    }

    #[test]
    fn test_from_json_normalises_scalars() {
        assert_eq!(Value::from(json!("x")), Value::String("x".to_string()));
        assert_eq!(Value::from(json!(5)), Value::Int(5));
        assert_eq!(Value::from(json!(u64::MAX)), Value::Uint(u64::MAX));
        assert_eq!(Value::from(json!(0.25)), Value::Float(0.25));
        assert_eq!(Value::from(json!(null)), Value::Null);
        assert!(matches!(Value::from(json!([1])), Value::Json(_)));
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(Some("x")), Value::String("x".to_string()));
        assert_eq!(Value::from(None::<i32>), Value::Null);
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Value::from("s").type_name(), "string");
        assert_eq!(Value::from(1).type_name(), "int");
        assert_eq!(Value::from(1u32).type_name(), "uint");
        assert_eq!(Value::from(1.0).type_name(), "float64");
        assert_eq!(Value::from(false).type_name(), "bool");
        assert_eq!(Value::Null.type_name(), "nil");
        assert_eq!(Value::from(json!([])).type_name(), "array");
        assert_eq!(Value::from(json!({})).type_name(), "object");
    }

    #[test]
    fn test_serializes_untagged() {
        let values = vec![
            Value::from("a"),
            Value::from(1),
            Value::from(true),
            Value::Null,
            Value::from(json!({"k": "v"})),
        ];
        let encoded = serde_json::to_value(&values).unwrap();
        assert_eq!(encoded, json!(["a", 1, true, null, {"k": "v"}]));
    }
}
