//! Core value types that rules are evaluated against.
//!
//! Properties are read off an instance as [`Value`]s. The set of shapes is
//! closed, which keeps rule predicates to a single exhaustive `match` and
//! lets serde echo values back inside validation errors.
//!
//! A property that is *missing* is represented one level up, as `None` in an
//! `Option<Value>`; [`Value::Null`] is an explicit null and is a present value.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::any::TypeId;
use std::fmt;

/// A dynamically typed property value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Value {
    /// Explicit null
    Null,
    /// Boolean value
    Boolean(bool),
    /// 64-bit signed integer
    Integer(i64),
    /// 64-bit floating point number
    Float(f64),
    /// UTF-8 string
    String(String),
    /// Ordered list of values
    Array(Vec<Value>),
    /// Insertion-ordered key-value map
    Map(IndexMap<String, Value>),
}

/// The shape of a [`Value`], used for type checks and diagnostics.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Null,
    Boolean,
    Integer,
    Float,
    String,
    Array,
    Map,
}

// ============================================================================
// Value Implementation
// ============================================================================

impl Value {
    /// Get the kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Integer(_) => ValueKind::Integer,
            Value::Float(_) => ValueKind::Float,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Map(_) => ValueKind::Map,
        }
    }

    /// Try to get this value as an integer.
    pub fn as_integer(&self) -> Option<i64> {
        if let Value::Integer(i) = self {
            Some(*i)
        } else {
            None
        }
    }

    /// Try to get this value as a float.
    /// Integers are automatically converted to floats.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        if let Value::String(s) = self {
            Some(s)
        } else {
            None
        }
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        if let Value::Boolean(b) = self {
            Some(*b)
        } else {
            None
        }
    }

    /// Try to get this value as an array reference.
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        if let Value::Array(arr) = self {
            Some(arr)
        } else {
            None
        }
    }

    /// Try to get this value as a map reference.
    pub fn as_map(&self) -> Option<&IndexMap<String, Value>> {
        if let Value::Map(map) = self {
            Some(map)
        } else {
            None
        }
    }

    /// Check if this value is an explicit null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if this value is numeric (integer or float).
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Integer(_) | Value::Float(_))
    }

    /// Coerce this value to the string a pattern is matched against.
    ///
    /// Strings pass through unchanged. Numbers use their shortest form
    /// (`5`, `1.5`, `NaN`, `Infinity`), arrays join their elements with
    /// commas, and maps collapse to `[object Object]`, so only string-like
    /// values are expected to satisfy a format pattern.
    pub fn coerce_to_string(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Boolean(b) => b.to_string(),
            Value::Integer(i) => i.to_string(),
            Value::Float(f) => format_float(*f),
            Value::String(s) => s.clone(),
            Value::Array(arr) => arr
                .iter()
                .map(|v| match v {
                    Value::Null => String::new(),
                    other => other.coerce_to_string(),
                })
                .collect::<Vec<_>>()
                .join(","),
            Value::Map(_) => "[object Object]".to_string(),
        }
    }
}

fn format_float(f: f64) -> String {
    if f.is_nan() {
        "NaN".to_string()
    } else if f.is_infinite() {
        if f > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else {
        // `{}` on f64 already prints 1.0 as "1"
        format!("{}", f)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(fl) => write!(f, "{}", format_float(*fl)),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Array(arr) => write!(f, "Array[{}]", arr.len()),
            Value::Map(map) => write!(f, "Map{{{} entries}}", map.len()),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Boolean => "boolean",
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Map => "map",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Conversions
// ============================================================================

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::Integer(i64::from(v))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::Array(v.into_iter().map(Into::into).collect())
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(v: IndexMap<String, Value>) -> Self {
        Value::Map(v)
    }
}

// ============================================================================
// Validatable types
// ============================================================================

/// A type whose properties can be validated.
///
/// Rules are bound to a type once (see [`crate::registry::Registry::schema`])
/// and every instance of it is validated against the same bindings. The
/// implementation only needs to expose property values by name; returning
/// `None` marks the property as missing.
///
/// ```rust,ignore
/// struct User {
///     email: Option<String>,
/// }
///
/// impl Validatable for User {
///     fn property(&self, name: &str) -> Option<Value> {
///         match name {
///             "email" => self.email.clone().map(Value::from),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Validatable: 'static {
    /// Read the current value of a property, or `None` if it is missing.
    fn property(&self, name: &str) -> Option<Value>;
}

/// Identity of a validatable type, the key for its validation metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassId {
    type_id: TypeId,
    name: &'static str,
}

impl ClassId {
    /// Get the class identity of `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Fully qualified type name, for diagnostics.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Short type name without the module path.
    pub fn short_name(&self) -> &'static str {
        self.name.rsplit("::").next().unwrap_or(self.name)
    }

    pub(crate) fn type_id(&self) -> TypeId {
        self.type_id
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}
