//! Field value type for intake forms
//!
//! A form's `fields` bag is schema-free: widgets may write strings, booleans,
//! numbers or nested maps under any name. [`FieldValue`] is the JSON-compatible
//! value stored under each name.
//!
//! ## Wire Format
//!
//! `FieldValue` is untagged, so a persisted form is plain JSON:
//!
//! ```text
//! {"nombre": "Ana", "cemento": true, "cantidadPersonas": 4}
//! ```
//!
//! ## Equality
//!
//! - `Int(1) != Float(1.0)`: different variants are never equal
//! - Integers that fit `i64` are always `Int`; `UInt` only holds larger ones
//! - Float uses IEEE-754 equality: `NaN != NaN`, `-0.0 == 0.0`

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A single value stored in a form's field bag
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// JSON null
    Null,
    /// Boolean (checkboxes)
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// Unsigned integer above `i64::MAX`
    UInt(u64),
    /// 64-bit floating point (IEEE-754)
    Float(f64),
    /// UTF-8 string (text inputs, selects, radios)
    String(String),
    /// Array of values
    Array(Vec<FieldValue>),
    /// Nested map with string keys
    Object(BTreeMap<String, FieldValue>),
}

impl PartialEq for FieldValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FieldValue::Null, FieldValue::Null) => true,
            (FieldValue::Bool(a), FieldValue::Bool(b)) => a == b,
            (FieldValue::Int(a), FieldValue::Int(b)) => a == b,
            (FieldValue::UInt(a), FieldValue::UInt(b)) => a == b,
            (FieldValue::Float(a), FieldValue::Float(b)) => a == b,
            (FieldValue::String(a), FieldValue::String(b)) => a == b,
            (FieldValue::Array(a), FieldValue::Array(b)) => a == b,
            (FieldValue::Object(a), FieldValue::Object(b)) => a == b,
            _ => false,
        }
    }
}

impl FieldValue {
    /// Get the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Null => "Null",
            FieldValue::Bool(_) => "Bool",
            FieldValue::Int(_) => "Int",
            FieldValue::UInt(_) => "UInt",
            FieldValue::Float(_) => "Float",
            FieldValue::String(_) => "String",
            FieldValue::Array(_) => "Array",
            FieldValue::Object(_) => "Object",
        }
    }

    /// Check if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Truthiness as a browser form would judge it.
    ///
    /// `false`, `0`, `NaN`, `""` and `null` are falsy; everything else
    /// (including empty arrays and maps) is truthy. Checklist counts rely on
    /// this so that `"cemento": true` and `"cemento": "on"` both count.
    pub fn is_truthy(&self) -> bool {
        match self {
            FieldValue::Null => false,
            FieldValue::Bool(b) => *b,
            FieldValue::Int(i) => *i != 0,
            FieldValue::UInt(u) => *u != 0,
            FieldValue::Float(f) => *f != 0.0 && !f.is_nan(),
            FieldValue::String(s) => !s.is_empty(),
            FieldValue::Array(_) | FieldValue::Object(_) => true,
        }
    }

    /// Get as bool if this is a Bool value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as i64 if this is an Int value
    pub fn as_int(&self) -> Option<i64> {
        match self {
            FieldValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as u64 if this is a non-negative integer
    pub fn as_uint(&self) -> Option<u64> {
        match self {
            FieldValue::Int(i) => u64::try_from(*i).ok(),
            FieldValue::UInt(u) => Some(*u),
            _ => None,
        }
    }

    /// Get as f64 if this is a Float value
    pub fn as_float(&self) -> Option<f64> {
        match self {
            FieldValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Get as &str if this is a String value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as &[FieldValue] if this is an Array value
    pub fn as_array(&self) -> Option<&[FieldValue]> {
        match self {
            FieldValue::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Get as &BTreeMap if this is an Object value
    pub fn as_object(&self) -> Option<&BTreeMap<String, FieldValue>> {
        match self {
            FieldValue::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Text used when the value is shown, searched or bucketed.
    ///
    /// Strings are returned as-is, whole floats drop their fraction (`2.0`
    /// reads as `"2"`), null is the empty string, and containers render as
    /// compact JSON.
    pub fn display_text(&self) -> String {
        match self {
            FieldValue::Null => String::new(),
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Int(i) => i.to_string(),
            FieldValue::UInt(u) => u.to_string(),
            FieldValue::Float(f) => {
                if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
                    format!("{}", *f as i64)
                } else {
                    f.to_string()
                }
            }
            FieldValue::String(s) => s.clone(),
            FieldValue::Array(_) | FieldValue::Object(_) => {
                serde_json::to_string(self).unwrap_or_default()
            }
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_text())
    }
}

// ============================================================================
// From implementations for ergonomic API usage
// ============================================================================

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<u64> for FieldValue {
    fn from(u: u64) -> Self {
        i64::try_from(u).map_or(FieldValue::UInt(u), FieldValue::Int)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<Vec<FieldValue>> for FieldValue {
    fn from(a: Vec<FieldValue>) -> Self {
        FieldValue::Array(a)
    }
}

impl From<BTreeMap<String, FieldValue>> for FieldValue {
    fn from(o: BTreeMap<String, FieldValue>) -> Self {
        FieldValue::Object(o)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(FieldValue::Null, Into::into)
    }
}
