//! @module "Annotation Value"
//! @summary "Typed value produced for a single @tag"
//! @layer model
//!
//! Serializes adjacently tagged (`{"type": "int", "value": 34}`) so a value
//! survives a trip through the cache file unchanged: a string list, a JSON
//! array and a run of repeated tags all look alike as plain JSON.
//! Use [`AnnotationValue::to_json`] for the natural, untagged shape.

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum AnnotationValue {
    Bool(bool),
    Null,
    Int(i64),
    Float(f64),
    String(String),
    /// One-dimensional `[a, b, c]` list
    List(Vec<String>),
    /// Decoded `{...}` JSON structure
    Json(Value),
    /// Every value seen for a tag that occurred more than once
    Repeated(Vec<AnnotationValue>),
}

impl AnnotationValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            AnnotationValue::Bool(_) => "bool",
            AnnotationValue::Null => "null",
            AnnotationValue::Int(_) => "int",
            AnnotationValue::Float(_) => "float",
            AnnotationValue::String(_) => "string",
            AnnotationValue::List(_) => "list",
            AnnotationValue::Json(_) => "json",
            AnnotationValue::Repeated(_) => "repeated",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, AnnotationValue::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AnnotationValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            AnnotationValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Floats, and integers widened to `f64`
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            AnnotationValue::Float(f) => Some(*f),
            AnnotationValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AnnotationValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            AnnotationValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            AnnotationValue::Json(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_repeated(&self) -> Option<&[AnnotationValue]> {
        match self {
            AnnotationValue::Repeated(values) => Some(values),
            _ => None,
        }
    }

    /// Plain JSON rendering: lists and repeats become arrays, JSON is inlined.
    pub fn to_json(&self) -> Value {
        match self {
            AnnotationValue::Bool(b) => Value::Bool(*b),
            AnnotationValue::Null => Value::Null,
            AnnotationValue::Int(i) => Value::from(*i),
            AnnotationValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            AnnotationValue::String(s) => Value::String(s.clone()),
            AnnotationValue::List(items) => {
                Value::Array(items.iter().cloned().map(Value::String).collect())
            }
            AnnotationValue::Json(v) => v.clone(),
            AnnotationValue::Repeated(values) => {
                Value::Array(values.iter().map(AnnotationValue::to_json).collect())
            }
        }
    }
}

impl From<bool> for AnnotationValue {
    fn from(b: bool) -> Self {
        AnnotationValue::Bool(b)
    }
}

impl From<i64> for AnnotationValue {
    fn from(i: i64) -> Self {
        AnnotationValue::Int(i)
    }
}

impl From<f64> for AnnotationValue {
    fn from(f: f64) -> Self {
        AnnotationValue::Float(f)
    }
}

impl From<&str> for AnnotationValue {
    fn from(s: &str) -> Self {
        AnnotationValue::String(s.to_string())
    }
}

impl From<String> for AnnotationValue {
    fn from(s: String) -> Self {
        AnnotationValue::String(s)
    }
}

impl From<Vec<String>> for AnnotationValue {
    fn from(items: Vec<String>) -> Self {
        AnnotationValue::List(items)
    }
}

impl From<Value> for AnnotationValue {
    fn from(v: Value) -> Self {
        AnnotationValue::Json(v)
    }
}
