// Author: Dustin Pilgrim
// License: MIT

use indexmap::IndexMap;
use serde::Serialize;

/// A single value as it appears on the right of `key = value` or `key=value`.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Dict(IndexMap<String, Value>),
    Object(GdObject),        // e.g. Vector2(1, 2)
    GenericObject(GdObject), // e.g. Array[int](1, 2, 3)
}

/// A constructor-call literal: a name and its ordered arguments.
///
/// Every typed wrapper in [`crate::objects`] is a view over one of these, so
/// `GdObject::new("Vector2", vec![1.into(), 2.into()]) == Vector2::new(1.0, 2.0)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GdObject {
    pub name: String,
    pub args: Vec<Value>,
}

impl GdObject {
    pub fn new(name: impl Into<String>, args: Vec<Value>) -> Self {
        Self { name: name.into(), args }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            // unlike f64, nan equals nan
            (Value::Float(a), Value::Float(b)) => a == b || (a.is_nan() && b.is_nan()),
            // 1 == 1.0, so a Vector2 parsed from integer literals equals one built from floats
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => *a as f64 == *b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Dict(a), Value::Dict(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::GenericObject(a), Value::GenericObject(b)) => a == b,
            _ => false,
        }
    }
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        if let Value::Bool(b) = self { Some(*b) } else { None }
    }

    pub fn as_i64(&self) -> Option<i64> {
        if let Value::Int(i) = self { Some(*i) } else { None }
    }

    /// Integers widen to floats.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Value::String(s) = self { Some(s) } else { None }
    }

    pub fn as_list(&self) -> Option<&Vec<Value>> {
        if let Value::List(items) = self { Some(items) } else { None }
    }

    pub fn as_dict(&self) -> Option<&IndexMap<String, Value>> {
        if let Value::Dict(map) = self { Some(map) } else { None }
    }

    /// Both plain and generic objects.
    pub fn as_object(&self) -> Option<&GdObject> {
        match self {
            Value::Object(obj) | Value::GenericObject(obj) => Some(obj),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut GdObject> {
        match self {
            Value::Object(obj) | Value::GenericObject(obj) => Some(obj),
            _ => None,
        }
    }
}
