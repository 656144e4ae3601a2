// Author: Dustin Pilgrim
// License: MIT

use indexmap::IndexMap;

use crate::ast::{GdObject, Value};
use crate::GdError;

fn type_error(expected: &str, value: &Value, code: u32) -> GdError {
    GdError::TypeError {
        message: format!("Expected {}, got {:?}", expected, value),
        hint: None,
        code: Some(code),
    }
}

impl TryFrom<Value> for String {
    type Error = GdError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(s),
            _ => Err(type_error("string", &value, 501)),
        }
    }
}

impl TryFrom<Value> for i64 {
    type Error = GdError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(i) => Ok(i),
            _ => Err(type_error("integer", &value, 502)),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = GdError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        value.as_f64().ok_or_else(|| type_error("number", &value, 503))
    }
}

impl TryFrom<Value> for bool {
    type Error = GdError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(b),
            _ => Err(type_error("boolean", &value, 504)),
        }
    }
}

impl TryFrom<Value> for Vec<Value> {
    type Error = GdError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::List(items) => Ok(items),
            _ => Err(type_error("list", &value, 505)),
        }
    }
}

impl TryFrom<Value> for Vec<String> {
    type Error = GdError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::List(items) => items.into_iter().map(String::try_from).collect(),
            _ => Err(type_error("list of strings", &value, 505)),
        }
    }
}

impl TryFrom<Value> for GdObject {
    type Error = GdError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(obj) | Value::GenericObject(obj) => Ok(obj),
            _ => Err(type_error("object", &value, 506)),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
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

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::List(items.into_iter().map(Value::String).collect())
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(map: IndexMap<String, Value>) -> Self {
        Value::Dict(map)
    }
}

impl From<GdObject> for Value {
    fn from(obj: GdObject) -> Self {
        Value::Object(obj)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_primitives() {
        assert_eq!(String::try_from(Value::from("res://a.png")).unwrap(), "res://a.png");
        assert_eq!(i64::try_from(Value::Int(3)).unwrap(), 3);
        assert_eq!(f64::try_from(Value::Int(3)).unwrap(), 3.0);
        assert!(bool::try_from(Value::Bool(true)).unwrap());
    }

    #[test]
    fn test_try_from_wrong_type_is_type_error() {
        let err = i64::try_from(Value::from("3")).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Type);
    }

    #[test]
    fn test_string_list_conversion() {
        let value = Value::from(vec!["a".to_string(), "b".to_string()]);
        let groups: Vec<String> = value.try_into().unwrap();
        assert_eq!(groups, vec!["a", "b"]);

        let mixed = Value::List(vec![Value::from("a"), Value::Int(1)]);
        assert!(Vec::<String>::try_from(mixed).is_err());
    }

    #[test]
    fn test_option_into_value() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some(2i64)), Value::Int(2));
    }
}
