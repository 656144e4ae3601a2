// Author: Dustin Pilgrim
// License: MIT

//! Canonical text output.
//!
//! Every `Display` impl here is the inverse of the parser: feeding the output
//! back through [`parse_value`](crate::parse_value) or
//! [`parse_section`](crate::parse_section) yields an equal structure, and
//! printing that again yields the same text.

use std::fmt;

use crate::ast::{GdObject, Value};
use crate::objects::{Color, ExtResource, NodePath, SubResource, TypedObject, Vector2, Vector3};
use crate::section::{
    ExtResourceSection, GdSection, NodeSection, ResourceSection, Section, SectionHeader, SubResourceSection,
};
use crate::GdError;

/// Canonical text of a value, object, header or section.
///
/// # Examples
/// ```
/// use godot_parser::{stringify, objects::Vector2, section::NodeSection};
///
/// assert_eq!(stringify(&Vector2::new(1.0, 2.5)), "Vector2(1.0, 2.5)");
///
/// let node = NodeSection::new("Player", Some("Sprite2D"), Some("."));
/// assert_eq!(stringify(&node), "[node name=\"Player\" type=\"Sprite2D\" parent=\".\"]");
/// ```
pub fn stringify<T: fmt::Display + ?Sized>(item: &T) -> String {
    item.to_string()
}

/// Shortest decimal that parses back to the same float; always carries a
/// `.` or an exponent so it re-parses as a float, not an integer.
fn format_float(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value.is_infinite() {
        if value.is_sign_negative() { "-inf" } else { "inf" }.to_string()
    } else {
        format!("{:?}", value)
    }
}

/// Only `\` and `"` are escaped; newlines stay literal.
fn write_quoted(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in s.chars() {
        match c {
            '\\' => f.write_str("\\\\")?,
            '"' => f.write_str("\\\"")?,
            _ => write!(f, "{}", c)?,
        }
    }
    f.write_str("\"")
}

fn write_joined(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => f.write_str(&format_float(*x)),
            Value::String(s) => write_quoted(f, s),
            Value::List(items) => {
                f.write_str("[")?;
                write_joined(f, items)?;
                f.write_str("]")
            }
            Value::Dict(map) => {
                if map.is_empty() {
                    return f.write_str("{}");
                }
                f.write_str("{ ")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write_quoted(f, key)?;
                    write!(f, ": {}", value)?;
                }
                f.write_str(" }")
            }
            Value::Object(obj) | Value::GenericObject(obj) => write!(f, "{}", obj),
        }
    }
}

impl fmt::Display for GdObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        write_joined(f, &self.args)?;
        f.write_str(")")
    }
}

impl fmt::Display for SectionHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}", self.title)?;
        for (key, value) in self.attributes() {
            write!(f, " {}={}", key, value)?;
        }
        f.write_str("]")
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header)?;
        for (key, value) in self.properties() {
            write!(f, "\n{} = {}", key, value)?;
        }
        Ok(())
    }
}

impl fmt::Display for GdSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.section())
    }
}

impl fmt::Display for TypedObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_object())
    }
}

macro_rules! display_as {
    ($target:ident: $($wrapper:ident),+) => {
        $(
            impl fmt::Display for $wrapper {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    let inner: &$target = self;
                    write!(f, "{}", inner)
                }
            }
        )+
    };
}

display_as!(Section: ExtResourceSection, SubResourceSection, NodeSection, ResourceSection);

macro_rules! display_object {
    ($($wrapper:ident),+) => {
        $(
            impl fmt::Display for $wrapper {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    write!(f, "{}", self.as_object())
                }
            }
        )+
    };
}

display_object!(Vector2, Vector3, Color, NodePath, ExtResource, SubResource);

/// Export a value to pretty-printed JSON.
///
/// Objects become `{"name": ..., "args": [...]}`; non-finite floats become `null`.
pub fn export_value_to_json(value: &Value) -> Result<String, GdError> {
    serde_json::to_string_pretty(value).map_err(export_error)
}

/// Export a section to pretty-printed JSON, keeping attribute and property order.
pub fn export_section_to_json(section: &Section) -> Result<String, GdError> {
    serde_json::to_string_pretty(section).map_err(export_error)
}

fn export_error(e: serde_json::Error) -> GdError {
    GdError::ExportError {
        message: format!("Failed to serialize to JSON: {}", e),
        hint: None,
        code: Some(601),
    }
}
