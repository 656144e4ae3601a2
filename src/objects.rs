// Author: Dustin Pilgrim
// License: MIT

//! Typed views over [`GdObject`] for the engine types the format uses most.
//!
//! A wrapper owns nothing but the underlying object: `Vector2::x` reads
//! argument 0, `Vector2::set_x` writes it. Converting back with `into()`
//! therefore never loses or reorders anything, and a wrapper compares equal
//! to any `GdObject` with the same name and arguments.

use crate::ast::{GdObject, Value};
use crate::GdError;

fn check_shape(obj: &GdObject, name: &str, arity: usize) -> Result<(), GdError> {
    if obj.name != name {
        return Err(GdError::validation(
            format!("Expected a {} object, got {}", name, obj.name),
            None,
            401,
        ));
    }
    if obj.args.len() != arity {
        return Err(GdError::validation(
            format!("{} takes {} argument(s), got {}", name, arity, obj.args.len()),
            None,
            401,
        ));
    }
    Ok(())
}

fn check_numbers(obj: &GdObject) -> Result<(), GdError> {
    match obj.args.iter().find(|arg| arg.as_f64().is_none()) {
        Some(arg) => Err(GdError::validation(
            format!("{} arguments must be numbers, got {:?}", obj.name, arg),
            None,
            402,
        )),
        None => Ok(()),
    }
}

fn number_at(obj: &GdObject, idx: usize) -> f64 {
    obj.args.get(idx).and_then(Value::as_f64).unwrap_or_default()
}

fn set_number_at(obj: &mut GdObject, idx: usize, value: f64) -> Result<(), GdError> {
    let len = obj.args.len();
    match obj.args.get_mut(idx) {
        Some(slot) => {
            *slot = Value::Float(value);
            Ok(())
        }
        None => Err(GdError::validation(
            format!("Index {} out of range for {} with {} component(s)", idx, obj.name, len),
            None,
            404,
        )),
    }
}

macro_rules! object_view {
    ($wrapper:ident) => {
        impl $wrapper {
            pub fn as_object(&self) -> &GdObject {
                &self.0
            }

            pub fn into_object(self) -> GdObject {
                self.0
            }
        }

        impl From<$wrapper> for GdObject {
            fn from(wrapper: $wrapper) -> Self {
                wrapper.0
            }
        }

        impl From<$wrapper> for Value {
            fn from(wrapper: $wrapper) -> Self {
                Value::Object(wrapper.0)
            }
        }

        impl PartialEq<GdObject> for $wrapper {
            fn eq(&self, other: &GdObject) -> bool {
                self.0 == *other
            }
        }

        impl PartialEq<$wrapper> for GdObject {
            fn eq(&self, other: &$wrapper) -> bool {
                *self == other.0
            }
        }

        impl PartialEq<$wrapper> for Value {
            fn eq(&self, other: &$wrapper) -> bool {
                matches!(self, Value::Object(obj) if *obj == other.0)
            }
        }
    };
}

#[derive(Debug, Clone, PartialEq)]
pub struct Vector2(GdObject);

impl Vector2 {
    pub const NAME: &'static str = "Vector2";

    pub fn new(x: f64, y: f64) -> Self {
        Self(GdObject::new(Self::NAME, vec![x.into(), y.into()]))
    }

    pub fn x(&self) -> f64 {
        number_at(&self.0, 0)
    }

    pub fn set_x(&mut self, x: f64) {
        self.0.args[0] = Value::Float(x);
    }

    pub fn y(&self) -> f64 {
        number_at(&self.0, 1)
    }

    pub fn set_y(&mut self, y: f64) {
        self.0.args[1] = Value::Float(y);
    }

    pub fn get(&self, idx: usize) -> Option<f64> {
        self.0.args.get(idx).and_then(Value::as_f64)
    }

    pub fn set(&mut self, idx: usize, value: f64) -> Result<(), GdError> {
        set_number_at(&mut self.0, idx, value)
    }
}

impl TryFrom<GdObject> for Vector2 {
    type Error = GdError;

    fn try_from(obj: GdObject) -> Result<Self, Self::Error> {
        check_shape(&obj, Self::NAME, 2)?;
        check_numbers(&obj)?;
        Ok(Self(obj))
    }
}

object_view!(Vector2);

#[derive(Debug, Clone, PartialEq)]
pub struct Vector3(GdObject);

impl Vector3 {
    pub const NAME: &'static str = "Vector3";

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(GdObject::new(Self::NAME, vec![x.into(), y.into(), z.into()]))
    }

    pub fn x(&self) -> f64 {
        number_at(&self.0, 0)
    }

    pub fn set_x(&mut self, x: f64) {
        self.0.args[0] = Value::Float(x);
    }

    pub fn y(&self) -> f64 {
        number_at(&self.0, 1)
    }

    pub fn set_y(&mut self, y: f64) {
        self.0.args[1] = Value::Float(y);
    }

    pub fn z(&self) -> f64 {
        number_at(&self.0, 2)
    }

    pub fn set_z(&mut self, z: f64) {
        self.0.args[2] = Value::Float(z);
    }

    pub fn get(&self, idx: usize) -> Option<f64> {
        self.0.args.get(idx).and_then(Value::as_f64)
    }

    pub fn set(&mut self, idx: usize, value: f64) -> Result<(), GdError> {
        set_number_at(&mut self.0, idx, value)
    }
}

impl TryFrom<GdObject> for Vector3 {
    type Error = GdError;

    fn try_from(obj: GdObject) -> Result<Self, Self::Error> {
        check_shape(&obj, Self::NAME, 3)?;
        check_numbers(&obj)?;
        Ok(Self(obj))
    }
}

object_view!(Vector3);

/// RGBA colour, every component in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Color(GdObject);

const CHANNELS: [char; 4] = ['r', 'g', 'b', 'a'];

fn check_channel(idx: usize, value: f64) -> Result<(), GdError> {
    if (0.0..=1.0).contains(&value) {
        return Ok(());
    }
    let channel = CHANNELS.get(idx).copied().unwrap_or('?');
    Err(GdError::validation(
        format!("Color component {} = {} is outside [0, 1]", channel, value),
        Some("Color components are normalised floats"),
        403,
    ))
}

impl Color {
    pub const NAME: &'static str = "Color";

    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Result<Self, GdError> {
        let obj = GdObject::new(Self::NAME, vec![r.into(), g.into(), b.into(), a.into()]);
        Self::try_from(obj)
    }

    pub fn r(&self) -> f64 {
        number_at(&self.0, 0)
    }

    pub fn set_r(&mut self, r: f64) -> Result<(), GdError> {
        self.set(0, r)
    }

    pub fn g(&self) -> f64 {
        number_at(&self.0, 1)
    }

    pub fn set_g(&mut self, g: f64) -> Result<(), GdError> {
        self.set(1, g)
    }

    pub fn b(&self) -> f64 {
        number_at(&self.0, 2)
    }

    pub fn set_b(&mut self, b: f64) -> Result<(), GdError> {
        self.set(2, b)
    }

    pub fn a(&self) -> f64 {
        number_at(&self.0, 3)
    }

    pub fn set_a(&mut self, a: f64) -> Result<(), GdError> {
        self.set(3, a)
    }

    pub fn get(&self, idx: usize) -> Option<f64> {
        self.0.args.get(idx).and_then(Value::as_f64)
    }

    pub fn set(&mut self, idx: usize, value: f64) -> Result<(), GdError> {
        check_channel(idx, value)?;
        set_number_at(&mut self.0, idx, value)
    }
}

impl TryFrom<GdObject> for Color {
    type Error = GdError;

    fn try_from(obj: GdObject) -> Result<Self, Self::Error> {
        check_shape(&obj, Self::NAME, 4)?;
        check_numbers(&obj)?;
        for (idx, arg) in obj.args.iter().enumerate() {
            check_channel(idx, arg.as_f64().unwrap_or_default())?;
        }
        Ok(Self(obj))
    }
}

object_view!(Color);

#[derive(Debug, Clone, PartialEq)]
pub struct NodePath(GdObject);

impl NodePath {
    pub const NAME: &'static str = "NodePath";

    pub fn new(path: impl Into<String>) -> Self {
        Self(GdObject::new(Self::NAME, vec![Value::String(path.into())]))
    }

    pub fn path(&self) -> &str {
        self.0.args.first().and_then(Value::as_str).unwrap_or_default()
    }

    pub fn set_path(&mut self, path: impl Into<String>) {
        self.0.args[0] = Value::String(path.into());
    }
}

impl TryFrom<GdObject> for NodePath {
    type Error = GdError;

    fn try_from(obj: GdObject) -> Result<Self, Self::Error> {
        check_shape(&obj, Self::NAME, 1)?;
        if obj.args[0].as_str().is_none() {
            return Err(GdError::validation(
                format!("NodePath takes a string, got {:?}", obj.args[0]),
                None,
                402,
            ));
        }
        Ok(Self(obj))
    }
}

object_view!(NodePath);

fn check_id(obj: &GdObject) -> Result<(), GdError> {
    if obj.args[0].as_i64().is_none() {
        return Err(GdError::validation(
            format!("{} takes an integer id, got {:?}", obj.name, obj.args[0]),
            None,
            402,
        ));
    }
    Ok(())
}

/// Reference to an `[ext_resource]` of the same file by id.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtResource(GdObject);

impl ExtResource {
    pub const NAME: &'static str = "ExtResource";

    pub fn new(id: i64) -> Self {
        Self(GdObject::new(Self::NAME, vec![Value::Int(id)]))
    }

    pub fn id(&self) -> i64 {
        self.0.args.first().and_then(Value::as_i64).unwrap_or_default()
    }

    pub fn set_id(&mut self, id: i64) {
        self.0.args[0] = Value::Int(id);
    }
}

impl TryFrom<GdObject> for ExtResource {
    type Error = GdError;

    fn try_from(obj: GdObject) -> Result<Self, Self::Error> {
        check_shape(&obj, Self::NAME, 1)?;
        check_id(&obj)?;
        Ok(Self(obj))
    }
}

object_view!(ExtResource);

/// Reference to a `[sub_resource]` of the same file by id.
#[derive(Debug, Clone, PartialEq)]
pub struct SubResource(GdObject);

impl SubResource {
    pub const NAME: &'static str = "SubResource";

    pub fn new(id: i64) -> Self {
        Self(GdObject::new(Self::NAME, vec![Value::Int(id)]))
    }

    pub fn id(&self) -> i64 {
        self.0.args.first().and_then(Value::as_i64).unwrap_or_default()
    }

    pub fn set_id(&mut self, id: i64) {
        self.0.args[0] = Value::Int(id);
    }
}

impl TryFrom<GdObject> for SubResource {
    type Error = GdError;

    fn try_from(obj: GdObject) -> Result<Self, Self::Error> {
        check_shape(&obj, Self::NAME, 1)?;
        check_id(&obj)?;
        Ok(Self(obj))
    }
}

object_view!(SubResource);

/// The most specific wrapper for an object's name.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedObject {
    Vector2(Vector2),
    Vector3(Vector3),
    Color(Color),
    NodePath(NodePath),
    ExtResource(ExtResource),
    SubResource(SubResource),
    Other(GdObject),
}

impl TryFrom<GdObject> for TypedObject {
    type Error = GdError;

    /// Unknown names come back as `Other`; a known name with the wrong
    /// arguments is a validation error.
    fn try_from(obj: GdObject) -> Result<Self, Self::Error> {
        Ok(match obj.name.as_str() {
            Vector2::NAME => TypedObject::Vector2(obj.try_into()?),
            Vector3::NAME => TypedObject::Vector3(obj.try_into()?),
            Color::NAME => TypedObject::Color(obj.try_into()?),
            NodePath::NAME => TypedObject::NodePath(obj.try_into()?),
            ExtResource::NAME => TypedObject::ExtResource(obj.try_into()?),
            SubResource::NAME => TypedObject::SubResource(obj.try_into()?),
            _ => TypedObject::Other(obj),
        })
    }
}

impl TypedObject {
    pub fn as_object(&self) -> &GdObject {
        match self {
            TypedObject::Vector2(v) => v.as_object(),
            TypedObject::Vector3(v) => v.as_object(),
            TypedObject::Color(c) => c.as_object(),
            TypedObject::NodePath(p) => p.as_object(),
            TypedObject::ExtResource(r) => r.as_object(),
            TypedObject::SubResource(r) => r.as_object(),
            TypedObject::Other(obj) => obj,
        }
    }

    pub fn into_object(self) -> GdObject {
        match self {
            TypedObject::Vector2(v) => v.into_object(),
            TypedObject::Vector3(v) => v.into_object(),
            TypedObject::Color(c) => c.into_object(),
            TypedObject::NodePath(p) => p.into_object(),
            TypedObject::ExtResource(r) => r.into_object(),
            TypedObject::SubResource(r) => r.into_object(),
            TypedObject::Other(obj) => obj,
        }
    }
}

impl GdObject {
    /// Shorthand for `TypedObject::try_from(self)`.
    pub fn into_typed(self) -> Result<TypedObject, GdError> {
        TypedObject::try_from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::parse_value;

    #[test]
    fn test_vector2_accessors_are_views() {
        let mut v = Vector2::new(1.0, 2.0);
        assert_eq!(v.x(), 1.0);
        assert_eq!(v.y(), 2.0);

        v.set_x(5.0);
        assert_eq!(v.x(), 5.0);
        assert_eq!(v.y(), 2.0);
        assert_eq!(v.as_object().args, vec![Value::Float(5.0), Value::Float(2.0)]);
    }

    #[test]
    fn test_vector_indexed_access() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v.get(2), Some(3.0));
        assert_eq!(v.get(3), None);
        v.set(1, -4.0).unwrap();
        assert_eq!(v.y(), -4.0);
        assert!(v.set(3, 0.0).unwrap_err().is_validation());
    }

    #[test]
    fn test_wrapper_equals_plain_object() {
        let plain = GdObject::new("Vector2", vec![Value::Int(1), Value::Int(2)]);
        assert_eq!(Vector2::new(1.0, 2.0), plain);
        assert_eq!(plain, Vector2::new(1.0, 2.0));
        assert_ne!(GdObject::new("Vector3", vec![Value::Int(1), Value::Int(2)]), Vector2::new(1.0, 2.0));
    }

    #[test]
    fn test_color_range_is_validated() {
        assert!(Color::new(0.0, 0.0, 0.0, 1.0).is_ok());

        let err = Color::new(1.5, 0.0, 0.0, 1.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);

        let mut c = Color::new(0.2, 0.4, 0.6, 1.0).unwrap();
        assert!(c.set_a(-0.1).is_err());
        assert_eq!(c.a(), 1.0);
        c.set_g(1.0).unwrap();
        assert_eq!(c.g(), 1.0);
    }

    #[test]
    fn test_parsed_color_out_of_range_is_validation_not_syntax() {
        let (value, _) = parse_value("Color(1.5, 0, 0, 1)", 0).expect("text is well-formed");
        let obj = GdObject::try_from(value).unwrap();
        let err = obj.into_typed().unwrap_err();
        assert!(err.is_validation());
        assert!(!err.is_syntax());
    }

    #[test]
    fn test_typed_dispatch_by_name() {
        let (value, _) = parse_value("ExtResource(3)", 0).unwrap();
        match GdObject::try_from(value).unwrap().into_typed().unwrap() {
            TypedObject::ExtResource(r) => assert_eq!(r.id(), 3),
            other => panic!("Expected ExtResource, got {:?}", other),
        }

        let (value, _) = parse_value("NodePath(\"../Player\")", 0).unwrap();
        match GdObject::try_from(value).unwrap().into_typed().unwrap() {
            TypedObject::NodePath(p) => assert_eq!(p.path(), "../Player"),
            other => panic!("Expected NodePath, got {:?}", other),
        }

        let (value, _) = parse_value("Rect2(0, 0, 64, 64)", 0).unwrap();
        let typed = GdObject::try_from(value).unwrap().into_typed().unwrap();
        assert!(matches!(typed, TypedObject::Other(ref obj) if obj.name == "Rect2"));
    }

    #[test]
    fn test_wrong_arity_or_type_rejected() {
        let short = GdObject::new("Vector3", vec![Value::Int(1)]);
        assert!(Vector3::try_from(short).unwrap_err().is_validation());

        let stringy = GdObject::new("SubResource", vec![Value::from("1_abc")]);
        assert!(SubResource::try_from(stringy).is_err());
    }

    #[test]
    fn test_resource_ids_mutable_in_place() {
        let mut r = SubResource::new(1);
        r.set_id(7);
        assert_eq!(r, GdObject::new("SubResource", vec![Value::Int(7)]));
        assert_eq!(Value::from(r.clone()), r);
    }
}
