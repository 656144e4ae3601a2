// Author: Dustin Pilgrim
// License: MIT

use indexmap::IndexMap;
use log::warn;
use serde::Serialize;

use crate::ast::{GdObject, Value};
use crate::lexer::is_valid_key;
use crate::objects::ExtResource;

/// The bracketed first line of a section, e.g.
/// `[node name="Sprite" type="Sprite2D" parent="." index="3"]`.
///
/// The attribute map is the only storage. The typed accessors for the keys the
/// engine knows about (`id`, `path`, `type`, ...) read and write that map
/// directly: setting `Some` updates the key in place or appends it, setting
/// `None` removes it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionHeader {
    pub title: String,
    attributes: IndexMap<String, Value>,
}

impl SectionHeader {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            attributes: IndexMap::new(),
        }
    }

    /// Builder-style `set`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.attributes.get_mut(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }

    /// Returns the previous value. An existing key keeps its position.
    ///
    /// Keys failing [`is_valid_key`] are stored, but the serialized
    /// section will not parse back; a warning is logged.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        if !is_valid_key(&key) {
            warn!("attribute key {:?} cannot be written as a bare key", key);
        }
        self.attributes.insert(key, value.into())
    }

    /// Removing a missing key is a no-op. Remaining keys keep their order.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.attributes.shift_remove(key)
    }

    pub fn attributes(&self) -> &IndexMap<String, Value> {
        &self.attributes
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    fn assign(&mut self, key: &str, value: Option<Value>) {
        match value {
            Some(value) => {
                self.set(key, value);
            }
            None => {
                self.remove(key);
            }
        }
    }

    fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_i64)
    }

    pub fn id(&self) -> Option<i64> {
        self.get_i64("id")
    }

    pub fn set_id(&mut self, id: Option<i64>) {
        self.assign("id", id.map(Value::Int));
    }

    pub fn path(&self) -> Option<&str> {
        self.get_str("path")
    }

    pub fn set_path(&mut self, path: Option<&str>) {
        self.assign("path", path.map(Value::from));
    }

    /// The `type` attribute.
    pub fn type_name(&self) -> Option<&str> {
        self.get_str("type")
    }

    pub fn set_type_name(&mut self, type_name: Option<&str>) {
        self.assign("type", type_name.map(Value::from));
    }

    pub fn format(&self) -> Option<i64> {
        self.get_i64("format")
    }

    pub fn set_format(&mut self, format: Option<i64>) {
        self.assign("format", format.map(Value::Int));
    }

    pub fn load_steps(&self) -> Option<i64> {
        self.get_i64("load_steps")
    }

    pub fn set_load_steps(&mut self, load_steps: Option<i64>) {
        self.assign("load_steps", load_steps.map(Value::Int));
    }

    pub fn parent(&self) -> Option<&str> {
        self.get_str("parent")
    }

    pub fn set_parent(&mut self, parent: Option<&str>) {
        self.assign("parent", parent.map(Value::from));
    }

    /// Raw `index` attribute; the engine writes it as a string (`index="3"`).
    pub fn index(&self) -> Option<&str> {
        self.get_str("index")
    }

    pub fn set_index(&mut self, index: Option<&str>) {
        self.assign("index", index.map(Value::from));
    }

    pub fn instance(&self) -> Option<ExtResource> {
        match self.get("instance") {
            Some(Value::Object(obj)) => ExtResource::try_from(obj.clone()).ok(),
            _ => None,
        }
    }

    pub fn set_instance(&mut self, instance: Option<ExtResource>) {
        self.assign("instance", instance.map(Value::from));
    }

    pub fn groups(&self) -> Option<Vec<String>> {
        self.get("groups").cloned().and_then(|v| Vec::<String>::try_from(v).ok())
    }

    pub fn set_groups(&mut self, groups: Option<Vec<String>>) {
        self.assign("groups", groups.map(Value::from));
    }

    /// `instance` as the raw object, whatever its arguments.
    pub fn instance_object(&self) -> Option<&GdObject> {
        self.get("instance").and_then(Value::as_object)
    }
}
