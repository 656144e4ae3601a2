// Author: Dustin Pilgrim
// License: MIT

use indexmap::IndexMap;
use log::warn;
use serde::Serialize;

use crate::ast::Value;
use crate::lexer::is_valid_key;

mod header;
mod kinds;
mod registry;

pub use header::SectionHeader;
pub use kinds::{ExtResourceSection, GdSection, NodeSection, ResourceSection, SubResourceSection};
pub use registry::{construct_global, register_section_kind, with_global_registry, SectionConstructor, SectionRegistry};

/// One bracketed block: a header and its `key = value` properties, in order.
///
/// Equality looks at header and properties only, never at which specialized
/// kind (if any) wraps the section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub header: SectionHeader,
    properties: IndexMap<String, Value>,
}

impl Section {
    pub fn new(header: SectionHeader) -> Self {
        Self {
            header,
            properties: IndexMap::new(),
        }
    }

    pub fn titled(title: impl Into<String>) -> Self {
        Self::new(SectionHeader::new(title))
    }

    /// Builder-style `set`.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.properties.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.properties.get_mut(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Returns the previous value. An existing key keeps its position.
    ///
    /// Keys failing [`is_valid_key`] are stored, but the serialized
    /// section will not parse back; a warning is logged.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        if !is_valid_key(&key) {
            warn!("property key {:?} cannot be written as a bare key", key);
        }
        self.properties.insert(key, value.into())
    }

    /// Removing a missing key is a no-op. Remaining keys keep their order.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.properties.shift_remove(key)
    }

    pub fn properties(&self) -> &IndexMap<String, Value> {
        &self.properties
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}
