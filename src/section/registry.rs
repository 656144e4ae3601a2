// Author: Dustin Pilgrim
// License: MIT

use std::collections::HashMap;
use std::sync::RwLock;

use log::{debug, warn};
use once_cell::sync::Lazy;

use super::{
    ExtResourceSection, GdSection, NodeSection, ResourceSection, Section, SectionHeader, SubResourceSection,
};

/// Builds the section representation for a freshly parsed header.
pub type SectionConstructor = fn(SectionHeader) -> GdSection;

/// Title -> constructor table used to pick a section's specialized kind.
///
/// Titles without an entry become [`GdSection::Generic`]; that is the
/// intended default, not an error.
#[derive(Debug, Clone)]
pub struct SectionRegistry {
    kinds: HashMap<String, SectionConstructor>,
}

impl SectionRegistry {
    pub fn empty() -> Self {
        Self { kinds: HashMap::new() }
    }

    /// The kinds the engine writes: `ext_resource`, `sub_resource`, `node`, `resource`.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(ExtResourceSection::TITLE, |header| {
            GdSection::ExtResource(ExtResourceSection::from_header(header))
        });
        registry.register(SubResourceSection::TITLE, |header| {
            GdSection::SubResource(SubResourceSection::from_header(header))
        });
        registry.register(NodeSection::TITLE, |header| {
            GdSection::Node(NodeSection::from_header(header))
        });
        registry.register(ResourceSection::TITLE, |header| {
            GdSection::Resource(ResourceSection::from_header(header))
        });
        registry
    }

    /// Returns the constructor previously registered under `title`, if any.
    pub fn register(&mut self, title: impl Into<String>, constructor: SectionConstructor) -> Option<SectionConstructor> {
        let title = title.into();
        let previous = self.kinds.insert(title.clone(), constructor);
        if previous.is_some() {
            warn!("section kind [{}] registered twice, replacing the earlier constructor", title);
        }
        previous
    }

    pub fn lookup(&self, title: &str) -> Option<SectionConstructor> {
        self.kinds.get(title).copied()
    }

    pub fn contains(&self, title: &str) -> bool {
        self.kinds.contains_key(title)
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.kinds.keys().map(String::as_str)
    }

    pub fn construct(&self, header: SectionHeader) -> GdSection {
        build(self.lookup(&header.title), header)
    }
}

fn build(constructor: Option<SectionConstructor>, header: SectionHeader) -> GdSection {
    match constructor {
        Some(constructor) => constructor(header),
        None => {
            debug!("no section kind registered for [{}], using a generic section", header.title);
            GdSection::Generic(Section::new(header))
        }
    }
}

impl Default for SectionRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

static GLOBAL_REGISTRY: Lazy<RwLock<SectionRegistry>> = Lazy::new(|| RwLock::new(SectionRegistry::builtin()));

/// Register a section kind in the process-wide registry used by
/// [`parse_section`](crate::parse_section).
///
/// Safe to call from any thread; parsing on other threads sees the new kind
/// from its next section on.
pub fn register_section_kind(title: impl Into<String>, constructor: SectionConstructor) -> Option<SectionConstructor> {
    // The map is never left half-written, so a poisoned lock is still usable
    let mut registry = GLOBAL_REGISTRY.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    registry.register(title, constructor)
}

/// Run `f` with shared access to the process-wide registry.
pub fn with_global_registry<R>(f: impl FnOnce(&SectionRegistry) -> R) -> R {
    let registry = GLOBAL_REGISTRY.read().unwrap_or_else(|poisoned| poisoned.into_inner());
    f(&registry)
}

/// Build a section through the process-wide registry.
///
/// Only the lookup happens under the lock, so a constructor may itself call
/// [`register_section_kind`].
pub fn construct_global(header: SectionHeader) -> GdSection {
    let constructor = with_global_registry(|registry| registry.lookup(&header.title));
    build(constructor, header)
}
