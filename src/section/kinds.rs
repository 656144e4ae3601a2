// Author: Dustin Pilgrim
// License: MIT

use std::ops::{Deref, DerefMut};

use super::{Section, SectionHeader};
use crate::ast::Value;
use crate::objects::{ExtResource, SubResource};

// Specialized kinds are views over a `Section`; header and properties stay reachable.
macro_rules! section_view {
    ($kind:ident) => {
        impl $kind {
            pub fn from_header(header: SectionHeader) -> Self {
                Self(Section::new(header))
            }

            pub fn into_section(self) -> Section {
                self.0
            }
        }

        impl Deref for $kind {
            type Target = Section;

            fn deref(&self) -> &Section {
                &self.0
            }
        }

        impl DerefMut for $kind {
            fn deref_mut(&mut self) -> &mut Section {
                &mut self.0
            }
        }

        impl From<$kind> for Section {
            fn from(kind: $kind) -> Self {
                kind.0
            }
        }

        impl PartialEq<Section> for $kind {
            fn eq(&self, other: &Section) -> bool {
                self.0 == *other
            }
        }

        impl PartialEq<$kind> for Section {
            fn eq(&self, other: &$kind) -> bool {
                *self == other.0
            }
        }
    };
}

/// `[ext_resource path="res://icon.png" type="Texture" id=1]`
#[derive(Debug, Clone, PartialEq)]
pub struct ExtResourceSection(Section);

impl ExtResourceSection {
    pub const TITLE: &'static str = "ext_resource";

    pub fn new(path: &str, type_name: &str, id: i64) -> Self {
        let header = SectionHeader::new(Self::TITLE)
            .with("path", path)
            .with("type", type_name)
            .with("id", id);
        Self::from_header(header)
    }

    pub fn path(&self) -> Option<&str> {
        self.0.header.path()
    }

    pub fn set_path(&mut self, path: &str) {
        self.0.header.set_path(Some(path));
    }

    pub fn type_name(&self) -> Option<&str> {
        self.0.header.type_name()
    }

    pub fn set_type_name(&mut self, type_name: &str) {
        self.0.header.set_type_name(Some(type_name));
    }

    pub fn id(&self) -> Option<i64> {
        self.0.header.id()
    }

    pub fn set_id(&mut self, id: i64) {
        self.0.header.set_id(Some(id));
    }

    /// `ExtResource(id)` pointing at this section.
    pub fn reference(&self) -> Option<ExtResource> {
        self.id().map(ExtResource::new)
    }
}

section_view!(ExtResourceSection);

/// `[sub_resource type="RectangleShape2D" id=1]`
#[derive(Debug, Clone, PartialEq)]
pub struct SubResourceSection(Section);

impl SubResourceSection {
    pub const TITLE: &'static str = "sub_resource";

    pub fn new(type_name: &str, id: i64) -> Self {
        let header = SectionHeader::new(Self::TITLE)
            .with("type", type_name)
            .with("id", id);
        Self::from_header(header)
    }

    pub fn type_name(&self) -> Option<&str> {
        self.0.header.type_name()
    }

    pub fn set_type_name(&mut self, type_name: &str) {
        self.0.header.set_type_name(Some(type_name));
    }

    pub fn id(&self) -> Option<i64> {
        self.0.header.id()
    }

    pub fn set_id(&mut self, id: i64) {
        self.0.header.set_id(Some(id));
    }

    /// `SubResource(id)` pointing at this section.
    pub fn reference(&self) -> Option<SubResource> {
        self.id().map(SubResource::new)
    }
}

section_view!(SubResourceSection);

/// `[node name="Player" type="KinematicBody2D" parent="."]`
///
/// A node either has a `type` or is an `instance` of a packed scene, never
/// both: setting one clears the other.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeSection(Section);

impl NodeSection {
    pub const TITLE: &'static str = "node";

    pub fn new(name: &str, type_name: Option<&str>, parent: Option<&str>) -> Self {
        let mut node = Self::from_header(SectionHeader::new(Self::TITLE).with("name", name));
        node.set_type_name(type_name);
        node.set_parent(parent);
        node
    }

    /// A node instancing the scene behind `[ext_resource ... id=instance]`.
    pub fn ext_node(name: &str, instance: i64, parent: Option<&str>, index: Option<i64>) -> Self {
        let mut node = Self::from_header(SectionHeader::new(Self::TITLE).with("name", name));
        node.set_parent(parent);
        node.set_instance(Some(instance));
        node.set_index(index);
        node
    }

    /// The `name` attribute. The header title stays `node` so the section
    /// is dispatched back to this kind when re-parsed.
    pub fn name(&self) -> Option<&str> {
        self.0.header.get("name").and_then(|v| v.as_str())
    }

    pub fn set_name(&mut self, name: &str) {
        self.0.header.set("name", name);
    }

    pub fn type_name(&self) -> Option<&str> {
        self.0.header.type_name()
    }

    pub fn set_type_name(&mut self, type_name: Option<&str>) {
        self.0.header.set_type_name(type_name);
        if type_name.is_some() {
            self.0.header.set_instance(None);
        }
    }

    pub fn parent(&self) -> Option<&str> {
        self.0.header.parent()
    }

    pub fn set_parent(&mut self, parent: Option<&str>) {
        self.0.header.set_parent(parent);
    }

    /// Id of the instanced `[ext_resource]`.
    pub fn instance(&self) -> Option<i64> {
        self.0.header.instance().map(|r| r.id())
    }

    pub fn set_instance(&mut self, instance: Option<i64>) {
        self.0.header.set_instance(instance.map(ExtResource::new));
        if instance.is_some() {
            self.0.header.set_type_name(None);
        }
    }

    /// Written as a string by the engine; a bare integer is read too.
    pub fn index(&self) -> Option<i64> {
        match self.0.header.get("index")? {
            Value::String(idx) => idx.parse().ok(),
            Value::Int(idx) => Some(*idx),
            _ => None,
        }
    }

    pub fn set_index(&mut self, index: Option<i64>) {
        let index = index.map(|idx| idx.to_string());
        self.0.header.set_index(index.as_deref());
    }

    pub fn groups(&self) -> Option<Vec<String>> {
        self.0.header.groups()
    }

    pub fn set_groups(&mut self, groups: Option<Vec<String>>) {
        self.0.header.set_groups(groups);
    }
}

section_view!(NodeSection);

/// `[resource]`, the body of a `.tres` file.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceSection(Section);

impl ResourceSection {
    pub const TITLE: &'static str = "resource";

    pub fn new() -> Self {
        Self::from_header(SectionHeader::new(Self::TITLE))
    }
}

impl Default for ResourceSection {
    fn default() -> Self {
        Self::new()
    }
}

section_view!(ResourceSection);

/// A parsed section in its most specific known form.
///
/// Which variant a header ends up in is decided by the
/// [`SectionRegistry`](super::SectionRegistry); unknown titles stay `Generic`.
#[derive(Debug, Clone)]
pub enum GdSection {
    Generic(Section),
    ExtResource(ExtResourceSection),
    SubResource(SubResourceSection),
    Node(NodeSection),
    Resource(ResourceSection),
}

impl GdSection {
    pub fn section(&self) -> &Section {
        match self {
            GdSection::Generic(s) => s,
            GdSection::ExtResource(s) => s,
            GdSection::SubResource(s) => s,
            GdSection::Node(s) => s,
            GdSection::Resource(s) => s,
        }
    }

    pub fn section_mut(&mut self) -> &mut Section {
        match self {
            GdSection::Generic(s) => s,
            GdSection::ExtResource(s) => s,
            GdSection::SubResource(s) => s,
            GdSection::Node(s) => s,
            GdSection::Resource(s) => s,
        }
    }

    pub fn into_section(self) -> Section {
        match self {
            GdSection::Generic(s) => s,
            GdSection::ExtResource(s) => s.into_section(),
            GdSection::SubResource(s) => s.into_section(),
            GdSection::Node(s) => s.into_section(),
            GdSection::Resource(s) => s.into_section(),
        }
    }

    pub fn header(&self) -> &SectionHeader {
        &self.section().header
    }

    pub fn header_mut(&mut self) -> &mut SectionHeader {
        &mut self.section_mut().header
    }

    pub fn title(&self) -> &str {
        &self.header().title
    }

    pub fn is_generic(&self) -> bool {
        matches!(self, GdSection::Generic(_))
    }

    pub fn as_ext_resource(&self) -> Option<&ExtResourceSection> {
        if let GdSection::ExtResource(s) = self { Some(s) } else { None }
    }

    pub fn as_sub_resource(&self) -> Option<&SubResourceSection> {
        if let GdSection::SubResource(s) = self { Some(s) } else { None }
    }

    pub fn as_node(&self) -> Option<&NodeSection> {
        if let GdSection::Node(s) = self { Some(s) } else { None }
    }

    pub fn as_node_mut(&mut self) -> Option<&mut NodeSection> {
        if let GdSection::Node(s) = self { Some(s) } else { None }
    }

    pub fn as_resource(&self) -> Option<&ResourceSection> {
        if let GdSection::Resource(s) = self { Some(s) } else { None }
    }
}

impl PartialEq for GdSection {
    fn eq(&self, other: &Self) -> bool {
        self.section() == other.section()
    }
}

impl PartialEq<Section> for GdSection {
    fn eq(&self, other: &Section) -> bool {
        self.section() == other
    }
}

impl From<Section> for GdSection {
    fn from(section: Section) -> Self {
        GdSection::Generic(section)
    }
}

impl From<ExtResourceSection> for GdSection {
    fn from(section: ExtResourceSection) -> Self {
        GdSection::ExtResource(section)
    }
}

impl From<SubResourceSection> for GdSection {
    fn from(section: SubResourceSection) -> Self {
        GdSection::SubResource(section)
    }
}

impl From<NodeSection> for GdSection {
    fn from(section: NodeSection) -> Self {
        GdSection::Node(section)
    }
}

impl From<ResourceSection> for GdSection {
    fn from(section: ResourceSection) -> Self {
        GdSection::Resource(section)
    }
}
