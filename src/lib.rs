pub mod ast;
mod conversion;
pub mod error;
pub mod export;
pub mod lexer;
pub mod objects;
pub mod parser;
pub mod section;

pub use ast::{GdObject, Value};
pub use error::{ErrorKind, GdError};
pub use export::{export_section_to_json, export_value_to_json, stringify};
pub use lexer::is_valid_key;
pub use objects::{Color, ExtResource, NodePath, SubResource, TypedObject, Vector2, Vector3};
pub use parser::{parse_header, parse_section, parse_section_with, parse_value};
pub use section::{
    register_section_kind, ExtResourceSection, GdSection, NodeSection, ResourceSection, Section,
    SectionConstructor, SectionHeader, SectionRegistry, SubResourceSection,
};
