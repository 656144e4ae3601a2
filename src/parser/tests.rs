// Author: Dustin Pilgrim
// License: MIT

#[cfg(test)]
use super::*;
#[cfg(test)]
use crate::ast::GdObject;
#[cfg(test)]
use indexmap::IndexMap;

#[cfg(test)]
fn value(input: &str) -> Value {
    let (value, end) = parse_value(input, 0).expect("Failed to parse value");
    assert_eq!(end, input.trim_end().len(), "value should end at the last character of {:?}", input);
    value
}

#[test]
fn test_primitives() {
    assert_eq!(value("null"), Value::Null);
    assert_eq!(value("true"), Value::Bool(true));
    assert_eq!(value("False"), Value::Bool(false));
    assert_eq!(value("-7"), Value::Int(-7));
    assert_eq!(value("7.0"), Value::Float(7.0));
    assert!(matches!(value("7.0"), Value::Float(_)));
    assert!(matches!(value("7"), Value::Int(_)));
    assert_eq!(value("\"res://icon.png\""), Value::from("res://icon.png"));
}

#[test]
fn test_multiline_string() {
    let input = "\"line one\nline \\\"two\\\"\"";
    assert_eq!(value(input), Value::from("line one\nline \"two\""));
}

#[test]
fn test_list_trailing_comma() {
    assert_eq!(value("[1, 2, ]"), value("[1, 2]"));
    assert_eq!(value("[1, 2]"), Value::List(vec![Value::Int(1), Value::Int(2)]));
    assert_eq!(value("[]"), Value::List(vec![]));
    assert_eq!(
        value("[ [1], [\"a\", null] ]"),
        Value::List(vec![
            Value::List(vec![Value::Int(1)]),
            Value::List(vec![Value::from("a"), Value::Null]),
        ])
    );
}

#[test]
fn test_empty_dict() {
    assert_eq!(value("{}"), Value::Dict(IndexMap::new()));
}

#[test]
fn test_multiline_dict() {
    let input = "{\n\"_edit_use_anchors_\": false,\n\"pos\": Vector2(1, 2)\n}";
    let dict = value(input);
    let map = dict.as_dict().expect("Expected a dictionary");
    assert_eq!(map.len(), 2);
    assert_eq!(map["_edit_use_anchors_"], Value::Bool(false));
    assert_eq!(
        map["pos"],
        Value::Object(GdObject::new("Vector2", vec![Value::Int(1), Value::Int(2)]))
    );
}

#[test]
fn test_dict_duplicate_key_keeps_first_position() {
    let dict = value("{ \"a\": 1, \"b\": 2, \"a\": 3 }");
    let map = dict.as_dict().unwrap();
    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["a", "b"]);
    assert_eq!(map["a"], Value::Int(3));
}

#[test]
fn test_plain_object() {
    assert_eq!(
        value("Vector2(1, 2)"),
        Value::Object(GdObject::new("Vector2", vec![Value::Int(1), Value::Int(2)]))
    );
    assert_eq!(value("PoolStringArray(  )"), Value::Object(GdObject::new("PoolStringArray", vec![])));
}

#[test]
fn test_generic_object_is_distinct_kind() {
    let generic = value("Array[int](1, 2, 3)");
    let expected_args = vec![Value::Int(1), Value::Int(2), Value::Int(3)];
    assert_eq!(generic, Value::GenericObject(GdObject::new("Array[int]", expected_args.clone())));

    let plain = Value::Object(GdObject::new("Array[int]", expected_args.clone()));
    assert_ne!(generic, plain);
    assert_eq!(generic.as_object().unwrap().args, plain.as_object().unwrap().args);
}

#[test]
fn test_nested_generic_arguments() {
    let parsed = value("Array[Resource]([SubResource(1), ExtResource(2)])");
    let obj = parsed.as_object().unwrap();
    assert_eq!(obj.name, "Array[Resource]");
    assert_eq!(
        obj.args,
        vec![Value::List(vec![
            Value::Object(GdObject::new("SubResource", vec![Value::Int(1)])),
            Value::Object(GdObject::new("ExtResource", vec![Value::Int(2)])),
        ])]
    );
}

#[test]
fn test_parse_value_at_offset() {
    let text = "position = Vector2(3, 4)\n";
    let at = text.find('V').unwrap();
    let (parsed, end) = parse_value(text, at).unwrap();
    assert_eq!(parsed.as_object().unwrap().name, "Vector2");
    assert_eq!(&text[end..], "\n");
}

#[test]
fn test_syntax_errors_carry_position() {
    let err = parse_value("[1, 2", 0).unwrap_err();
    assert!(matches!(err, GdError::UnexpectedEof { offset: 5, .. }), "{:?}", err);

    let err = parse_value("Vector2 1", 0).unwrap_err();
    assert!(err.is_syntax());
    assert_eq!(err.offset(), Some(8));

    let err = parse_value("{ key: 1 }", 0).unwrap_err();
    assert!(err.is_syntax());
    assert_eq!(err.position(), Some((1, 3)));

    let err = parse_value("\n  @", 0).unwrap_err();
    assert!(matches!(err, GdError::UnexpectedCharacter { character: '@', line: 2, column: 3, .. }));
}

#[test]
fn test_header() {
    let text = "[gd_scene load_steps=3 format=2]";
    let (header, end) = parse_header(text, 0).unwrap();
    assert_eq!(header.title, "gd_scene");
    assert_eq!(header.load_steps(), Some(3));
    assert_eq!(header.format(), Some(2));
    assert_eq!(end, text.len());

    let keys: Vec<&str> = header.attributes().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["load_steps", "format"]);
}

#[test]
fn test_header_with_composite_attributes() {
    let text = "[node name=\"Enemy\" parent=\".\" instance=ExtResource( 2 ) groups=[\"mobs\", \"hurtable\"]]";
    let (header, _) = parse_header(text, 0).unwrap();
    assert_eq!(header.instance().map(|r| r.id()), Some(2));
    assert_eq!(header.groups(), Some(vec!["mobs".to_string(), "hurtable".to_string()]));
    assert_eq!(header.parent(), Some("."));
}

#[test]
fn test_unclosed_header() {
    let err = parse_header("[node name=\"A\"", 0).unwrap_err();
    assert!(matches!(err, GdError::UnexpectedEof { .. }), "{:?}", err);
}

#[test]
fn test_section_with_properties() {
    let text = r#"
[sub_resource type="RectangleShape2D" id=1]
extents = Vector2( 16, 16 )
custom_solver_bias = 0.5

[node name="Root" type="Node2D"]
"#;
    let (section, next) = parse_section(text, 0).unwrap();
    let sub = section.as_sub_resource().expect("Expected a sub_resource section");
    assert_eq!(sub.type_name(), Some("RectangleShape2D"));
    assert_eq!(sub.get("custom_solver_bias"), Some(&Value::Float(0.5)));
    assert_eq!(sub.len(), 2);
    assert_eq!(&text[next..next + 5], "[node");

    let (section, end) = parse_section(text, next).unwrap();
    assert!(section.as_node().is_some());
    assert_eq!(end, text.len());
}

#[test]
fn test_section_property_keys_with_slashes_and_comments() {
    let text = "[resource]\n; a comment\ntracks/0/type = \"value\"\nmetadata/_edit_group_ = true\n";
    let (section, _) = parse_section(text, 0).unwrap();
    assert!(section.as_resource().is_some());
    assert_eq!(section.section().get("tracks/0/type"), Some(&Value::from("value")));
    assert_eq!(section.section().get("metadata/_edit_group_"), Some(&Value::Bool(true)));
}

#[test]
fn test_duplicate_property_keeps_first_position() {
    let text = "[resource]\na = 1\nb = 2\na = 3\n";
    let (section, _) = parse_section(text, 0).unwrap();
    let keys: Vec<&str> = section.section().properties().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["a", "b"]);
    assert_eq!(section.section().get("a"), Some(&Value::Int(3)));
}

#[test]
fn test_property_without_equals_fails() {
    let err = parse_section("[resource]\nsize 4\n", 0).unwrap_err();
    assert!(err.is_syntax());
    assert_eq!(err.position(), Some((2, 6)));
}

#[test]
fn test_parse_section_with_explicit_registry() {
    let text = "[node name=\"A\"]";
    let (section, _) = parse_section_with(&SectionRegistry::empty(), text, 0).unwrap();
    assert!(section.is_generic());

    let (section, _) = parse_section_with(&SectionRegistry::builtin(), text, 0).unwrap();
    assert!(section.as_node().is_some());
}

#[test]
fn test_walk_all_sections() {
    let text = r#"[gd_scene load_steps=2 format=2]

[ext_resource path="res://player.tscn" type="PackedScene" id=1]

[node name="World" type="Node2D"]

[node name="Player" parent="." instance=ExtResource( 1 )]
position = Vector2( 100, 200 )

[connection signal="hit" from="Player" to="." method="_on_hit"]
"#;
    let mut at = 0;
    let mut titles = Vec::new();
    while at < text.len() {
        let (section, next) = parse_section(text, at).unwrap();
        titles.push(section.title().to_string());
        at = next;
    }
    assert_eq!(titles, vec!["gd_scene", "ext_resource", "node", "node", "connection"]);
}

#[test]
fn test_deep_nesting_is_an_error() {
    let err = parse_value(&"[".repeat(10_000), 0).unwrap_err();
    assert!(err.is_syntax(), "{:?}", err);
    assert!(matches!(err, GdError::SyntaxError { code: Some(204), .. }));

    let deep_dict = "{\"a\": ".repeat(MAX_DEPTH + 1) + "1" + &"}".repeat(MAX_DEPTH + 1);
    assert!(parse_value(&deep_dict, 0).unwrap_err().is_syntax());

    let deep_object = "Array(".repeat(MAX_DEPTH + 1) + &")".repeat(MAX_DEPTH + 1);
    assert!(parse_value(&deep_object, 0).unwrap_err().is_syntax());
}

#[test]
fn test_nesting_up_to_the_limit_parses() {
    let text = "[".repeat(MAX_DEPTH) + &"]".repeat(MAX_DEPTH);
    let (mut value, end) = parse_value(&text, 0).unwrap();
    assert_eq!(end, text.len());

    let mut depth = 1;
    while let Value::List(mut items) = value {
        match items.pop() {
            Some(inner) => {
                value = inner;
                depth += 1;
            }
            None => break,
        }
    }
    assert_eq!(depth, MAX_DEPTH);
}
