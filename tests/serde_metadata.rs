//! Tests for loading entity metadata from configuration.
#![cfg(feature = "serde")]

use modification_command::{EntityState, EntityType, Property, Value};

#[test]
fn test_entity_type_from_json() {
    let json = r#"{
        "name": "Blog",
        "properties": [
            { "name": "Id", "column": "Col1", "is_key": true, "generate_value_on_add": true },
            { "name": "Name", "column": "Col2" },
            { "name": "Version", "is_concurrency_token": true, "is_store_computed": true }
        ]
    }"#;

    let ty: EntityType = serde_json::from_str(json).unwrap();
    assert_eq!(ty.name(), "Blog");
    assert_eq!(
        ty,
        EntityType::new("Blog")
            .with_property(Property::new("Id").key().generate_value_on_add().column("Col1"))
            .with_property(Property::new("Name").column("Col2"))
            .with_property(Property::new("Version").concurrency_token().store_computed())
    );
}

#[test]
fn test_entity_type_roundtrip_keeps_declaration_order() {
    let ty = EntityType::new("Order")
        .with_property(Property::new("Total"))
        .with_property(Property::new("Id").key());

    let json = serde_json::to_string(&ty).unwrap();
    let back: EntityType = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ty);
    assert_eq!(back.key_indices(), vec![1]);
}

#[test]
fn test_state_and_value_serialization() {
    assert_eq!(
        serde_json::to_string(&EntityState::Modified).unwrap(),
        "\"Modified\""
    );
    let value: Value = serde_json::from_str(r#"{"Integer":42}"#).unwrap();
    assert_eq!(value, Value::Integer(42));
}
