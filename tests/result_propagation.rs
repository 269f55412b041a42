//! Tests for writing store-generated values back into change records.

use std::sync::Arc;

use modification_command::{
    ChangeRecord, EntityEntry, EntityState, EntityType, EntryId, Error, ModificationCommand,
    ParameterNameGenerator, Property, RelationalColumnMapper, Value,
};

fn account() -> EntityType {
    EntityType::new("Account")
        .with_property(Property::new("Id").key().generate_value_on_add())
        .with_property(Property::new("Owner"))
        .with_property(Property::new("RowVersion").concurrency_token().store_computed())
}

fn new_command() -> ModificationCommand {
    ModificationCommand::new(
        "Accounts",
        Some("bank"),
        ParameterNameGenerator::with_prefix("@p"),
        RelationalColumnMapper,
    )
}

#[test]
fn test_insert_propagates_key_and_computed_values_in_order() {
    let mut records = vec![
        EntityEntry::new(account(), EntityState::Added)
            .set(0, -7i64)
            .unwrap()
            .mark_as_temporary(0, true)
            .unwrap()
            .set(1, "alice")
            .unwrap(),
    ];
    let mut command = new_command();
    command.add_entry(EntryId::new(0), &records[0]).unwrap();

    let read: Vec<&str> = command.read_columns().map(|c| c.column_name()).collect();
    assert_eq!(read, ["Id", "RowVersion"]);
    let outputs: Vec<Option<&str>> = command
        .read_columns()
        .map(|c| c.output_parameter_name())
        .collect();
    assert_eq!(outputs, [Some("@p0"), Some("@p2")]);

    command
        .propagate_results(
            &mut records,
            [Value::Integer(101), Value::Blob(vec![0, 0, 0, 1])],
        )
        .unwrap();

    let record = &records[0];
    assert_eq!(record.current_value(0), Some(&Value::Integer(101)));
    assert!(!record.has_temporary_value(0));
    assert_eq!(record.current_value(1), Some(&Value::from("alice")));
    assert_eq!(record.current_value(2), Some(&Value::Blob(vec![0, 0, 0, 1])));
}

#[test]
fn test_update_propagates_new_row_version() {
    let mut records = vec![
        EntityEntry::new(account(), EntityState::Modified)
            .set(0, 5i64)
            .unwrap()
            .set(1, "bob")
            .unwrap()
            .set(2, vec![0u8, 1])
            .unwrap()
            .modify(1, "robert")
            .unwrap(),
    ];
    let mut command = new_command();
    command.add_entry(EntryId::new(0), &records[0]).unwrap();

    let version = &command.column_modifications()[2];
    assert!(version.is_condition() && version.is_read() && !version.is_write());
    assert_eq!(version.original_value(), &Value::Blob(vec![0, 1]));

    command
        .propagate_results(&mut records, [Value::Blob(vec![0, 2])])
        .unwrap();
    assert_eq!(records[0].current_value(2), Some(&Value::Blob(vec![0, 2])));
    assert_eq!(records[0].current_value(1), Some(&Value::from("robert")));
}

#[test]
fn test_delete_accepts_empty_result() {
    let mut records = vec![EntityEntry::new(account(), EntityState::Deleted)];
    let mut command = new_command();
    command.add_entry(EntryId::new(0), &records[0]).unwrap();

    assert!(!command.requires_result_propagation());
    command.propagate_results(&mut records, Vec::new()).unwrap();
}

#[test]
fn test_too_many_values_are_rejected() {
    let mut records = vec![EntityEntry::new(account(), EntityState::Modified)];
    let mut command = new_command();
    command.add_entry(EntryId::new(0), &records[0]).unwrap();

    assert_eq!(
        command.propagate_results(&mut records, [Value::Null, Value::Null]),
        Err(Error::ResultCountMismatch {
            expected: 1,
            found: 2
        })
    );
}

#[test]
fn test_missing_record_is_rejected_before_any_write() {
    let first = EntityEntry::new(account(), EntityState::Added)
        .set(0, -1i64)
        .unwrap()
        .mark_as_temporary(0, true)
        .unwrap();
    let second = first.clone();

    let mut command = new_command();
    command.add_entry(EntryId::new(0), &first).unwrap();
    command.add_entry(EntryId::new(1), &second).unwrap();

    // Only the first record is handed back.
    let mut records = vec![first];
    assert_eq!(
        command.propagate_results(
            &mut records,
            [
                Value::Integer(1),
                Value::Null,
                Value::Integer(2),
                Value::Null
            ]
        ),
        Err(Error::EntryNotFound(EntryId::new(1)))
    );
    assert_eq!(records[0].current_value(0), Some(&Value::Integer(-1)));
    assert!(records[0].has_temporary_value(0));
}

#[test]
fn test_record_missing_a_read_property_is_rejected_before_any_write() {
    let first = EntityEntry::new(account(), EntityState::Added)
        .set(0, -1i64)
        .unwrap()
        .mark_as_temporary(0, true)
        .unwrap();
    let second = first.clone();

    let mut command = new_command();
    command.add_entry(EntryId::new(0), &first).unwrap();
    command.add_entry(EntryId::new(1), &second).unwrap();

    // The second record comes back with a narrower type lacking `RowVersion`.
    let narrow = EntityType::new("Account")
        .with_property(Property::new("Id").key().generate_value_on_add())
        .with_property(Property::new("Owner"));
    let mut records = vec![first, EntityEntry::new(narrow, EntityState::Added)];
    assert_eq!(
        command.propagate_results(
            &mut records,
            [
                Value::Integer(1),
                Value::Null,
                Value::Integer(2),
                Value::Null
            ]
        ),
        Err(Error::PropertyIndexOutOfBounds(2, 2))
    );
    assert_eq!(records[0].current_value(0), Some(&Value::Integer(-1)));
    assert!(records[0].has_temporary_value(0));
}

#[test]
fn test_saved_record_is_updated_by_a_follow_up_command() {
    let ty = Arc::new(account());
    let mut records = vec![
        EntityEntry::new(Arc::clone(&ty), EntityState::Added)
            .set(0, -1i64)
            .unwrap()
            .mark_as_temporary(0, true)
            .unwrap()
            .set(1, "carol")
            .unwrap(),
    ];
    assert!(Arc::ptr_eq(records[0].shared_entity_type(), &ty));

    let mut insert = new_command();
    insert.add_entry(EntryId::new(0), &records[0]).unwrap();
    insert
        .propagate_results(&mut records, [Value::Integer(9), Value::Blob(vec![1])])
        .unwrap();

    // Once saved, the record is unchanged and has nothing to persist.
    records[0].set_state(EntityState::Unchanged);
    assert_eq!(
        new_command().add_entry(EntryId::new(0), &records[0]),
        Err(Error::InvalidEntityState(EntityState::Unchanged))
    );

    records[0].set_state(EntityState::Modified);
    let mut update = new_command();
    update.add_entry(EntryId::new(0), &records[0]).unwrap();

    let id = &update.column_modifications()[0];
    assert!(id.is_condition() && !id.is_write());
    assert_eq!(id.value(), &Value::Integer(9));
    assert_eq!(id.original_parameter_name(), Some("@p0"));
    let version = &update.column_modifications()[2];
    assert!(version.is_condition() && version.is_read());
    assert_eq!(version.value(), &Value::Blob(vec![1]));
}
