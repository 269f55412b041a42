//! Invariant testing: build commands from arbitrary scenarios and check every classification rule.
//!
//! This module provides [`check_classification_invariants`], which:
//! 1. Builds one entity type and one entry per [`RecordSpec`]
//! 2. Adds the entries to a single command, checking each accept/reject decision
//! 3. Compares every column modification with the expected role matrix
//! 4. Checks parameter-name uniqueness and the result-propagation flag
//! 5. Propagates synthetic store values and checks they land in the read properties
//!
//! This module is feature-gated behind `testing`.

use alloc::format;
use alloc::vec::Vec;
use arbitrary::{Arbitrary, Unstructured};
use hashbrown::HashSet;

use crate::testing::new_command;
use crate::{
    ChangeRecord, ColumnRoles, EntityEntry, EntityState, EntityType, EntryId, Error, Property,
    Value,
};

/// Flags of one generated property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Arbitrary)]
pub struct PropertySpec {
    /// Part of the primary key.
    pub is_key: bool,
    /// Checked for concurrent modification.
    pub is_concurrency_token: bool,
    /// Generated by the store on insert.
    pub generate_value_on_add: bool,
    /// Computed by the store on every write.
    pub is_store_computed: bool,
    /// The entry holds a temporary placeholder for this property.
    pub has_temporary_value: bool,
}

/// One generated change record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSpec {
    /// Lifecycle state of the record.
    pub state: EntityState,
    /// Properties in declaration order.
    pub properties: Vec<PropertySpec>,
}

/// Records mapped to the same row, added to one command in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    /// The records.
    pub records: Vec<RecordSpec>,
}

impl<'a> Arbitrary<'a> for RecordSpec {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let state = EntityState::arbitrary(u)?;
        let num_props: usize = u.int_in_range(0..=6)?;
        let properties = (0..num_props)
            .map(|_| PropertySpec::arbitrary(u))
            .collect::<arbitrary::Result<_>>()?;
        Ok(Self { state, properties })
    }
}

impl<'a> Arbitrary<'a> for Scenario {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let num_records: usize = u.int_in_range(1..=3)?;
        let records = (0..num_records)
            .map(|_| RecordSpec::arbitrary(u))
            .collect::<arbitrary::Result<_>>()?;
        Ok(Self { records })
    }
}

/// The roles a property must get, written directly from the role matrix.
fn expected_roles(state: EntityState, spec: &PropertySpec) -> Option<ColumnRoles> {
    match state {
        EntityState::Added => {
            let is_read = spec.has_temporary_value || (!spec.is_key && spec.is_store_computed);
            Some(ColumnRoles {
                key: spec.is_key,
                condition: false,
                read: is_read,
                write: !is_read,
            })
        }
        EntityState::Modified => {
            let is_read = !spec.is_key && spec.is_store_computed;
            Some(ColumnRoles {
                key: spec.is_key,
                condition: spec.is_key || spec.is_concurrency_token,
                read: is_read,
                write: !spec.is_key && !is_read,
            })
        }
        EntityState::Deleted => (spec.is_key || spec.is_concurrency_token).then_some(ColumnRoles {
            key: spec.is_key,
            condition: true,
            read: false,
            write: false,
        }),
        EntityState::Unchanged | EntityState::Detached => None,
    }
}

fn build_entry(index: usize, spec: &RecordSpec) -> EntityEntry {
    let mut entity_type = EntityType::new(format!("E{index}"));
    for (i, p) in spec.properties.iter().enumerate() {
        let mut property = Property::new(format!("P{i}")).column(format!("C{i}"));
        if p.is_key {
            property = property.key();
        }
        if p.is_concurrency_token {
            property = property.concurrency_token();
        }
        if p.generate_value_on_add {
            property = property.generate_value_on_add();
        }
        if p.is_store_computed {
            property = property.store_computed();
        }
        entity_type = entity_type.with_property(property);
    }

    let mut entry = EntityEntry::new(entity_type, spec.state);
    for (i, p) in spec.properties.iter().enumerate() {
        let value = i64::try_from(i).unwrap_or(i64::MAX);
        entry = entry
            .set(i, value)
            .unwrap()
            .mark_as_temporary(i, p.has_temporary_value)
            .unwrap();
    }
    entry
}

/// Build a command from the scenario and check every invariant.
///
/// This function is designed to be called from both the honggfuzz harness and
/// from regression tests. It panics on any violated invariant.
pub fn check_classification_invariants(scenario: &Scenario) {
    let mut records: Vec<EntityEntry> = scenario
        .records
        .iter()
        .enumerate()
        .map(|(i, spec)| build_entry(i, spec))
        .collect();

    let mut command = new_command();
    let mut accepted = Vec::new();

    for (index, record) in records.iter().enumerate() {
        let state = record.entity_state();
        let existing = command.entity_state();
        let columns_before = command.column_modifications().len();
        let result = command.add_entry(EntryId::new(index), record);

        match (state.operation(), existing) {
            (None, _) => {
                assert_eq!(result, Err(Error::InvalidEntityState(state)));
            }
            (Some(_), Some(expected)) if expected != state => {
                assert_eq!(
                    result,
                    Err(Error::MixedEntityStates {
                        expected,
                        found: state,
                    })
                );
            }
            (Some(_), _) => {
                assert_eq!(result, Ok(()));
                accepted.push(index);
            }
        }

        if result.is_err() {
            assert_eq!(
                command.column_modifications().len(),
                columns_before,
                "Rejected record must not add columns"
            );
            assert_eq!(command.entity_state(), existing);
        }
    }

    assert_eq!(
        command.entries(),
        accepted.iter().copied().map(EntryId::new).collect::<Vec<_>>()
    );

    // Expected column sequence: accepted records in order, properties in declaration order.
    let expected: Vec<(usize, usize, ColumnRoles)> = accepted
        .iter()
        .flat_map(|&r| {
            let spec = &scenario.records[r];
            spec.properties
                .iter()
                .enumerate()
                .filter_map(move |(p, flags)| {
                    expected_roles(spec.state, flags).map(|roles| (r, p, roles))
                })
        })
        .collect();

    let columns = command.column_modifications();
    assert_eq!(columns.len(), expected.len(), "Column count mismatch");
    for (column, (r, p, roles)) in columns.iter().zip(&expected) {
        assert_eq!(column.entry(), EntryId::new(*r));
        assert_eq!(column.property_index(), *p);
        assert_eq!(column.column_name(), format!("C{p}"));
        assert_eq!(column.roles(), *roles, "Roles mismatch for {column:?}");
        assert!(!(column.is_read() && column.is_write()));
        assert_eq!(column.parameter_name().is_some(), column.is_write());
        assert_eq!(column.original_parameter_name().is_some(), column.is_condition());
        assert_eq!(column.output_parameter_name().is_some(), column.is_read());
    }

    let names: Vec<&str> = columns
        .iter()
        .flat_map(|c| {
            [
                c.parameter_name(),
                c.original_parameter_name(),
                c.output_parameter_name(),
            ]
        })
        .flatten()
        .collect();
    let unique: HashSet<&str> = names.iter().copied().collect();
    assert_eq!(unique.len(), names.len(), "Parameter names must be unique");

    let reads: Vec<(EntryId, usize)> = command
        .read_columns()
        .map(|c| (c.entry(), c.property_index()))
        .collect();
    assert_eq!(command.requires_result_propagation(), !reads.is_empty());

    let store_values: Vec<Value> = (0..reads.len())
        .map(|n| Value::Integer(1000 + i64::try_from(n).unwrap_or(0)))
        .collect();
    command
        .propagate_results(&mut records, store_values.clone())
        .unwrap();
    for ((entry, property), value) in reads.iter().zip(&store_values) {
        let record = &records[entry.index()];
        assert_eq!(record.current_value(*property), Some(value));
        assert!(!record.has_temporary_value(*property));
    }
}
