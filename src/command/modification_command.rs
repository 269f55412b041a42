//! The pending modification of one table row.

use alloc::string::String;
use alloc::vec::Vec;

use super::classification::classify;
use super::{ColumnModification, ParameterNameGenerator};
use crate::entry::{ChangeRecord, ChangeRecordMut, EntryId};
use crate::errors::Error;
use crate::metadata::{ColumnMapper, RelationalColumnMapper};
use crate::state::{EntityState, Operation};
use crate::value::Value;

/// A single INSERT, UPDATE or DELETE against one row.
///
/// A command aggregates every change record mapped to the same row (several
/// entity types can share a table) and classifies each of their properties
/// into [`ColumnModification`]s. Records are referenced by [`EntryId`]; the
/// caller keeps ownership of them.
///
/// # Example
///
/// ```
/// use modification_command::{
///     EntityEntry, EntityState, EntityType, EntryId, ModificationCommand, ParameterNameGenerator,
///     Property, RelationalColumnMapper,
/// };
///
/// let ty = EntityType::new("Blog")
///     .with_property(Property::new("Id").key().generate_value_on_add().column("Col1"))
///     .with_property(Property::new("Name").column("Col2"));
///
/// let entry = EntityEntry::new(ty, EntityState::Added)
///     .set(0, -1i64).unwrap()
///     .mark_as_temporary(0, true).unwrap()
///     .set(1, "Test").unwrap();
///
/// let mut command = ModificationCommand::new(
///     "T1",
///     None,
///     ParameterNameGenerator::new(),
///     RelationalColumnMapper,
/// );
/// command.add_entry(EntryId::new(0), &entry).unwrap();
///
/// let columns = command.column_modifications();
/// assert_eq!(columns.len(), 2);
/// assert!(columns[0].is_read() && !columns[0].is_write());
/// assert!(columns[1].is_write() && !columns[1].is_read());
/// assert!(command.requires_result_propagation());
/// ```
#[derive(Debug, Clone)]
pub struct ModificationCommand<M = RelationalColumnMapper> {
    table_name: String,
    schema_name: Option<String>,
    parameter_names: ParameterNameGenerator,
    column_mapper: M,
    entries: Vec<EntryId>,
    entity_state: Option<EntityState>,
    column_modifications: Vec<ColumnModification>,
}

impl<M: ColumnMapper> ModificationCommand<M> {
    /// Creates an empty command targeting `schema_name.table_name`.
    #[must_use]
    pub fn new(
        table_name: impl Into<String>,
        schema_name: Option<&str>,
        parameter_names: ParameterNameGenerator,
        column_mapper: M,
    ) -> Self {
        Self {
            table_name: table_name.into(),
            schema_name: schema_name.map(String::from),
            parameter_names,
            column_mapper,
            entries: Vec::new(),
            entity_state: None,
            column_modifications: Vec::new(),
        }
    }

    /// Adds a change record targeting this command's row.
    ///
    /// The record's properties are classified immediately, in declaration
    /// order, after the columns of previously added records.
    ///
    /// # Arguments
    ///
    /// * `id` - Handle of the record in the caller's collection.
    /// * `record` - The record to classify.
    ///
    /// # Errors
    ///
    /// * `InvalidEntityState` - If the record is `Unchanged` or `Detached`.
    /// * `MixedEntityStates` - If the record's state differs from the records already added.
    ///
    /// On error the command is left unchanged.
    pub fn add_entry<R: ChangeRecord + ?Sized>(
        &mut self,
        id: EntryId,
        record: &R,
    ) -> Result<(), Error> {
        let state = record.entity_state();
        let Some(operation) = state.operation() else {
            tracing::debug!(
                table = %self.table_name,
                %id,
                %state,
                "rejected change record without modification semantics"
            );
            return Err(Error::InvalidEntityState(state));
        };
        if let Some(expected) = self.entity_state {
            if expected != state {
                tracing::debug!(
                    table = %self.table_name,
                    %id,
                    %expected,
                    found = %state,
                    "rejected change record with mixed lifecycle state"
                );
                return Err(Error::MixedEntityStates {
                    expected,
                    found: state,
                });
            }
        }

        let entity_type = record.entity_type();
        let mut columns = Vec::with_capacity(entity_type.number_of_properties());
        for (property_index, property) in entity_type.properties().enumerate() {
            let Some(roles) = classify(
                operation,
                property,
                record.has_temporary_value(property_index),
            ) else {
                continue;
            };

            let column_name = self.column_mapper.column_name(property);
            let parameter_name = if roles.write {
                self.parameter_names.next()
            } else {
                None
            };
            let original_parameter_name = if roles.condition {
                self.parameter_names.next()
            } else {
                None
            };
            let output_parameter_name = if roles.read {
                self.parameter_names.next()
            } else {
                None
            };

            tracing::trace!(
                table = %self.table_name,
                column = %column_name,
                is_key = roles.key,
                is_condition = roles.condition,
                is_read = roles.read,
                is_write = roles.write,
                "classified column"
            );

            columns.push(ColumnModification {
                entry: id,
                property_index,
                property: property.clone(),
                column_name,
                roles,
                value: record
                    .current_value(property_index)
                    .cloned()
                    .unwrap_or_default(),
                original_value: record
                    .original_value(property_index)
                    .cloned()
                    .unwrap_or_default(),
                parameter_name,
                original_parameter_name,
                output_parameter_name,
            });
        }

        tracing::debug!(
            table = %self.table_name,
            %id,
            %operation,
            columns = columns.len(),
            "added change record to modification command"
        );

        self.entity_state = Some(state);
        self.entries.push(id);
        self.column_modifications.extend(columns);
        Ok(())
    }

    /// Writes store-generated values back into the records.
    ///
    /// `values` holds one value per read column, in the order of
    /// [`read_columns`](Self::read_columns). `records` is the collection the
    /// [`EntryId`]s index into. The value count, every handle and every
    /// property index are checked before the first write, so these errors
    /// leave all records unmodified. Writes are not rolled back if
    /// [`ChangeRecordMut::set_store_value`] fails for an in-range index.
    ///
    /// # Errors
    ///
    /// * `ResultCountMismatch` - If the number of values differs from the number of read columns.
    /// * `EntryNotFound` - If a record handle is outside `records`.
    /// * `PropertyIndexOutOfBounds` - If a record has fewer properties than when it was added.
    pub fn propagate_results<R: ChangeRecordMut>(
        &self,
        records: &mut [R],
        values: impl IntoIterator<Item = Value>,
    ) -> Result<(), Error> {
        let values: Vec<Value> = values.into_iter().collect();
        let reads: Vec<&ColumnModification> = self.read_columns().collect();
        if reads.len() != values.len() {
            return Err(Error::ResultCountMismatch {
                expected: reads.len(),
                found: values.len(),
            });
        }

        for column in &reads {
            let record = records
                .get(column.entry.index())
                .ok_or(Error::EntryNotFound(column.entry))?;
            let num_props = record.entity_type().number_of_properties();
            if column.property_index >= num_props {
                return Err(Error::PropertyIndexOutOfBounds(
                    column.property_index,
                    num_props,
                ));
            }
        }

        for (column, value) in reads.into_iter().zip(values) {
            let record = records
                .get_mut(column.entry.index())
                .ok_or(Error::EntryNotFound(column.entry))?;
            record.set_store_value(column.property_index, value)?;
        }

        tracing::debug!(
            table = %self.table_name,
            entries = self.entries.len(),
            "propagated store-generated values"
        );
        Ok(())
    }

    /// Allocator for further statement parameters.
    ///
    /// Continues after the names already assigned to column modifications.
    pub fn parameter_name_generator(&mut self) -> &mut ParameterNameGenerator {
        &mut self.parameter_names
    }
}

impl<M> ModificationCommand<M> {
    /// The target table.
    #[must_use]
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// The target schema, if any.
    #[must_use]
    pub fn schema_name(&self) -> Option<&str> {
        self.schema_name.as_deref()
    }

    /// The lifecycle state shared by the added records, `None` while empty.
    #[must_use]
    pub fn entity_state(&self) -> Option<EntityState> {
        self.entity_state
    }

    /// The operation this command performs, `None` while empty.
    #[must_use]
    pub fn operation(&self) -> Option<Operation> {
        self.entity_state.and_then(EntityState::operation)
    }

    /// Handles of the added records, in addition order.
    #[must_use]
    pub fn entries(&self) -> &[EntryId] {
        &self.entries
    }

    /// Whether no record has been added yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The classified columns, record by record in addition order.
    #[must_use]
    pub fn column_modifications(&self) -> &[ColumnModification] {
        &self.column_modifications
    }

    /// Columns whose current value is sent.
    pub fn write_columns(&self) -> impl Iterator<Item = &ColumnModification> {
        self.column_modifications.iter().filter(|c| c.is_write())
    }

    /// Columns matched in the WHERE clause.
    pub fn condition_columns(&self) -> impl Iterator<Item = &ColumnModification> {
        self.column_modifications.iter().filter(|c| c.is_condition())
    }

    /// Columns read back after execution.
    pub fn read_columns(&self) -> impl Iterator<Item = &ColumnModification> {
        self.column_modifications.iter().filter(|c| c.is_read())
    }

    /// Whether the executor must capture values returned by the store.
    #[must_use]
    pub fn requires_result_propagation(&self) -> bool {
        self.column_modifications.iter().any(ColumnModification::is_read)
    }
}
