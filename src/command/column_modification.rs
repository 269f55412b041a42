//! Per-column classification inside a modification command.

use alloc::string::String;

use super::ColumnRoles;
use crate::entry::EntryId;
use crate::metadata::Property;
use crate::value::Value;

/// The role one property of one change record plays in a command.
///
/// Besides the four role flags, a column modification carries what the
/// statement generator needs to emit the column: the column name, snapshots
/// of the record's current and original value taken when the record was
/// added, and the parameter names allocated for each role:
///
/// - [`parameter_name`](Self::parameter_name) when the column is written,
/// - [`original_parameter_name`](Self::original_parameter_name) when it is a condition,
/// - [`output_parameter_name`](Self::output_parameter_name) when it is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnModification {
    pub(crate) entry: EntryId,
    pub(crate) property_index: usize,
    pub(crate) property: Property,
    pub(crate) column_name: String,
    pub(crate) roles: ColumnRoles,
    pub(crate) value: Value,
    pub(crate) original_value: Value,
    pub(crate) parameter_name: Option<String>,
    pub(crate) original_parameter_name: Option<String>,
    pub(crate) output_parameter_name: Option<String>,
}

impl ColumnModification {
    /// Handle of the change record this column belongs to.
    #[must_use]
    pub fn entry(&self) -> EntryId {
        self.entry
    }

    /// The property metadata.
    #[must_use]
    pub fn property(&self) -> &Property {
        &self.property
    }

    /// Declaration index of the property in its entity type.
    #[must_use]
    pub fn property_index(&self) -> usize {
        self.property_index
    }

    /// The resolved store column name.
    #[must_use]
    pub fn column_name(&self) -> &str {
        &self.column_name
    }

    /// All four roles at once.
    #[must_use]
    pub fn roles(&self) -> ColumnRoles {
        self.roles
    }

    /// The property is part of the primary key.
    #[must_use]
    pub fn is_key(&self) -> bool {
        self.roles.key
    }

    /// The column appears in the WHERE clause.
    #[must_use]
    pub fn is_condition(&self) -> bool {
        self.roles.condition
    }

    /// The store-assigned value is read back after execution.
    #[must_use]
    pub fn is_read(&self) -> bool {
        self.roles.read
    }

    /// The current value is sent as an input.
    #[must_use]
    pub fn is_write(&self) -> bool {
        self.roles.write
    }

    /// The current value at the time the record was added.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// The original value at the time the record was added.
    #[must_use]
    pub fn original_value(&self) -> &Value {
        &self.original_value
    }

    /// Input parameter carrying [`value`](Self::value), set for written columns.
    #[must_use]
    pub fn parameter_name(&self) -> Option<&str> {
        self.parameter_name.as_deref()
    }

    /// Input parameter carrying [`original_value`](Self::original_value), set for conditions.
    #[must_use]
    pub fn original_parameter_name(&self) -> Option<&str> {
        self.original_parameter_name.as_deref()
    }

    /// Output parameter receiving the store value, set for read columns.
    #[must_use]
    pub fn output_parameter_name(&self) -> Option<&str> {
        self.output_parameter_name.as_deref()
    }
}
