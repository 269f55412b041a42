//! Derivation of the roles a property's column plays in a command.
//!
//! | Operation | key | condition | read | write |
//! |-----------|-----|-----------|------|-------|
//! | INSERT | key | no | temporary value, or non-key store-computed | not read |
//! | UPDATE | key | key or concurrency token | non-key store-computed | non-key, not read |
//! | DELETE | key | key or concurrency token | no | no |
//!
//! A DELETE only classifies key and concurrency-token properties; every other
//! property has no column in the command.

use crate::metadata::Property;
use crate::state::Operation;

/// The roles of one column in one command.
///
/// The roles are independent: a computed concurrency token in an UPDATE is
/// both a condition and read back.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnRoles {
    /// The property is part of the primary key.
    pub key: bool,
    /// The original value is matched in the WHERE clause.
    pub condition: bool,
    /// The store-assigned value is read back after execution.
    pub read: bool,
    /// The current value is sent as an input parameter.
    pub write: bool,
}

/// Classifies a property, or returns `None` when it has no column in the command.
pub(crate) fn classify(
    operation: Operation,
    property: &Property,
    has_temporary_value: bool,
) -> Option<ColumnRoles> {
    match operation {
        Operation::Insert => Some(insert_roles(property, has_temporary_value)),
        Operation::Update => Some(update_roles(property)),
        Operation::Delete => delete_roles(property),
    }
}

fn insert_roles(property: &Property, has_temporary_value: bool) -> ColumnRoles {
    let is_key = property.is_key();
    // A resolved generated value (not temporary) is sent like any client value.
    let is_read = has_temporary_value || (!is_key && property.is_store_computed());
    ColumnRoles {
        key: is_key,
        condition: false,
        read: is_read,
        write: !is_read,
    }
}

fn update_roles(property: &Property) -> ColumnRoles {
    let is_key = property.is_key();
    let is_read = !is_key && property.is_store_computed();
    ColumnRoles {
        key: is_key,
        condition: is_key || property.is_concurrency_token(),
        read: is_read,
        write: !is_key && !is_read,
    }
}

fn delete_roles(property: &Property) -> Option<ColumnRoles> {
    let is_key = property.is_key();
    if !is_key && !property.is_concurrency_token() {
        return None;
    }
    Some(ColumnRoles {
        key: is_key,
        condition: true,
        read: false,
        write: false,
    })
}
