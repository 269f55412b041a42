//! In-memory change record.

use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use hashbrown::HashSet;

use super::{ChangeRecord, ChangeRecordMut};
use crate::errors::Error;
use crate::metadata::EntityType;
use crate::state::EntityState;
use crate::value::Value;

/// A tracked entity held in memory.
///
/// Current and original values start as `NULL`. Entries of the same type
/// share their [`EntityType`].
///
/// # Example
///
/// ```
/// use modification_command::{ChangeRecord, EntityEntry, EntityState, EntityType, Property, Value};
///
/// let ty = EntityType::new("Blog")
///     .with_property(Property::new("Id").key().generate_value_on_add())
///     .with_property(Property::new("Name"));
///
/// let entry = EntityEntry::new(ty, EntityState::Added)
///     .set(0, -1i64).unwrap()
///     .mark_as_temporary(0, true).unwrap()
///     .set(1, "Test").unwrap();
///
/// assert!(entry.has_temporary_value(0));
/// assert_eq!(entry.current_value(1), Some(&Value::from("Test")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityEntry {
    entity_type: Arc<EntityType>,
    state: EntityState,
    current: Vec<Value>,
    original: Vec<Value>,
    temporary: HashSet<usize>,
}

impl EntityEntry {
    /// Creates an entry in the given state with all values `NULL`.
    #[must_use]
    pub fn new(entity_type: impl Into<Arc<EntityType>>, state: EntityState) -> Self {
        let entity_type = entity_type.into();
        let num_props = entity_type.number_of_properties();
        Self {
            entity_type,
            state,
            current: vec![Value::Null; num_props],
            original: vec![Value::Null; num_props],
            temporary: HashSet::new(),
        }
    }

    fn check_index(&self, property: usize) -> Result<(), Error> {
        if property >= self.current.len() {
            return Err(Error::PropertyIndexOutOfBounds(
                property,
                self.current.len(),
            ));
        }
        Ok(())
    }

    /// Sets both the current and the original value of a property.
    ///
    /// # Errors
    ///
    /// * `PropertyIndexOutOfBounds` - If the entity type has no property at `property`.
    pub fn set(mut self, property: usize, value: impl Into<Value>) -> Result<Self, Error> {
        self.check_index(property)?;
        let value = value.into();
        self.original[property] = value.clone();
        self.current[property] = value;
        Ok(self)
    }

    /// Sets only the current value of a property, leaving the original untouched.
    ///
    /// # Errors
    ///
    /// * `PropertyIndexOutOfBounds` - If the entity type has no property at `property`.
    pub fn modify(mut self, property: usize, value: impl Into<Value>) -> Result<Self, Error> {
        self.check_index(property)?;
        self.current[property] = value.into();
        Ok(self)
    }

    /// Marks or unmarks the current value of a property as temporary.
    ///
    /// # Errors
    ///
    /// * `PropertyIndexOutOfBounds` - If the entity type has no property at `property`.
    pub fn mark_as_temporary(mut self, property: usize, is_temporary: bool) -> Result<Self, Error> {
        self.check_index(property)?;
        if is_temporary {
            self.temporary.insert(property);
        } else {
            self.temporary.remove(&property);
        }
        Ok(self)
    }

    /// Changes the lifecycle state.
    pub fn set_state(&mut self, state: EntityState) {
        self.state = state;
    }

    /// The shared entity type.
    #[must_use]
    pub fn shared_entity_type(&self) -> &Arc<EntityType> {
        &self.entity_type
    }
}

impl ChangeRecord for EntityEntry {
    #[inline]
    fn entity_state(&self) -> EntityState {
        self.state
    }

    #[inline]
    fn entity_type(&self) -> &EntityType {
        &self.entity_type
    }

    #[inline]
    fn current_value(&self, property: usize) -> Option<&Value> {
        self.current.get(property)
    }

    #[inline]
    fn original_value(&self, property: usize) -> Option<&Value> {
        self.original.get(property)
    }

    #[inline]
    fn has_temporary_value(&self, property: usize) -> bool {
        self.temporary.contains(&property)
    }
}

impl ChangeRecordMut for EntityEntry {
    fn set_store_value(&mut self, property: usize, value: Value) -> Result<(), Error> {
        self.check_index(property)?;
        self.current[property] = value;
        self.temporary.remove(&property);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::Property;

    fn blog() -> EntityType {
        EntityType::new("Blog")
            .with_property(Property::new("Id").key())
            .with_property(Property::new("Name"))
    }

    #[test]
    fn test_new_entry_is_null() {
        let entry = EntityEntry::new(blog(), EntityState::Added);
        assert_eq!(entry.current_value(0), Some(&Value::Null));
        assert_eq!(entry.original_value(1), Some(&Value::Null));
        assert_eq!(entry.current_value(2), None);
        assert!(!entry.has_temporary_value(0));
    }

    #[test]
    fn test_modify_keeps_original() {
        let entry = EntityEntry::new(blog(), EntityState::Modified)
            .set(1, "Old")
            .unwrap()
            .modify(1, "New")
            .unwrap();
        assert_eq!(entry.current_value(1), Some(&Value::from("New")));
        assert_eq!(entry.original_value(1), Some(&Value::from("Old")));
    }

    #[test]
    fn test_out_of_bounds() {
        let entry = EntityEntry::new(blog(), EntityState::Added);
        assert_eq!(
            entry.clone().set(5, 1i64),
            Err(Error::PropertyIndexOutOfBounds(5, 2))
        );
        assert_eq!(
            entry.mark_as_temporary(2, true),
            Err(Error::PropertyIndexOutOfBounds(2, 2))
        );
    }

    #[test]
    fn test_store_value_clears_temporary_mark() {
        let mut entry = EntityEntry::new(blog(), EntityState::Added)
            .set(0, -1i64)
            .unwrap()
            .mark_as_temporary(0, true)
            .unwrap();
        entry.set_store_value(0, Value::Integer(42)).unwrap();
        assert_eq!(entry.current_value(0), Some(&Value::Integer(42)));
        assert!(!entry.has_temporary_value(0));
    }

    #[test]
    fn test_unmark_temporary() {
        let entry = EntityEntry::new(blog(), EntityState::Added)
            .mark_as_temporary(0, true)
            .unwrap()
            .mark_as_temporary(0, false)
            .unwrap();
        assert!(!entry.has_temporary_value(0));
    }
}
