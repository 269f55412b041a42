//! Change record traits (object-safe).

use core::fmt;

use crate::errors::Error;
use crate::metadata::EntityType;
use crate::state::EntityState;
use crate::value::Value;

/// Handle of a change record inside a caller-held collection.
///
/// Column modifications refer to their record through this handle instead of
/// owning or borrowing it: the tracker owns the records, and the handle is
/// the index of the record in the slice later passed to
/// [`ModificationCommand::propagate_results`](crate::ModificationCommand::propagate_results).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(usize);

impl EntryId {
    /// Creates a handle for the record at `index`.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// The index of the record in its collection.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for EntryId {
    #[inline]
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entry #{}", self.0)
    }
}

/// A tracked entity snapshot.
///
/// Properties are addressed by their declaration index in
/// [`entity_type`](Self::entity_type). Out-of-range indices yield `None` or
/// `false` rather than panicking.
pub trait ChangeRecord {
    /// The lifecycle state of the entity.
    fn entity_state(&self) -> EntityState;

    /// The metadata of the entity's type.
    fn entity_type(&self) -> &EntityType;

    /// The current value of the property.
    fn current_value(&self, property: usize) -> Option<&Value>;

    /// The value the property had when the entity was last loaded or saved.
    fn original_value(&self, property: usize) -> Option<&Value>;

    /// Whether the current value is a placeholder awaiting a store-assigned value.
    fn has_temporary_value(&self, property: usize) -> bool;
}

impl<T: ChangeRecord + ?Sized> ChangeRecord for &T {
    #[inline]
    fn entity_state(&self) -> EntityState {
        T::entity_state(self)
    }

    #[inline]
    fn entity_type(&self) -> &EntityType {
        T::entity_type(self)
    }

    #[inline]
    fn current_value(&self, property: usize) -> Option<&Value> {
        T::current_value(self, property)
    }

    #[inline]
    fn original_value(&self, property: usize) -> Option<&Value> {
        T::original_value(self, property)
    }

    #[inline]
    fn has_temporary_value(&self, property: usize) -> bool {
        T::has_temporary_value(self, property)
    }
}

/// A change record that accepts values produced by the store.
pub trait ChangeRecordMut: ChangeRecord {
    /// Replaces the current value of the property with a store-assigned value
    /// and clears its temporary mark.
    ///
    /// Must not fail for an index below the entity type's
    /// [`number_of_properties`](EntityType::number_of_properties).
    /// [`ModificationCommand::propagate_results`](crate::ModificationCommand::propagate_results)
    /// checks indices up front and does not roll back earlier writes.
    ///
    /// # Errors
    ///
    /// * `PropertyIndexOutOfBounds` - If the entity type has no property at `property`.
    fn set_store_value(&mut self, property: usize, value: Value) -> Result<(), Error>;
}
