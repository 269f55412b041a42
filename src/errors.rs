//! Submodule defining the errors used across the crate.

use crate::entry::EntryId;
use crate::state::EntityState;

/// Errors raised while building a modification command or writing back its results.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The record's lifecycle state has no modification semantics (`Unchanged` or `Detached`).
    #[error("Cannot create a modification command for an entity in state '{0}'")]
    InvalidEntityState(EntityState),
    /// The record's lifecycle state differs from the records already in the command.
    #[error("Cannot add an entity in state '{found}' to a command for entities in state '{expected}'")]
    MixedEntityStates {
        /// State shared by the records already added.
        expected: EntityState,
        /// State of the rejected record.
        found: EntityState,
    },
    /// The store returned a different number of values than the command reads.
    #[error("Expected {expected} store-generated values, got {found}")]
    ResultCountMismatch {
        /// Number of read columns in the command.
        expected: usize,
        /// Number of values supplied.
        found: usize,
    },
    /// A record handle does not point into the supplied record collection.
    #[error("No change record for {0}")]
    EntryNotFound(EntryId),
    /// The provided index is out of bounds for the number of properties in the entity type.
    #[error("Property index {0} out of bounds for entity type with {1} properties")]
    PropertyIndexOutOfBounds(usize, usize),
}
