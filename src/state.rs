//! Entity lifecycle states and the operations they map to.
//!
//! Only three of the five lifecycle states describe a modification:
//!
//! | State       | Operation |
//! |-------------|-----------|
//! | `Added`     | INSERT    |
//! | `Modified`  | UPDATE    |
//! | `Deleted`   | DELETE    |
//! | `Unchanged` | none      |
//! | `Detached`  | none      |

use core::fmt;

use crate::errors::Error;

/// Lifecycle state of a tracked entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub enum EntityState {
    /// Tracked, no pending changes.
    Unchanged,
    /// New entity, not yet in the store.
    Added,
    /// Existing entity with pending changes.
    Modified,
    /// Existing entity marked for removal.
    Deleted,
    /// Not known to the tracker.
    Detached,
}

impl EntityState {
    /// Returns the operation this state maps to, if any.
    #[must_use]
    pub const fn operation(self) -> Option<Operation> {
        match self {
            EntityState::Added => Some(Operation::Insert),
            EntityState::Modified => Some(Operation::Update),
            EntityState::Deleted => Some(Operation::Delete),
            EntityState::Unchanged | EntityState::Detached => None,
        }
    }
}

impl fmt::Display for EntityState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityState::Unchanged => "Unchanged",
            EntityState::Added => "Added",
            EntityState::Modified => "Modified",
            EntityState::Deleted => "Deleted",
            EntityState::Detached => "Detached",
        };
        f.write_str(name)
    }
}

/// The data-modification operation a command performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// INSERT a new row.
    Insert,
    /// UPDATE an existing row.
    Update,
    /// DELETE an existing row.
    Delete,
}

impl Operation {
    /// Returns the lifecycle state that produces this operation.
    #[must_use]
    pub const fn entity_state(self) -> EntityState {
        match self {
            Operation::Insert => EntityState::Added,
            Operation::Update => EntityState::Modified,
            Operation::Delete => EntityState::Deleted,
        }
    }
}

impl TryFrom<EntityState> for Operation {
    type Error = Error;

    fn try_from(state: EntityState) -> Result<Self, Self::Error> {
        state.operation().ok_or(Error::InvalidEntityState(state))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::Insert => "INSERT",
            Operation::Update => "UPDATE",
            Operation::Delete => "DELETE",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modification_states_map_to_operations() {
        assert_eq!(Operation::try_from(EntityState::Added), Ok(Operation::Insert));
        assert_eq!(Operation::try_from(EntityState::Modified), Ok(Operation::Update));
        assert_eq!(Operation::try_from(EntityState::Deleted), Ok(Operation::Delete));
    }

    #[test]
    fn test_non_modification_states_are_rejected() {
        for state in [EntityState::Unchanged, EntityState::Detached] {
            assert_eq!(
                Operation::try_from(state),
                Err(Error::InvalidEntityState(state))
            );
        }
    }

    #[test]
    fn test_operation_state_roundtrip() {
        for op in [Operation::Insert, Operation::Update, Operation::Delete] {
            assert_eq!(op.entity_state().operation(), Some(op));
        }
    }
}
