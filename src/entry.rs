//! Change records: the tracked-entity snapshots a command is built from.
mod change_record;
mod entity_entry;

pub use change_record::{ChangeRecord, ChangeRecordMut, EntryId};
pub use entity_entry::EntityEntry;
