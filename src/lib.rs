#![doc = include_str!("../README.md")]
#![no_std]
#![deny(clippy::mod_module_files)]

extern crate alloc;

pub mod command;
pub mod entry;
pub mod errors;
#[cfg(feature = "testing")]
pub mod invariant_testing;
pub mod metadata;
pub mod state;
#[cfg(feature = "testing")]
pub mod testing;
pub mod value;

// Re-export main types
pub use command::{ColumnModification, ColumnRoles, ModificationCommand, ParameterNameGenerator};
pub use entry::{ChangeRecord, ChangeRecordMut, EntityEntry, EntryId};
pub use metadata::{ColumnMapper, EntityType, Property, RelationalColumnMapper};
pub use state::{EntityState, Operation};
pub use value::Value;

// Re-export errors
pub use errors::Error;
