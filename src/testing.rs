//! Fixtures shared by tests, benchmarks and fuzz harnesses.
//!
//! This module is gated behind the `testing` feature.
//!
//! # Provided helpers
//!
//! - [`blog_entity_type`]: the two-property `Id`/`Name` entity mapped to `Col1`/`Col2`
//! - [`blog_entry`]: an entry of that type with `Id = 1` and `Name = "Test"`
//! - [`new_command`]: an empty command for table `T1` with default naming

use crate::{
    EntityEntry, EntityState, EntityType, ModificationCommand, ParameterNameGenerator, Property,
    RelationalColumnMapper,
};

/// Builds the `Id`/`Name` entity type.
///
/// * `generate_key_values` - `Id` is generated by the store on insert.
/// * `compute_non_key_value` - `Name` is a store-computed concurrency token.
#[must_use]
pub fn blog_entity_type(generate_key_values: bool, compute_non_key_value: bool) -> EntityType {
    let mut id = Property::new("Id").key().column("Col1");
    if generate_key_values {
        id = id.generate_value_on_add();
    }

    let mut name = Property::new("Name").column("Col2");
    if compute_non_key_value {
        name = name.concurrency_token().store_computed();
    }

    EntityType::new("T1").with_property(id).with_property(name)
}

/// Builds an entry of [`blog_entity_type`] with `Id = 1` and `Name = "Test"`.
#[must_use]
pub fn blog_entry(
    state: EntityState,
    generate_key_values: bool,
    compute_non_key_value: bool,
) -> EntityEntry {
    EntityEntry::new(
        blog_entity_type(generate_key_values, compute_non_key_value),
        state,
    )
    .set(0, 1i64)
    .expect("Id exists")
    .set(1, "Test")
    .expect("Name exists")
}

/// Creates an empty command for table `T1` without schema.
#[must_use]
pub fn new_command() -> ModificationCommand {
    ModificationCommand::new(
        "T1",
        None,
        ParameterNameGenerator::new(),
        RelationalColumnMapper,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ChangeRecord, Value};

    #[test]
    fn test_blog_entry_fixture() {
        let entry = blog_entry(EntityState::Added, true, true);
        assert_eq!(entry.current_value(0), Some(&Value::Integer(1)));
        assert_eq!(entry.current_value(1), Some(&Value::from("Test")));
        let name = entry.entity_type().property(1).unwrap();
        assert!(name.is_concurrency_token() && name.is_store_computed());
    }
}
