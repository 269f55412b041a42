//! Mapping from property metadata to store column names.

use alloc::string::String;

use super::Property;

/// Resolves the physical column name of a property.
///
/// Any `Fn(&Property) -> String` closure is a mapper, which lets callers plug
/// in naming conventions without defining a type.
///
/// # Example
///
/// ```
/// use modification_command::{ColumnMapper, Property};
///
/// let snake = |p: &Property| p.name().to_lowercase();
/// assert_eq!(snake.column_name(&Property::new("Name")), "name");
/// ```
pub trait ColumnMapper {
    /// Returns the column name for the property.
    fn column_name(&self, property: &Property) -> String;
}

impl<F> ColumnMapper for F
where
    F: Fn(&Property) -> String,
{
    #[inline]
    fn column_name(&self, property: &Property) -> String {
        self(property)
    }
}

/// Uses the property's configured column, falling back to the property name.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RelationalColumnMapper;

impl ColumnMapper for RelationalColumnMapper {
    #[inline]
    fn column_name(&self, property: &Property) -> String {
        String::from(property.column_override().unwrap_or(property.name()))
    }
}
