//! Entity metadata: declared properties, their flags, and column mapping.
mod column_mapper;
mod entity_type;
mod property;

pub use column_mapper::{ColumnMapper, RelationalColumnMapper};
pub use entity_type::EntityType;
pub use property::Property;
