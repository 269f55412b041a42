//! Modification commands and their per-column classification.
mod classification;
mod column_modification;
mod modification_command;
mod parameter_name_generator;

pub use classification::ColumnRoles;
pub use column_modification::ColumnModification;
pub use modification_command::ModificationCommand;
pub use parameter_name_generator::ParameterNameGenerator;
