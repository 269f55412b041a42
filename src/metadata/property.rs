//! Per-property metadata.

use alloc::string::String;

/// A declared property of an entity type.
///
/// All flags default to `false`; an unconfigured property is a plain,
/// client-supplied column.
///
/// # Example
///
/// ```
/// use modification_command::Property;
///
/// let id = Property::new("Id").key().generate_value_on_add().column("Col1");
/// assert!(id.is_key());
/// assert!(id.generates_value_on_add());
/// assert_eq!(id.column_override(), Some("Col1"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Property {
    name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    column: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    is_key: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    is_concurrency_token: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    generate_value_on_add: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    is_store_computed: bool,
}

impl Property {
    /// Creates a plain property with no flags set.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column: None,
            is_key: false,
            is_concurrency_token: false,
            generate_value_on_add: false,
            is_store_computed: false,
        }
    }

    /// Marks the property as part of the primary key.
    #[must_use]
    pub fn key(mut self) -> Self {
        self.is_key = true;
        self
    }

    /// Marks the property as a concurrency token.
    #[must_use]
    pub fn concurrency_token(mut self) -> Self {
        self.is_concurrency_token = true;
        self
    }

    /// Lets the store generate the value when the entity is inserted.
    #[must_use]
    pub fn generate_value_on_add(mut self) -> Self {
        self.generate_value_on_add = true;
        self
    }

    /// Lets the store compute the value on every write.
    #[must_use]
    pub fn store_computed(mut self) -> Self {
        self.is_store_computed = true;
        self
    }

    /// Maps the property to an explicit column name.
    #[must_use]
    pub fn column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    /// The property name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The explicit column name, if one was configured.
    #[must_use]
    pub fn column_override(&self) -> Option<&str> {
        self.column.as_deref()
    }

    /// Whether the property is part of the primary key.
    #[must_use]
    pub fn is_key(&self) -> bool {
        self.is_key
    }

    /// Whether the property is checked for concurrent modification.
    #[must_use]
    pub fn is_concurrency_token(&self) -> bool {
        self.is_concurrency_token
    }

    /// Whether the store generates the value on insert.
    #[must_use]
    pub fn generates_value_on_add(&self) -> bool {
        self.generate_value_on_add
    }

    /// Whether the store computes the value on every write.
    #[must_use]
    pub fn is_store_computed(&self) -> bool {
        self.is_store_computed
    }
}
