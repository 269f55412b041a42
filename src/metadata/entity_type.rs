//! Entity type: an ordered set of declared properties.

use alloc::string::String;
use alloc::vec::Vec;
use indexmap::IndexMap as IndexMapRaw;

use super::Property;

/// `IndexMap` alias using hashbrown's default hasher for `no_std` compatibility.
type IndexMap<K, V> = IndexMapRaw<K, V, hashbrown::DefaultHashBuilder>;

/// An entity type with its properties in declaration order.
///
/// Properties are addressed by their index in declaration order; that index
/// is what change records and column modifications use to refer to them.
///
/// # Example
///
/// ```
/// use modification_command::{EntityType, Property};
///
/// let blog = EntityType::new("Blog")
///     .with_property(Property::new("Id").key())
///     .with_property(Property::new("Name"));
///
/// assert_eq!(blog.number_of_properties(), 2);
/// assert_eq!(blog.property_index("Name"), Some(1));
/// assert_eq!(blog.key_indices(), vec![0]);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityType {
    name: String,
    #[cfg_attr(feature = "serde", serde(with = "properties_serde"))]
    properties: IndexMap<String, Property>,
}

impl EntityType {
    /// Creates an entity type without properties.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: IndexMap::default(),
        }
    }

    /// Declares a property.
    ///
    /// Declaring a property with an existing name replaces it in place, keeping
    /// its original declaration position.
    #[must_use]
    pub fn with_property(mut self, property: Property) -> Self {
        self.properties
            .insert(String::from(property.name()), property);
        self
    }

    /// The entity type name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The number of declared properties.
    #[must_use]
    pub fn number_of_properties(&self) -> usize {
        self.properties.len()
    }

    /// Iterates the properties in declaration order.
    pub fn properties(&self) -> impl ExactSizeIterator<Item = &Property> {
        self.properties.values()
    }

    /// Returns the property at the given declaration index.
    #[must_use]
    pub fn property(&self, index: usize) -> Option<&Property> {
        self.properties.get_index(index).map(|(_, p)| p)
    }

    /// Returns the declaration index of the named property.
    #[must_use]
    pub fn property_index(&self, name: &str) -> Option<usize> {
        self.properties.get_index_of(name)
    }

    /// Returns the declaration indices of the primary key properties.
    #[must_use]
    pub fn key_indices(&self) -> Vec<usize> {
        self.properties()
            .enumerate()
            .filter(|(_, p)| p.is_key())
            .map(|(i, _)| i)
            .collect()
    }
}

impl PartialEq for EntityType {
    fn eq(&self, other: &Self) -> bool {
        // IndexMap equality ignores order; declaration order matters here.
        self.name == other.name && self.properties.iter().eq(other.properties.iter())
    }
}

impl Eq for EntityType {}

/// Properties serialize as a list; their names already key them.
#[cfg(feature = "serde")]
mod properties_serde {
    use alloc::string::String;
    use alloc::vec::Vec;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{IndexMap, Property};

    pub(super) fn serialize<S: Serializer>(
        properties: &IndexMap<String, Property>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let list: Vec<&Property> = properties.values().collect();
        list.serialize(serializer)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<IndexMap<String, Property>, D::Error> {
        let list = Vec::<Property>::deserialize(deserializer)?;
        Ok(list
            .into_iter()
            .map(|p| (String::from(p.name()), p))
            .collect())
    }
}
