//! Insertion-ordered mapping keyed by subsidiary name.
//!
//! Rosters, salary maps, and statistics maps must all iterate in the order
//! the subsidiaries first appeared in the input. [`SubsidiaryMap`] keeps
//! entries in a `Vec`, with a name index for lookups, and serializes as a
//! JSON object in that order.

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// An insertion-ordered map from subsidiary name to `V`.
///
/// Subsidiary names are unique keys. Inserting an existing name replaces its
/// value in place and keeps the original position; deserializing an object
/// with a repeated name is an error.
///
/// # Example
///
/// ```
/// use salary_stats::models::SubsidiaryMap;
///
/// let mut map = SubsidiaryMap::new();
/// map.insert("TechCorp", 3);
/// map.insert("DesignWorks", 1);
///
/// let names: Vec<&str> = map.names().collect();
/// assert_eq!(names, vec!["TechCorp", "DesignWorks"]);
/// assert_eq!(map.get("DesignWorks"), Some(&1));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SubsidiaryMap<V> {
    entries: Vec<(String, V)>,
    // name -> position in `entries`
    index: HashMap<String, usize>,
}

impl<V> SubsidiaryMap<V> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Creates an empty map with room for `capacity` subsidiaries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Inserts a value, returning the previous value if the name was present.
    pub fn insert(&mut self, name: impl Into<String>, value: V) -> Option<V> {
        let name = name.into();
        match self.index.get(&name) {
            Some(&position) => Some(std::mem::replace(&mut self.entries[position].1, value)),
            None => {
                self.push_new(name, value);
                None
            }
        }
    }

    fn push_new(&mut self, name: String, value: V) {
        self.index.insert(name.clone(), self.entries.len());
        self.entries.push((name, value));
    }

    /// Returns the value stored for a subsidiary.
    pub fn get(&self, name: &str) -> Option<&V> {
        self.index
            .get(name)
            .map(|&position| &self.entries[position].1)
    }

    /// Returns true if the subsidiary is present.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of subsidiaries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no subsidiaries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Iterates subsidiary names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Iterates values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, value)| value)
    }
}

impl<V> Default for SubsidiaryMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for SubsidiaryMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = SubsidiaryMap::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

impl<V> IntoIterator for SubsidiaryMap<V> {
    type Item = (String, V);
    type IntoIter = std::vec::IntoIter<(String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<V: Serialize> Serialize for SubsidiaryMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

struct SubsidiaryMapVisitor<V> {
    marker: PhantomData<V>,
}

impl<'de, V: Deserialize<'de>> Visitor<'de> for SubsidiaryMapVisitor<V> {
    type Value = SubsidiaryMap<V>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an object keyed by subsidiary name")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = SubsidiaryMap::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((name, value)) = access.next_entry::<String, V>()? {
            if map.contains(&name) {
                return Err(de::Error::custom(format!(
                    "duplicate subsidiary '{}'",
                    name
                )));
            }
            map.push_new(name, value);
        }
        Ok(map)
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for SubsidiaryMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(SubsidiaryMapVisitor {
            marker: PhantomData,
        })
    }
}
