//! Attribute side-tables.

use core::fmt::{self, Debug, Formatter};

use indexmap::IndexMap;

use crate::value::Value;

/// A side-table of named attributes attached to a container.
///
/// Attributes ride along with sequences and records but are invisible
/// to element access: the only way to reach one is an explicit
/// attribute lookup, and that lookup is exact — no prefix or partial
/// matching, ever.
///
/// The table is lazily allocated so that attribute-free containers
/// cost one pointer.
#[derive(Clone, Default)]
pub struct Attrs {
    table: Option<Box<IndexMap<String, Value>>>,
}

impl Attrs {
    /// An empty attribute table.
    #[must_use]
    pub fn new() -> Self {
        Attrs { table: None }
    }

    /// The attribute named exactly `name`, if set.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.table.as_ref()?.get(name)
    }

    /// Set (or replace) an attribute.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.table
            .get_or_insert_with(|| Box::new(IndexMap::new()))
            .insert(name.into(), value.into());
    }

    /// Remove an attribute, returning its previous value.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.table.as_mut()?.shift_remove(name)
    }

    /// Number of attributes set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.as_ref().map_or(0, |table| table.len())
    }

    /// Returns `true` if no attributes are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.table
            .iter()
            .flat_map(|table| table.iter().map(|(name, value)| (name.as_str(), value)))
    }
}

impl PartialEq for Attrs {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(name, value)| other.get(name) == Some(value))
    }
}

impl Debug for Attrs {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
