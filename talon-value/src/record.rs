//! Insertion-ordered records.

use core::fmt::{self, Debug, Formatter};

use indexmap::IndexMap;

use crate::attrs::Attrs;
use crate::value::Value;

/// An insertion-ordered record of named fields.
///
/// Fields keep the order they were inserted in, but access is
/// name-keyed only — positions are not a supported way in, which is
/// what separates a record from a named list.
#[derive(Clone, PartialEq, Default)]
pub struct VRecord {
    fields: IndexMap<String, Value>,
    attrs: Attrs,
}

impl VRecord {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty record with room for `cap` fields.
    #[must_use]
    pub fn with_capacity(cap: usize) -> Self {
        VRecord {
            fields: IndexMap::with_capacity(cap),
            attrs: Attrs::new(),
        }
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The field named exactly `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Mutable access to the field named exactly `name`.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.fields.get_mut(name)
    }

    /// Returns `true` if a field with this exact name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Insert a field, returning the previous value under that name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(name.into(), value.into())
    }

    /// Remove a field, preserving the order of the rest.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.fields.shift_remove(name)
    }

    /// Field names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Field values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.fields.values()
    }

    /// Name/value pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// The attribute side-table.
    #[must_use]
    pub fn attrs(&self) -> &Attrs {
        &self.attrs
    }

    /// Mutable access to the attribute side-table.
    pub fn attrs_mut(&mut self) -> &mut Attrs {
        &mut self.attrs
    }

    /// Wrap this record into a [`Value`].
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Record(self)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for VRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = VRecord::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}

impl IntoIterator for VRecord {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl Debug for VRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("record {")?;
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}: {value:?}")?;
        }
        f.write_str("}")
    }
}
