//! Ordered sequences with homogeneous backing stores.

use core::fmt::{self, Debug, Formatter};
use core::ops::Deref;
use core::slice;

use crate::atom::Atom;
use crate::attrs::Attrs;
use crate::error::Error;

/// One slot of a sequence's parallel name array.
///
/// `None` is a missing (NA) name; `Some("")` is an unnamed slot in an
/// otherwise named sequence. Neither matches any name lookup.
pub type Name = Option<String>;

/// An ordered sequence of homogeneous elements with an optional
/// parallel name array and an attribute side-table.
///
/// `VSeq` is the backing store behind every ordered [`Value`] kind:
/// logical, integer, double and string sequences as well as generic
/// lists. Scalars are length-1 sequences. When the name array is
/// present it has exactly the sequence's length — names are a
/// first-class part of the store, not a side map.
///
/// [`Value`]: crate::Value
#[derive(Clone, PartialEq)]
pub struct VSeq<T> {
    elems: Vec<T>,
    names: Option<Vec<Name>>,
    attrs: Attrs,
}

impl<T> VSeq<T> {
    /// Create an empty, unnamed sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty sequence with room for `cap` elements.
    #[must_use]
    pub fn with_capacity(cap: usize) -> Self {
        VSeq {
            elems: Vec::with_capacity(cap),
            names: None,
            attrs: Attrs::new(),
        }
    }

    /// Create an unnamed sequence from a vector of elements.
    #[must_use]
    pub fn from_vec(elems: Vec<T>) -> Self {
        VSeq {
            elems,
            names: None,
            attrs: Attrs::new(),
        }
    }

    /// Create a fully named sequence from name/element pairs.
    pub fn from_pairs<K, I>(pairs: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, T)>,
    {
        let mut seq = VSeq::new();
        for (name, elem) in pairs {
            seq.push_named(name, elem);
        }
        seq
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elems.len()
    }

    /// Returns `true` if the sequence has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    /// The elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elems
    }

    /// Element at `index` (0-based), if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elems.get(index)
    }

    /// Mutable element at `index` (0-based), if in range.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.elems.get_mut(index)
    }

    /// Append an element. If the sequence is named, the new slot gets
    /// an empty (unmatchable) name.
    pub fn push(&mut self, elem: T) {
        if let Some(names) = &mut self.names {
            names.push(Some(String::new()));
        }
        self.elems.push(elem);
    }

    /// Append a named element, creating the name array on first use.
    /// Slots pushed before the sequence became named get empty names.
    pub fn push_named(&mut self, name: impl Into<String>, elem: T) {
        let len = self.elems.len();
        let names = self
            .names
            .get_or_insert_with(|| vec![Some(String::new()); len]);
        names.push(Some(name.into()));
        self.elems.push(elem);
    }

    /// The parallel name array, if the sequence is named.
    #[must_use]
    pub fn names(&self) -> Option<&[Name]> {
        self.names.as_deref()
    }

    /// Replace the whole name array. `Some` arrays must match the
    /// sequence length exactly.
    pub fn set_names(&mut self, names: Option<Vec<Name>>) -> Result<(), Error> {
        if let Some(names) = &names {
            if names.len() != self.elems.len() {
                return Err(Error::LengthMismatch {
                    left: self.elems.len(),
                    right: names.len(),
                });
            }
        }
        self.names = names;
        Ok(())
    }

    /// Owned name of the slot at `index`; `None` when the sequence is
    /// unnamed, the index is out of range, or the slot's name is NA.
    #[must_use]
    pub fn name_at(&self, index: usize) -> Name {
        match &self.names {
            Some(names) => names.get(index).cloned().unwrap_or(None),
            None => None,
        }
    }

    /// Borrowed name of the slot at `index`. Empty names come back as
    /// `Some("")`; NA names as `None`.
    #[must_use]
    pub fn name_of(&self, index: usize) -> Option<&str> {
        self.names.as_ref()?.get(index)?.as_deref()
    }

    /// First slot whose name exactly equals `name`.
    ///
    /// The empty string never matches anything, and NA-named or
    /// empty-named slots are never matchable. Duplicate names resolve
    /// to the first occurrence.
    #[must_use]
    pub fn position_of(&self, name: &str) -> Option<usize> {
        if name.is_empty() {
            return None;
        }
        let names = self.names.as_ref()?;
        names.iter().position(|slot| slot.as_deref() == Some(name))
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
}

impl<T: Clone> VSeq<T> {
    /// A copy of this sequence recycled to `len` elements by repeating
    /// elements (and names) in order. `len` must be a multiple of the
    /// current length; compatibility is the caller's contract.
    #[must_use]
    pub fn recycled(&self, len: usize) -> VSeq<T> {
        if len == self.elems.len() {
            return self.clone();
        }
        let elems = self.elems.iter().cloned().cycle().take(len).collect();
        let names = self
            .names
            .as_ref()
            .map(|names| names.iter().cloned().cycle().take(len).collect());
        VSeq {
            elems,
            names,
            attrs: self.attrs.clone(),
        }
    }
}

impl<T> Default for VSeq<T> {
    fn default() -> Self {
        VSeq {
            elems: Vec::new(),
            names: None,
            attrs: Attrs::new(),
        }
    }
}

impl<T> Deref for VSeq<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.elems
    }
}

impl<T> FromIterator<T> for VSeq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        VSeq::from_vec(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for VSeq<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elems.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a VSeq<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elems.iter()
    }
}

impl<T: Atom> Debug for VSeq<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, elem) in self.elems.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            match self.name_of(i) {
                Some(name) if !name.is_empty() => write!(f, "{name}: ")?,
                _ => {}
            }
            elem.fmt_elem(f)?;
        }
        f.write_str("]")
    }
}
