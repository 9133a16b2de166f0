//! The dynamic `Value` type and its kind enumeration.
//!
//! `Value` is a closed tagged variant: every container kind the
//! library knows how to traverse is a variant here, and operations
//! dispatch on the runtime kind with a single `match`. New kinds are
//! added by extending the variant set, never by open-ended dynamic
//! lookup.

use core::fmt::{self, Debug, Display, Formatter};
use core::mem;

use crate::accessor::VAccessor;
use crate::complex::VComplex;
use crate::record::VRecord;
use crate::scope::VScope;
use crate::seq::{Name, VSeq};

/// Enum distinguishing the value kinds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValueKind {
    /// The null value.
    Null,
    /// Logical sequence (`Option<bool>` elements, `None` = NA).
    Logical,
    /// Integer sequence (`Option<i64>` elements, `None` = NA).
    Int,
    /// Double sequence (`f64` elements; NA is conflated with NaN).
    Double,
    /// String sequence (`Option<String>` elements, `None` = NA).
    Str,
    /// Unstructured numeric pair.
    Complex,
    /// Generic list: a sequence of arbitrary values.
    List,
    /// Insertion-ordered record of named fields.
    Record,
    /// Scope-like object with named slots.
    Scope,
    /// Accessor closure.
    Accessor,
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueKind::Null => "null",
            ValueKind::Logical => "logical",
            ValueKind::Int => "integer",
            ValueKind::Double => "double",
            ValueKind::Str => "string",
            ValueKind::Complex => "complex",
            ValueKind::List => "list",
            ValueKind::Record => "record",
            ValueKind::Scope => "scope",
            ValueKind::Accessor => "accessor",
        })
    }
}

/// A dynamic value: one of the container kinds the library traverses,
/// or a scalar masquerading as a length-1 sequence.
///
/// The ordered kinds (`Logical`, `Int`, `Double`, `Str`, `List`) share
/// the [`VSeq`] store and therefore all carry an optional parallel
/// name array and an attribute side-table. `Record` and `Scope` are
/// name-keyed; `Accessor` and `Complex` are opaque.
#[derive(Clone, PartialEq)]
pub enum Value {
    /// The null value; also the empty sequence when indexed, and the
    /// absent result of an extraction.
    Null,
    /// Logical sequence.
    Logical(VSeq<Option<bool>>),
    /// Integer sequence.
    Int(VSeq<Option<i64>>),
    /// Double sequence.
    Double(VSeq<f64>),
    /// String sequence.
    Str(VSeq<Option<String>>),
    /// Unstructured numeric pair.
    Complex(VComplex),
    /// Generic list.
    List(VSeq<Value>),
    /// Insertion-ordered record.
    Record(VRecord),
    /// Scope-like object.
    Scope(VScope),
    /// Accessor closure.
    Accessor(VAccessor),
}

impl Value {
    // === Scalar constructors ===

    /// A length-1 logical sequence.
    #[must_use]
    pub fn logical(value: bool) -> Self {
        Value::Logical(VSeq::from_vec(vec![Some(value)]))
    }

    /// A length-1 integer sequence.
    #[must_use]
    pub fn int(value: i64) -> Self {
        Value::Int(VSeq::from_vec(vec![Some(value)]))
    }

    /// A length-1 double sequence.
    #[must_use]
    pub fn double(value: f64) -> Self {
        Value::Double(VSeq::from_vec(vec![value]))
    }

    /// A length-1 string sequence.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Value::Str(VSeq::from_vec(vec![Some(value.into())]))
    }

    /// The missing scalar: a length-1 logical sequence holding NA.
    #[must_use]
    pub fn na() -> Self {
        Value::Logical(VSeq::from_vec(vec![None]))
    }

    /// A length-1 string sequence holding NA.
    #[must_use]
    pub fn na_string() -> Self {
        Value::Str(VSeq::from_vec(vec![None]))
    }

    /// An unstructured numeric pair.
    #[must_use]
    pub fn complex(re: f64, im: f64) -> Self {
        Value::Complex(VComplex::new(re, im))
    }

    // === Kind and shape ===

    /// The runtime kind of this value.
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Logical(_) => ValueKind::Logical,
            Value::Int(_) => ValueKind::Int,
            Value::Double(_) => ValueKind::Double,
            Value::Str(_) => ValueKind::Str,
            Value::Complex(_) => ValueKind::Complex,
            Value::List(_) => ValueKind::List,
            Value::Record(_) => ValueKind::Record,
            Value::Scope(_) => ValueKind::Scope,
            Value::Accessor(_) => ValueKind::Accessor,
        }
    }

    /// Number of elements, fields or slots. `Null` is empty; opaque
    /// kinds count as one.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Value::Null => 0,
            Value::Logical(s) => s.len(),
            Value::Int(s) => s.len(),
            Value::Double(s) => s.len(),
            Value::Str(s) => s.len(),
            Value::List(s) => s.len(),
            Value::Record(r) => r.len(),
            Value::Scope(s) => s.len(),
            Value::Complex(_) | Value::Accessor(_) => 1,
        }
    }

    /// Returns `true` if [`len`](Value::len) is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` for the ordered sequence kinds.
    #[must_use]
    pub fn is_sequence(&self) -> bool {
        matches!(
            self,
            Value::Logical(_) | Value::Int(_) | Value::Double(_) | Value::Str(_) | Value::List(_)
        )
    }

    /// Returns `true` if this is a scalar missing value: a length-1
    /// logical, integer or string sequence holding NA, or a length-1
    /// double sequence holding NaN.
    #[must_use]
    pub fn is_na(&self) -> bool {
        match self {
            Value::Logical(s) => matches!(s.as_slice(), [None]),
            Value::Int(s) => matches!(s.as_slice(), [None]),
            Value::Str(s) => matches!(s.as_slice(), [None]),
            Value::Double(s) => matches!(s.as_slice(), [x] if x.is_nan()),
            _ => false,
        }
    }

    // === Kind predicates ===

    /// Returns `true` if this is the null value.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` if this is a logical sequence.
    #[must_use]
    pub fn is_logical(&self) -> bool {
        matches!(self, Value::Logical(_))
    }

    /// Returns `true` if this is an integer sequence.
    #[must_use]
    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    /// Returns `true` if this is a double sequence.
    #[must_use]
    pub fn is_double(&self) -> bool {
        matches!(self, Value::Double(_))
    }

    /// Returns `true` if this is a string sequence.
    #[must_use]
    pub fn is_str(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    /// Returns `true` if this is an unstructured numeric pair.
    #[must_use]
    pub fn is_complex(&self) -> bool {
        matches!(self, Value::Complex(_))
    }

    /// Returns `true` if this is a list.
    #[must_use]
    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// Returns `true` if this is a record.
    #[must_use]
    pub fn is_record(&self) -> bool {
        matches!(self, Value::Record(_))
    }

    /// Returns `true` if this is a scope.
    #[must_use]
    pub fn is_scope(&self) -> bool {
        matches!(self, Value::Scope(_))
    }

    /// Returns `true` if this is an accessor closure.
    #[must_use]
    pub fn is_accessor(&self) -> bool {
        matches!(self, Value::Accessor(_))
    }

    // === Conversions to concrete stores ===

    /// The logical store, if this is a logical sequence.
    #[must_use]
    pub fn as_logical(&self) -> Option<&VSeq<Option<bool>>> {
        match self {
            Value::Logical(s) => Some(s),
            _ => None,
        }
    }

    /// The integer store, if this is an integer sequence.
    #[must_use]
    pub fn as_int(&self) -> Option<&VSeq<Option<i64>>> {
        match self {
            Value::Int(s) => Some(s),
            _ => None,
        }
    }

    /// The double store, if this is a double sequence.
    #[must_use]
    pub fn as_double(&self) -> Option<&VSeq<f64>> {
        match self {
            Value::Double(s) => Some(s),
            _ => None,
        }
    }

    /// The string store, if this is a string sequence.
    #[must_use]
    pub fn as_str(&self) -> Option<&VSeq<Option<String>>> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The list store, if this is a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&VSeq<Value>> {
        match self {
            Value::List(s) => Some(s),
            _ => None,
        }
    }

    /// Mutable access to the list store, if this is a list.
    pub fn as_list_mut(&mut self) -> Option<&mut VSeq<Value>> {
        match self {
            Value::List(s) => Some(s),
            _ => None,
        }
    }

    /// The record, if this is a record.
    #[must_use]
    pub fn as_record(&self) -> Option<&VRecord> {
        match self {
            Value::Record(r) => Some(r),
            _ => None,
        }
    }

    /// Mutable access to the record, if this is a record.
    pub fn as_record_mut(&mut self) -> Option<&mut VRecord> {
        match self {
            Value::Record(r) => Some(r),
            _ => None,
        }
    }

    /// The scope, if this is a scope.
    #[must_use]
    pub fn as_scope(&self) -> Option<&VScope> {
        match self {
            Value::Scope(s) => Some(s),
            _ => None,
        }
    }

    /// Mutable access to the scope, if this is a scope.
    pub fn as_scope_mut(&mut self) -> Option<&mut VScope> {
        match self {
            Value::Scope(s) => Some(s),
            _ => None,
        }
    }

    /// The accessor, if this is an accessor closure.
    #[must_use]
    pub fn as_accessor(&self) -> Option<&VAccessor> {
        match self {
            Value::Accessor(a) => Some(a),
            _ => None,
        }
    }

    /// The numeric pair, if this is a complex value.
    #[must_use]
    pub fn as_complex(&self) -> Option<&VComplex> {
        match self {
            Value::Complex(c) => Some(c),
            _ => None,
        }
    }

    // === Scalar conversions ===

    /// This value as a scalar `bool`, if it is a length-1 non-NA
    /// logical sequence.
    #[must_use]
    pub fn as_scalar_bool(&self) -> Option<bool> {
        match self {
            Value::Logical(s) => match s.as_slice() {
                [Some(b)] => Some(*b),
                _ => None,
            },
            _ => None,
        }
    }

    /// This value as a scalar `i64`, if it is a length-1 non-NA
    /// integer sequence.
    #[must_use]
    pub fn as_scalar_i64(&self) -> Option<i64> {
        match self {
            Value::Int(s) => match s.as_slice() {
                [Some(i)] => Some(*i),
                _ => None,
            },
            _ => None,
        }
    }

    /// This value as a scalar `f64`, widening from logical and integer
    /// scalars. NA scalars come back as `None`; a double NaN comes
    /// back as `Some(NaN)`.
    #[must_use]
    pub fn as_scalar_f64(&self) -> Option<f64> {
        match self {
            Value::Logical(s) => match s.as_slice() {
                [Some(b)] => Some(if *b { 1.0 } else { 0.0 }),
                _ => None,
            },
            Value::Int(s) => match s.as_slice() {
                [Some(i)] => Some(*i as f64),
                _ => None,
            },
            Value::Double(s) => match s.as_slice() {
                [x] => Some(*x),
                _ => None,
            },
            _ => None,
        }
    }

    /// This value as a scalar string slice, if it is a length-1 non-NA
    /// string sequence.
    #[must_use]
    pub fn as_scalar_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => match s.as_slice() {
                [Some(text)] => Some(text.as_str()),
                _ => None,
            },
            _ => None,
        }
    }

    // === Names and attributes ===

    /// The parallel name array, for named ordered sequences.
    ///
    /// Records are name-keyed but not name-arrayed; they return `None`
    /// here and expose their keys through [`VRecord::keys`].
    #[must_use]
    pub fn names(&self) -> Option<&[Name]> {
        match self {
            Value::Logical(s) => s.names(),
            Value::Int(s) => s.names(),
            Value::Double(s) => s.names(),
            Value::Str(s) => s.names(),
            Value::List(s) => s.names(),
            _ => None,
        }
    }

    /// The attribute named exactly `name`, for kinds that carry an
    /// attribute side-table (sequences and records).
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&Value> {
        match self {
            Value::Logical(s) => s.attrs().get(name),
            Value::Int(s) => s.attrs().get(name),
            Value::Double(s) => s.attrs().get(name),
            Value::Str(s) => s.attrs().get(name),
            Value::List(s) => s.attrs().get(name),
            Value::Record(r) => r.attrs().get(name),
            _ => None,
        }
    }

    /// Builder-style attribute attachment. Kinds without an attribute
    /// side-table come back unchanged.
    #[must_use]
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        match &mut self {
            Value::Logical(s) => s.attrs_mut().set(name, value),
            Value::Int(s) => s.attrs_mut().set(name, value),
            Value::Double(s) => s.attrs_mut().set(name, value),
            Value::Str(s) => s.attrs_mut().set(name, value),
            Value::List(s) => s.attrs_mut().set(name, value),
            Value::Record(r) => r.attrs_mut().set(name, value),
            _ => {}
        }
        self
    }

    /// Takes this value, replacing it with `Value::Null`.
    pub fn take(&mut self) -> Value {
        mem::replace(self, Value::Null)
    }
}

// === Default ===

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

// === Debug ===

impl Debug for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Logical(s) => Debug::fmt(s, f),
            Value::Int(s) => Debug::fmt(s, f),
            Value::Double(s) => Debug::fmt(s, f),
            Value::Str(s) => Debug::fmt(s, f),
            Value::Complex(c) => Debug::fmt(c, f),
            Value::List(s) => Debug::fmt(s, f),
            Value::Record(r) => Debug::fmt(r, f),
            Value::Scope(s) => Debug::fmt(s, f),
            Value::Accessor(a) => Debug::fmt(a, f),
        }
    }
}

// === From implementations ===

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::logical(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::int(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::double(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::string(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::string(value)
    }
}

impl From<Vec<bool>> for Value {
    fn from(values: Vec<bool>) -> Self {
        Value::Logical(values.into_iter().map(Some).collect())
    }
}

impl From<Vec<i64>> for Value {
    fn from(values: Vec<i64>) -> Self {
        Value::Int(values.into_iter().map(Some).collect())
    }
}

impl From<Vec<f64>> for Value {
    fn from(values: Vec<f64>) -> Self {
        Value::Double(VSeq::from_vec(values))
    }
}

impl From<Vec<String>> for Value {
    fn from(values: Vec<String>) -> Self {
        Value::Str(values.into_iter().map(Some).collect())
    }
}

impl<'a> From<Vec<&'a str>> for Value {
    fn from(values: Vec<&'a str>) -> Self {
        Value::Str(values.into_iter().map(|s| Some(s.to_owned())).collect())
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::List(VSeq::from_vec(values))
    }
}

impl From<VSeq<Option<bool>>> for Value {
    fn from(seq: VSeq<Option<bool>>) -> Self {
        Value::Logical(seq)
    }
}

impl From<VSeq<Option<i64>>> for Value {
    fn from(seq: VSeq<Option<i64>>) -> Self {
        Value::Int(seq)
    }
}

impl From<VSeq<f64>> for Value {
    fn from(seq: VSeq<f64>) -> Self {
        Value::Double(seq)
    }
}

impl From<VSeq<Option<String>>> for Value {
    fn from(seq: VSeq<Option<String>>) -> Self {
        Value::Str(seq)
    }
}

impl From<VSeq<Value>> for Value {
    fn from(seq: VSeq<Value>) -> Self {
        Value::List(seq)
    }
}

impl From<VComplex> for Value {
    fn from(value: VComplex) -> Self {
        Value::Complex(value)
    }
}

impl From<VRecord> for Value {
    fn from(record: VRecord) -> Self {
        Value::Record(record)
    }
}

impl From<VScope> for Value {
    fn from(scope: VScope) -> Self {
        Value::Scope(scope)
    }
}

impl From<VAccessor> for Value {
    fn from(accessor: VAccessor) -> Self {
        Value::Accessor(accessor)
    }
}

// === FromIterator implementations ===

impl<T: Into<Value>> FromIterator<T> for Value {
    /// Collect into a list value.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Value::List(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_are_length_one_sequences() {
        let x = Value::double(1.5);
        assert_eq!(x.kind(), ValueKind::Double);
        assert_eq!(x.len(), 1);
        assert!(x.is_sequence());
        assert_eq!(x.as_scalar_f64(), Some(1.5));
    }

    #[test]
    fn na_is_a_missing_logical_scalar() {
        let na = Value::na();
        assert!(na.is_na());
        assert!(na.is_logical());
        assert_eq!(na.as_scalar_bool(), None);
        assert!(!Value::logical(false).is_na());
    }

    #[test]
    fn null_is_the_empty_sequence() {
        assert_eq!(Value::Null.len(), 0);
        assert!(Value::Null.is_empty());
        assert!(!Value::Null.is_sequence());
    }

    #[test]
    fn attr_access_is_exact() {
        let x = Value::from(vec![1.0, 2.0]).with_attr("dim", Value::int(2));
        assert_eq!(x.attr("dim"), Some(&Value::int(2)));
        assert_eq!(x.attr("di"), None);
        assert_eq!(x.attr("dimnames"), None);
    }

    #[test]
    fn debug_output_shows_names() {
        let x = Value::List(VSeq::from_pairs([
            ("a", Value::double(1.0)),
            ("b", Value::string("two")),
        ]));
        assert_eq!(format!("{x:?}"), r#"[a: [1.0], b: ["two"]]"#);
    }

    #[test]
    fn kind_display_names() {
        assert_eq!(ValueKind::Scope.to_string(), "scope");
        assert_eq!(ValueKind::Str.to_string(), "string");
        assert_eq!(ValueKind::Int.to_string(), "integer");
    }
}
