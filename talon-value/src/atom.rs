//! Element kinds for the homogeneous sequence stores.

use core::fmt::{self, Formatter};

use crate::error::Error;
use crate::seq::VSeq;
use crate::value::{Value, ValueKind};

/// An element type that can back an ordered sequence store.
///
/// `Atom` is the seam through which elements travel between a
/// homogeneous store and the dynamic [`Value`] world: extraction wraps
/// one element into a scalar value, and assignment re-validates a
/// replacement value against the store's element kind. Assignment
/// widens only — logical into integer into double, strings from
/// strings, anything into a list — and everything else is an
/// [`Error::Coerce`], never a silent change of the store's kind.
pub trait Atom: Clone + Sized {
    /// The sequence kind this element type backs.
    const KIND: ValueKind;

    /// Re-validate a replacement value as one element of this kind.
    fn from_value(value: &Value) -> Result<Self, Error>;

    /// Wrap one element into a scalar value.
    fn into_value(self) -> Value;

    /// Wrap a whole store into a value of this kind.
    fn seq_into_value(seq: VSeq<Self>) -> Value;

    /// Format one element, used by the sequence `Debug` impls.
    fn fmt_elem(&self, f: &mut Formatter<'_>) -> fmt::Result;
}

fn coerce(value: &Value, to: ValueKind) -> Error {
    Error::Coerce {
        from: value.kind(),
        to,
    }
}

impl Atom for Option<bool> {
    const KIND: ValueKind = ValueKind::Logical;

    fn from_value(value: &Value) -> Result<Self, Error> {
        match value {
            Value::Logical(s) => match s.as_slice() {
                [elem] => Ok(*elem),
                _ => Err(coerce(value, Self::KIND)),
            },
            _ => Err(coerce(value, Self::KIND)),
        }
    }

    fn into_value(self) -> Value {
        Value::Logical(VSeq::from_vec(vec![self]))
    }

    fn seq_into_value(seq: VSeq<Self>) -> Value {
        Value::Logical(seq)
    }

    fn fmt_elem(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            None => f.write_str("NA"),
            Some(b) => write!(f, "{b}"),
        }
    }
}

impl Atom for Option<i64> {
    const KIND: ValueKind = ValueKind::Int;

    fn from_value(value: &Value) -> Result<Self, Error> {
        match value {
            Value::Logical(s) => match s.as_slice() {
                [elem] => Ok(elem.map(i64::from)),
                _ => Err(coerce(value, Self::KIND)),
            },
            Value::Int(s) => match s.as_slice() {
                [elem] => Ok(*elem),
                _ => Err(coerce(value, Self::KIND)),
            },
            _ => Err(coerce(value, Self::KIND)),
        }
    }

    fn into_value(self) -> Value {
        Value::Int(VSeq::from_vec(vec![self]))
    }

    fn seq_into_value(seq: VSeq<Self>) -> Value {
        Value::Int(seq)
    }

    fn fmt_elem(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            None => f.write_str("NA"),
            Some(i) => write!(f, "{i}"),
        }
    }
}

impl Atom for f64 {
    const KIND: ValueKind = ValueKind::Double;

    fn from_value(value: &Value) -> Result<Self, Error> {
        match value {
            Value::Logical(s) => match s.as_slice() {
                [Some(b)] => Ok(if *b { 1.0 } else { 0.0 }),
                [None] => Ok(f64::NAN),
                _ => Err(coerce(value, Self::KIND)),
            },
            Value::Int(s) => match s.as_slice() {
                [Some(i)] => Ok(*i as f64),
                [None] => Ok(f64::NAN),
                _ => Err(coerce(value, Self::KIND)),
            },
            Value::Double(s) => match s.as_slice() {
                [elem] => Ok(*elem),
                _ => Err(coerce(value, Self::KIND)),
            },
            _ => Err(coerce(value, Self::KIND)),
        }
    }

    fn into_value(self) -> Value {
        Value::Double(VSeq::from_vec(vec![self]))
    }

    fn seq_into_value(seq: VSeq<Self>) -> Value {
        Value::Double(seq)
    }

    fn fmt_elem(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl Atom for Option<String> {
    const KIND: ValueKind = ValueKind::Str;

    fn from_value(value: &Value) -> Result<Self, Error> {
        match value {
            Value::Str(s) => match s.as_slice() {
                [elem] => Ok(elem.clone()),
                _ => Err(coerce(value, Self::KIND)),
            },
            _ => Err(coerce(value, Self::KIND)),
        }
    }

    fn into_value(self) -> Value {
        Value::Str(VSeq::from_vec(vec![self]))
    }

    fn seq_into_value(seq: VSeq<Self>) -> Value {
        Value::Str(seq)
    }

    fn fmt_elem(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            None => f.write_str("NA"),
            Some(s) => write!(f, "{s:?}"),
        }
    }
}

/// List elements are unconstrained: any value can be stored as-is.
impl Atom for Value {
    const KIND: ValueKind = ValueKind::List;

    fn from_value(value: &Value) -> Result<Self, Error> {
        Ok(value.clone())
    }

    fn into_value(self) -> Value {
        self
    }

    fn seq_into_value(seq: VSeq<Self>) -> Value {
        Value::List(seq)
    }

    fn fmt_elem(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
