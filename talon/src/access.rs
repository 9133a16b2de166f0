//! Generic single-step access into a container.
//!
//! [`access_step`] is the foundation every extraction builds on: one
//! polymorphic "get element at index" with the container kind decided
//! at runtime. Its result distinguishes three outcomes:
//!
//! | Outcome       | Meaning                                        |
//! |---------------|------------------------------------------------|
//! | `Ok(Some(v))` | The index resolved to `v`.                     |
//! | `Ok(None)`    | Absent: the index did not resolve. Not an error. |
//! | `Err(e)`      | The index or container was unusable.           |

use talon_value::{Atom, Error, Value, ValueKind};

/// A validated single-scalar index.
enum IndexKey<'a> {
    /// The index is a missing (NA) scalar: always absent, never an error.
    Missing,
    /// A numeric position, still 1-based and untruncated.
    Pos(f64),
    /// A name.
    Name(&'a str),
}

/// Resolve one index against a container.
///
/// - Accessor indices are invoked with the container as their sole
///   argument; whatever they return (including failures) is the
///   outcome of the step.
/// - Ordered sequences take a single numeric or string scalar. Missing
///   or unresolvable scalars (NA, NaN, infinite, out of range,
///   unmatched name) are absent; malformed indices (wrong length,
///   wrong kind) are errors.
/// - Records and scopes take a single string scalar.
/// - Accessor and complex containers cannot be indexed at all.
pub fn access_step(container: &Value, index: &Value) -> Result<Option<Value>, Error> {
    if let Value::Accessor(accessor) = index {
        return accessor.call(container).map(Some);
    }
    match container {
        Value::Record(_) | Value::Scope(_) => name_only_step(container, index),
        Value::Accessor(_) | Value::Complex(_) => Err(Error::UnsupportedContainer {
            kind: container.kind(),
        }),
        _ => seq_step(container, index),
    }
}

/// Indexing for ordered sequences, with `Null` as the empty sequence.
fn seq_step(container: &Value, index: &Value) -> Result<Option<Value>, Error> {
    match scalar_index(index, container.kind())? {
        IndexKey::Missing => Ok(None),
        IndexKey::Pos(pos) => Ok(position_lookup(container, pos)),
        IndexKey::Name(name) => Ok(name_lookup(container, name)),
    }
}

/// Indexing for name-keyed containers (records and scopes).
fn name_only_step(container: &Value, index: &Value) -> Result<Option<Value>, Error> {
    match scalar_index(index, container.kind())? {
        IndexKey::Missing => Ok(None),
        IndexKey::Name(name) => Ok(match container {
            Value::Record(record) => record.get(name).cloned(),
            Value::Scope(scope) => scope.get(name).cloned(),
            _ => None,
        }),
        IndexKey::Pos(_) => Err(Error::IndexType {
            container: container.kind(),
            index: index.kind(),
        }),
    }
}

/// Validate an index down to a single scalar key.
///
/// A scalar NA of any kind is [`IndexKey::Missing`] — checked before
/// kind validation so that `pluck(x, NA)` is absent rather than an
/// error even though non-NA logical indices are rejected.
fn scalar_index<'a>(index: &'a Value, container: ValueKind) -> Result<IndexKey<'a>, Error> {
    match index {
        Value::Null => Err(Error::IndexLength { len: 0 }),
        Value::Logical(s) => match s.as_slice() {
            [None] => Ok(IndexKey::Missing),
            [Some(_)] => Err(Error::IndexType {
                container,
                index: ValueKind::Logical,
            }),
            other => Err(Error::IndexLength { len: other.len() }),
        },
        Value::Int(s) => match s.as_slice() {
            [None] => Ok(IndexKey::Missing),
            [Some(i)] => Ok(IndexKey::Pos(*i as f64)),
            other => Err(Error::IndexLength { len: other.len() }),
        },
        Value::Double(s) => match s.as_slice() {
            [x] if x.is_nan() => Ok(IndexKey::Missing),
            [x] => Ok(IndexKey::Pos(*x)),
            other => Err(Error::IndexLength { len: other.len() }),
        },
        Value::Str(s) => match s.as_slice() {
            [None] => Ok(IndexKey::Missing),
            [Some(name)] => Ok(IndexKey::Name(name.as_str())),
            other => Err(Error::IndexLength { len: other.len() }),
        },
        other => Err(Error::IndexType {
            container,
            index: other.kind(),
        }),
    }
}

/// Positional lookup into an ordered sequence. Positions are 1-based;
/// NaN, infinities, zero, negatives and overshoots are all absent.
fn position_lookup(container: &Value, pos: f64) -> Option<Value> {
    if pos.is_nan() || pos.is_infinite() {
        return None;
    }
    let pos = pos.trunc();
    if pos < 1.0 {
        return None;
    }
    element_at(container, pos as usize - 1)
}

/// Name lookup into an ordered sequence through its parallel name
/// array; first exact match wins.
fn name_lookup(container: &Value, name: &str) -> Option<Value> {
    let position = match container {
        Value::Logical(s) => s.position_of(name),
        Value::Int(s) => s.position_of(name),
        Value::Double(s) => s.position_of(name),
        Value::Str(s) => s.position_of(name),
        Value::List(s) => s.position_of(name),
        _ => None,
    }?;
    element_at(container, position)
}

/// Element extraction (0-based). Atomic elements come out as scalar
/// values; list elements come out as themselves. Extraction drops the
/// parent's names and attributes.
fn element_at(container: &Value, index: usize) -> Option<Value> {
    match container {
        Value::Logical(s) => s.get(index).map(|e| (*e).into_value()),
        Value::Int(s) => s.get(index).map(|e| (*e).into_value()),
        Value::Double(s) => s.get(index).map(|e| (*e).into_value()),
        Value::Str(s) => s.get(index).map(|e| e.clone().into_value()),
        Value::List(s) => s.get(index).cloned(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use talon_value::list;

    #[test]
    fn positional_misses_are_absent_not_errors() {
        let x = Value::from(vec![10.0, 20.0]);
        assert_eq!(access_step(&x, &Value::int(3)), Ok(None));
        assert_eq!(access_step(&x, &Value::int(0)), Ok(None));
        assert_eq!(access_step(&x, &Value::int(-1)), Ok(None));
        assert_eq!(access_step(&x, &Value::double(f64::INFINITY)), Ok(None));
        assert_eq!(access_step(&x, &Value::na()), Ok(None));
    }

    #[test]
    fn positions_truncate_toward_zero() {
        let x = Value::from(vec![10.0, 20.0]);
        assert_eq!(access_step(&x, &Value::double(1.9)), Ok(Some(Value::double(10.0))));
    }

    #[test]
    fn scalars_behave_as_length_one_sequences() {
        let x = Value::double(5.0);
        assert_eq!(access_step(&x, &Value::int(1)), Ok(Some(Value::double(5.0))));
        assert_eq!(access_step(&x, &Value::int(2)), Ok(None));
    }

    #[test]
    fn malformed_indices_are_errors() {
        let x = Value::from(vec![10.0, 20.0]);
        assert_eq!(
            access_step(&x, &Value::from(vec![1.0, 2.0])),
            Err(Error::IndexLength { len: 2 })
        );
        assert_eq!(
            access_step(&x, &Value::logical(true)),
            Err(Error::IndexType {
                container: ValueKind::Double,
                index: ValueKind::Logical,
            })
        );
    }

    #[test]
    fn name_lookup_first_match_wins() {
        let x = list!["a" => 1.0, "a" => 2.0];
        assert_eq!(
            access_step(&x, &Value::string("a")),
            Ok(Some(Value::double(1.0)))
        );
    }

    #[test]
    fn empty_and_missing_names_never_match() {
        let x = list!["a" => 1.0, "b" => 2.0];
        assert_eq!(access_step(&x, &Value::string("")), Ok(None));
        assert_eq!(access_step(&x, &Value::na_string()), Ok(None));
        assert_eq!(access_step(&x, &Value::string("c")), Ok(None));
    }

    #[test]
    fn unsupported_containers_refuse_indexing() {
        let err = access_step(&Value::complex(1.0, 2.0), &Value::int(1)).unwrap_err();
        assert_eq!(
            err,
            Error::UnsupportedContainer {
                kind: ValueKind::Complex,
            }
        );
        assert_eq!(
            err.to_string(),
            "don't know how to index object of type complex"
        );
    }

    #[test]
    fn null_is_indexable_and_always_absent() {
        assert_eq!(access_step(&Value::Null, &Value::int(1)), Ok(None));
        assert_eq!(access_step(&Value::Null, &Value::string("a")), Ok(None));
    }
}
