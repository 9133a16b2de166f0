//! Deep extraction through nested containers.

use talon_value::{Error, VAccessor, Value};

use crate::access::access_step;

/// Extract a deeply nested value, folding `indices` over `x` one step
/// at a time.
///
/// With zero indices, `x` comes back unchanged. The fold
/// short-circuits: at the first absent step — or the first step whose
/// result is `Null`, such as an accessor that found nothing — the
/// result is `Null` and the remaining indices are never evaluated.
/// Malformed indices and unindexable containers are errors and are
/// never swallowed into `Null`.
///
/// A `List` element in `indices` is a splice: its elements are
/// flattened, in order, into the index path before folding.
///
/// ```
/// use talon::{list, pluck, Value};
///
/// let x = list!["a" => list![list!["b" => 1.0]]];
/// let got = pluck(&x, &[Value::from("a"), Value::from(1), Value::from("b")]).unwrap();
/// assert_eq!(got, Value::double(1.0));
///
/// let missing = pluck(&x, &[Value::from("z"), Value::from(1)]).unwrap();
/// assert!(missing.is_null());
/// ```
pub fn pluck(x: &Value, indices: &[Value]) -> Result<Value, Error> {
    let path = splice(indices);
    let mut current = x.clone();
    for index in path {
        match access_step(&current, index)? {
            Some(next) if !next.is_null() => {
                crate::trace!("pluck: descending into a {} value", next.kind());
                current = next;
            }
            _ => return Ok(Value::Null),
        }
    }
    Ok(current)
}

/// Like [`pluck`], but an absent (or `Null`) outcome yields `default`
/// instead.
///
/// Errors still propagate; the default only papers over absence.
pub fn pluck_or(x: &Value, indices: &[Value], default: impl Into<Value>) -> Result<Value, Error> {
    let got = pluck(x, indices)?;
    Ok(if got.is_null() { default.into() } else { got })
}

/// The strict sibling of [`pluck`]: an absent step is an
/// [`Error::NotPresent`] naming the failing index instead of a `Null`
/// result.
pub fn chuck(x: &Value, indices: &[Value]) -> Result<Value, Error> {
    let path = splice(indices);
    let mut current = x.clone();
    for (position, index) in path.iter().enumerate() {
        match access_step(&current, index)? {
            Some(next) if !next.is_null() => current = next,
            _ => return Err(Error::NotPresent { step: position + 1 }),
        }
    }
    Ok(current)
}

/// A reusable accessor performing exact-name attribute lookup.
///
/// The name is captured eagerly: the accessor owns a copy taken at
/// construction time, so later changes to whatever variable built
/// `name` cannot retarget an accessor that already exists. A missing
/// attribute is `Null` (absent), which lets [`pluck`] short-circuit.
pub fn attr_getter(name: impl Into<String>) -> VAccessor {
    let name = name.into();
    VAccessor::new(move |value| Ok(value.attr(&name).cloned().unwrap_or(Value::Null)))
}

/// Flatten list splices in an index path.
fn splice(indices: &[Value]) -> Vec<&Value> {
    let mut flat = Vec::with_capacity(indices.len());
    for index in indices {
        splice_into(index, &mut flat);
    }
    flat
}

fn splice_into<'a>(index: &'a Value, flat: &mut Vec<&'a Value>) {
    match index {
        Value::List(items) => {
            for item in items {
                splice_into(item, flat);
            }
        }
        other => flat.push(other),
    }
}
