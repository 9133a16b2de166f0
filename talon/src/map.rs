//! The element-wise map family.
//!
//! These are thin wrappers over one element view: every element-bearing
//! container (ordered sequences, records, `Null` as the empty
//! sequence) is flattened to `(name, value)` pairs, transformed, and
//! rebuilt. The typed variants (`map_lgl`, `map_int`, `map_dbl`,
//! `map_chr`) write results back through the [`Atom`] seam, so a
//! callback result that does not fit the target kind is a
//! [`Error::Coerce`].

use talon_value::{Atom, Error, Name, VSeq, Value};

use crate::recycle::recycle;

/// The `(name, value)` element view shared by the map, reduce and
/// modify families. `Null` is empty; scopes, accessors and complex
/// values have no elements to offer.
pub(crate) fn elements(x: &Value) -> Result<Vec<(Name, Value)>, Error> {
    match x {
        Value::Null => Ok(Vec::new()),
        Value::Logical(s) => Ok(atom_pairs(s)),
        Value::Int(s) => Ok(atom_pairs(s)),
        Value::Double(s) => Ok(atom_pairs(s)),
        Value::Str(s) => Ok(atom_pairs(s)),
        Value::List(s) => Ok(atom_pairs(s)),
        Value::Record(r) => Ok(r
            .iter()
            .map(|(name, value)| (Some(name.to_owned()), value.clone()))
            .collect()),
        other => Err(Error::UnsupportedContainer { kind: other.kind() }),
    }
}

fn atom_pairs<T: Atom>(s: &VSeq<T>) -> Vec<(Name, Value)> {
    s.iter()
        .enumerate()
        .map(|(i, elem)| (s.name_at(i), elem.clone().into_value()))
        .collect()
}

/// Whether results built from `x` should carry a name array.
pub(crate) fn is_named(x: &Value) -> bool {
    match x {
        Value::Record(_) => true,
        _ => x.names().is_some(),
    }
}

/// The per-element identity of `x`: its names when it is named, its
/// 1-based positions otherwise. Used by the indexed variants.
pub(crate) fn index_values(x: &Value) -> Result<Vec<Value>, Error> {
    let elems = elements(x)?;
    if is_named(x) {
        Ok(elems
            .into_iter()
            .map(|(name, _)| match name {
                Some(name) => Value::string(name),
                None => Value::na_string(),
            })
            .collect())
    } else {
        Ok((1..=elems.len()).map(|i| Value::int(i as i64)).collect())
    }
}

/// Shared rebuild for the whole map family.
fn map_atom<T, F>(x: &Value, mut f: F) -> Result<Value, Error>
where
    T: Atom,
    F: FnMut(&Value) -> Result<Value, Error>,
{
    let named = is_named(x);
    let elems = elements(x)?;
    let mut out = Vec::with_capacity(elems.len());
    let mut names = Vec::with_capacity(elems.len());
    for (name, value) in elems {
        out.push(T::from_value(&f(&value)?)?);
        names.push(name);
    }
    let mut seq = VSeq::from_vec(out);
    if named {
        seq.set_names(Some(names))?;
    }
    Ok(T::seq_into_value(seq))
}

/// Apply `f` to every element, collecting the results into a list.
/// Names are preserved.
pub fn map<F>(x: &Value, f: F) -> Result<Value, Error>
where
    F: FnMut(&Value) -> Result<Value, Error>,
{
    map_atom::<Value, F>(x, f)
}

/// [`map`] into a logical sequence.
pub fn map_lgl<F>(x: &Value, f: F) -> Result<Value, Error>
where
    F: FnMut(&Value) -> Result<Value, Error>,
{
    map_atom::<Option<bool>, F>(x, f)
}

/// [`map`] into an integer sequence.
pub fn map_int<F>(x: &Value, f: F) -> Result<Value, Error>
where
    F: FnMut(&Value) -> Result<Value, Error>,
{
    map_atom::<Option<i64>, F>(x, f)
}

/// [`map`] into a double sequence.
pub fn map_dbl<F>(x: &Value, f: F) -> Result<Value, Error>
where
    F: FnMut(&Value) -> Result<Value, Error>,
{
    map_atom::<f64, F>(x, f)
}

/// [`map`] into a string sequence.
pub fn map_chr<F>(x: &Value, f: F) -> Result<Value, Error>
where
    F: FnMut(&Value) -> Result<Value, Error>,
{
    map_atom::<Option<String>, F>(x, f)
}

/// Apply `f` to paired elements of `x` and `y` after recycling both to
/// a common length; the result is a list carrying the recycled `x`'s
/// names.
pub fn map2<F>(x: &Value, y: &Value, mut f: F) -> Result<Value, Error>
where
    F: FnMut(&Value, &Value) -> Result<Value, Error>,
{
    let (xr, yr) = recycle(x, y)?;
    let named = is_named(&xr);
    let xs = elements(&xr)?;
    let ys = elements(&yr)?;
    let mut out = Vec::with_capacity(xs.len());
    let mut names = Vec::with_capacity(xs.len());
    for ((name, xe), (_, ye)) in xs.iter().zip(ys.iter()) {
        out.push(f(xe, ye)?);
        names.push(name.clone());
    }
    let mut seq = VSeq::from_vec(out);
    if named {
        seq.set_names(Some(names))?;
    }
    Ok(Value::List(seq))
}

/// Apply `f` to each element together with its name (or 1-based
/// position, for unnamed containers).
pub fn imap<F>(x: &Value, mut f: F) -> Result<Value, Error>
where
    F: FnMut(&Value, &Value) -> Result<Value, Error>,
{
    let indices = index_values(x)?;
    let named = is_named(x);
    let elems = elements(x)?;
    let mut out = Vec::with_capacity(elems.len());
    let mut names = Vec::with_capacity(elems.len());
    for ((name, value), index) in elems.iter().zip(indices.iter()) {
        out.push(f(value, index)?);
        names.push(name.clone());
    }
    let mut seq = VSeq::from_vec(out);
    if named {
        seq.set_names(Some(names))?;
    }
    Ok(Value::List(seq))
}

#[cfg(test)]
mod tests {
    use super::*;
    use talon_value::{ValueKind, list};

    fn double_it(value: &Value) -> Result<Value, Error> {
        Ok(Value::double(value.as_scalar_f64().unwrap_or(f64::NAN) * 2.0))
    }

    #[test]
    fn map_preserves_names_and_returns_a_list() {
        let x = list!["a" => 1.0, "b" => 2.0];
        let out = map(&x, double_it).unwrap();
        assert_eq!(out, list!["a" => 2.0, "b" => 4.0]);
    }

    #[test]
    fn map_over_null_is_an_empty_list() {
        assert_eq!(map(&Value::Null, double_it).unwrap(), list![]);
    }

    #[test]
    fn typed_maps_enforce_their_kind() {
        let x = Value::from(vec![1.0, 2.0]);
        let out = map_dbl(&x, double_it).unwrap();
        assert_eq!(out, Value::from(vec![2.0, 4.0]));

        let err = map_int(&x, double_it).unwrap_err();
        assert_eq!(
            err,
            Error::Coerce {
                from: ValueKind::Double,
                to: ValueKind::Int,
            }
        );
    }

    #[test]
    fn map2_recycles_scalars() {
        let x = Value::from(vec![1.0, 2.0, 3.0]);
        let y = Value::double(10.0);
        let out = map2(&x, &y, |a, b| {
            Ok(Value::double(
                a.as_scalar_f64().unwrap_or(f64::NAN) + b.as_scalar_f64().unwrap_or(f64::NAN),
            ))
        })
        .unwrap();
        assert_eq!(out, list![11.0, 12.0, 13.0]);
    }

    #[test]
    fn imap_supplies_names_or_positions() {
        let named = list!["a" => 1.0];
        let out = imap(&named, |_, index| Ok(index.clone())).unwrap();
        assert_eq!(out, list!["a" => "a"]);

        let unnamed = list![1.0, 2.0];
        let out = imap(&unnamed, |_, index| Ok(index.clone())).unwrap();
        assert_eq!(out, list![1_i64, 2_i64]);
    }

    #[test]
    fn scopes_have_no_element_view() {
        let scope: talon_value::VScope = [("x", 1.0)].into_iter().collect();
        let err = map(&Value::Scope(scope), double_it).unwrap_err();
        assert_eq!(
            err,
            Error::UnsupportedContainer {
                kind: ValueKind::Scope,
            }
        );
    }
}
