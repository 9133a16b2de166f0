//! Running folds: every intermediate accumulator, not just the last.

use talon_value::{Error, Name, VSeq, Value};

use crate::map::{elements, is_named};

/// Fold `x` left-to-right with `f(acc, elem)`, collecting every
/// partial result into a list.
///
/// The result has `len(x)` elements (no seed) or `len(x) + 1` (with a
/// seed): position *i* holds the fold of the first *i* elements after
/// the seed. Each output position inherits the name of the input
/// element that produced it; the seed slot is named `".init"` when the
/// input is named, and the whole output stays unnamed when it is not.
///
/// An empty `x` with no seed is an empty list — there is nothing to
/// accumulate, which is not the error it would be for a plain
/// reduction.
pub fn accumulate<F>(x: &Value, mut f: F, init: Option<Value>) -> Result<Value, Error>
where
    F: FnMut(&Value, &Value) -> Result<Value, Error>,
{
    let named = is_named(x);
    let elems = elements(x)?;
    partials(elems, init, named, |acc, value| f(acc, value))
}

/// The mirror of [`accumulate`]: fold right-to-left with `f(elem, acc)`,
/// with positions and names mirrored. The seed slot (when given) lands
/// at the right end, tagged `".init"` under the same naming rule.
pub fn accumulate_right<F>(x: &Value, mut f: F, init: Option<Value>) -> Result<Value, Error>
where
    F: FnMut(&Value, &Value) -> Result<Value, Error>,
{
    let named = is_named(x);
    let mut elems = elements(x)?;
    elems.reverse();
    let out = partials(elems, init, named, |acc, value| f(value, acc))?;
    match out {
        Value::List(seq) => {
            let mut elems: Vec<Value> = seq.iter().cloned().collect();
            elems.reverse();
            let mut names = seq.names().map(<[Name]>::to_vec);
            if let Some(names) = &mut names {
                names.reverse();
            }
            let mut reversed = VSeq::from_vec(elems);
            reversed.set_names(names)?;
            Ok(Value::List(reversed))
        }
        other => Ok(other),
    }
}

/// Shared accumulation core; `step` already has the argument order of
/// the variant being built.
fn partials<F>(
    elems: Vec<(Name, Value)>,
    init: Option<Value>,
    named: bool,
    mut step: F,
) -> Result<Value, Error>
where
    F: FnMut(&Value, &Value) -> Result<Value, Error>,
{
    let mut values = elems.into_iter();
    let mut out: Vec<Value> = Vec::new();
    let mut names: Vec<Name> = Vec::new();

    let mut acc = match init {
        Some(seed) => {
            names.push(Some(".init".to_owned()));
            seed
        }
        None => match values.next() {
            Some((name, first)) => {
                names.push(name);
                first
            }
            None => return Ok(Value::List(VSeq::new())),
        },
    };
    out.push(acc.clone());

    for (name, value) in values {
        acc = step(&acc, &value)?;
        out.push(acc.clone());
        names.push(name);
    }

    let mut seq = VSeq::from_vec(out);
    if named {
        seq.set_names(Some(names))?;
    }
    Ok(Value::List(seq))
}
