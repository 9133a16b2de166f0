//! Kind-preserving selective transformation.
//!
//! Every operation here returns the same container kind it was given:
//! replacement elements are written back through the store's [`Atom`]
//! seam, which re-validates them (widening only) and surfaces a
//! [`Error::Coerce`] instead of silently changing the container's
//! kind. Names and attributes ride through unchanged.
//!
//! The selection variants (`modify_if`, `modify_at`) reduce to one
//! masked rewrite; the paired and indexed variants (`modify2`,
//! `imodify`) reduce to recycling plus the same rewrite; and
//! `modify_depth` recurses with the rewrite at the bottom.

use talon_value::{Atom, Error, Name, VRecord, VSeq, Value};

use crate::depth::nesting_depth;
use crate::map::{elements, index_values};
use crate::recycle::recycle;

/// Element selection for [`modify_if`].
pub enum Predicate {
    /// Apply a predicate closure to each element.
    Func(Box<dyn FnMut(&Value) -> Result<bool, Error>>),
    /// A pre-computed mask, aligned with positions; its length must
    /// equal the container's.
    Mask(Vec<bool>),
}

impl Predicate {
    /// Select elements with a predicate closure.
    pub fn func(p: impl FnMut(&Value) -> Result<bool, Error> + 'static) -> Self {
        Predicate::Func(Box::new(p))
    }

    /// Select elements with a pre-computed boolean mask.
    pub fn mask(mask: impl Into<Vec<bool>>) -> Self {
        Predicate::Mask(mask.into())
    }
}

impl core::fmt::Debug for Predicate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Predicate::Func(_) => f.write_str("Predicate::Func(..)"),
            Predicate::Mask(mask) => f.debug_tuple("Predicate::Mask").field(mask).finish(),
        }
    }
}

/// Element selection for [`modify_at`].
#[derive(Debug, Clone, PartialEq)]
pub enum At {
    /// Select slots by exact name. The container must have names.
    Names(Vec<String>),
    /// Select slots by 1-based position. All-negative positions mean
    /// "all except these"; mixing signs is an error; zeros are
    /// ignored.
    Positions(Vec<i64>),
}

impl At {
    /// Name selection from anything string-like.
    pub fn names<I>(names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        At::Names(names.into_iter().map(Into::into).collect())
    }

    /// Position selection (1-based; negative positions exclude).
    pub fn positions<I>(positions: I) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        At::Positions(positions.into_iter().collect())
    }
}

/// Transform every element of `x` with `f`, preserving `x`'s kind.
///
/// `Null` comes back as `Null`; scopes, accessors and complex values
/// have no elements and are an [`Error::UnsupportedContainer`].
///
/// ```
/// use talon::{modify, Value};
///
/// let x = Value::from(vec![1.0, 2.0]);
/// let out = modify(&x, |v| {
///     Ok(Value::double(v.as_scalar_f64().unwrap_or(0.0) * 10.0))
/// }).unwrap();
/// assert_eq!(out, Value::from(vec![10.0, 20.0]));
/// ```
pub fn modify<F>(x: &Value, mut f: F) -> Result<Value, Error>
where
    F: FnMut(&Value) -> Result<Value, Error>,
{
    modify_masked(x, None, &mut f)
}

/// Transform only the elements selected by `predicate`; the rest pass
/// through unchanged.
pub fn modify_if<F>(x: &Value, predicate: Predicate, mut f: F) -> Result<Value, Error>
where
    F: FnMut(&Value) -> Result<Value, Error>,
{
    let mask = resolve_mask(x, predicate)?;
    modify_masked(x, Some(&mask), &mut f)
}

/// Transform the elements selected by name or position.
///
/// Name selection requires a named container ([`Error::NoNames`]
/// otherwise). Position selection is 1-based; an all-negative
/// selector inverts ("all except these"), mixed signs are an
/// [`Error::MixedSelector`], and an empty selector selects nothing.
pub fn modify_at<F>(x: &Value, at: At, mut f: F) -> Result<Value, Error>
where
    F: FnMut(&Value) -> Result<Value, Error>,
{
    let mask = selection_mask(x, &at)?;
    modify_masked(x, Some(&mask), &mut f)
}

/// Transform paired elements of `x` and `y` (recycled to a common
/// length) with `f(x_elem, y_elem)`, preserving `x`'s kind.
pub fn modify2<F>(x: &Value, y: &Value, mut f: F) -> Result<Value, Error>
where
    F: FnMut(&Value, &Value) -> Result<Value, Error>,
{
    let (xr, yr) = recycle(x, y)?;
    let ys: Vec<Value> = elements(&yr)?.into_iter().map(|(_, value)| value).collect();
    let mut position = 0usize;
    let mut paired = move |x_elem: &Value| -> Result<Value, Error> {
        let y_elem = ys.get(position).cloned().unwrap_or(Value::Null);
        position += 1;
        f(x_elem, &y_elem)
    };
    modify_masked(&xr, None, &mut paired)
}

/// Transform each element together with its name (or 1-based position,
/// for unnamed containers): `modify2(x, index_of(x), f)`.
pub fn imodify<F>(x: &Value, f: F) -> Result<Value, Error>
where
    F: FnMut(&Value, &Value) -> Result<Value, Error>,
{
    let indices = index_values(x)?;
    modify2(x, &Value::List(VSeq::from_vec(indices)), f)
}

/// Transform only the elements at nesting level `depth`.
///
/// Depth 0 is `x` itself; depth 1 its direct children (a plain
/// [`modify`]); deeper levels recurse through lists and records. A
/// negative depth counts up from the deepest leaf and implies ragged
/// mode; see [`modify_depth_ragged`].
pub fn modify_depth<F>(x: &Value, depth: isize, f: F) -> Result<Value, Error>
where
    F: FnMut(&Value) -> Result<Value, Error>,
{
    let ragged = depth < 0;
    modify_depth_ragged(x, depth, f, ragged)
}

/// [`modify_depth`] with explicit control over ragged subtrees.
///
/// With `ragged` off, a leaf reached before the target depth is an
/// [`Error::InsufficientDepth`]; with it on, `f` is applied directly
/// to that leaf instead. Negative depths resolve against
/// [`nesting_depth`] before descending, and a resolved depth below
/// zero fails rather than silently clamping to the root.
pub fn modify_depth_ragged<F>(x: &Value, depth: isize, mut f: F, ragged: bool) -> Result<Value, Error>
where
    F: FnMut(&Value) -> Result<Value, Error>,
{
    let resolved = if depth < 0 {
        let resolved = nesting_depth(x)? as isize + depth;
        if resolved < 0 {
            return Err(Error::InsufficientDepth { depth });
        }
        resolved as usize
    } else {
        depth as usize
    };
    modify_depth_rec(x, resolved, depth, &mut f, ragged)
}

fn modify_depth_rec<F>(
    x: &Value,
    remaining: usize,
    requested: isize,
    f: &mut F,
    ragged: bool,
) -> Result<Value, Error>
where
    F: FnMut(&Value) -> Result<Value, Error>,
{
    if remaining == 0 {
        return f(x);
    }
    if remaining == 1 {
        return match x {
            Value::Scope(_) | Value::Accessor(_) | Value::Complex(_) => {
                if ragged {
                    f(x)
                } else {
                    Err(Error::InsufficientDepth { depth: requested })
                }
            }
            _ => modify_masked(x, None, f),
        };
    }
    match x {
        Value::List(_) | Value::Record(_) => {
            crate::trace!("modify_depth: descending, {remaining} levels to go");
            let mut descend =
                |child: &Value| modify_depth_rec(child, remaining - 1, requested, &mut *f, ragged);
            modify_masked(x, None, &mut descend)
        }
        _ if ragged => f(x),
        _ => Err(Error::InsufficientDepth { depth: requested }),
    }
}

/// The masked rewrite every selection variant reduces to. `None`
/// selects everything; out-of-range mask slots select nothing.
fn modify_masked<F>(x: &Value, mask: Option<&[bool]>, f: &mut F) -> Result<Value, Error>
where
    F: FnMut(&Value) -> Result<Value, Error>,
{
    match x {
        Value::Null => Ok(Value::Null),
        Value::Logical(s) => Ok(Value::Logical(modify_seq(s, mask, f)?)),
        Value::Int(s) => Ok(Value::Int(modify_seq(s, mask, f)?)),
        Value::Double(s) => Ok(Value::Double(modify_seq(s, mask, f)?)),
        Value::Str(s) => Ok(Value::Str(modify_seq(s, mask, f)?)),
        Value::List(s) => Ok(Value::List(modify_seq(s, mask, f)?)),
        Value::Record(r) => Ok(Value::Record(modify_record(r, mask, f)?)),
        other => Err(Error::UnsupportedContainer { kind: other.kind() }),
    }
}

fn modify_seq<T, F>(s: &VSeq<T>, mask: Option<&[bool]>, f: &mut F) -> Result<VSeq<T>, Error>
where
    T: Atom,
    F: FnMut(&Value) -> Result<Value, Error>,
{
    let mut out = Vec::with_capacity(s.len());
    for (i, elem) in s.iter().enumerate() {
        if selected(mask, i) {
            let replacement = f(&elem.clone().into_value())?;
            out.push(T::from_value(&replacement)?);
        } else {
            out.push(elem.clone());
        }
    }
    let mut seq = VSeq::from_vec(out);
    if let Some(names) = s.names() {
        seq.set_names(Some(names.to_vec()))?;
    }
    *seq.attrs_mut() = s.attrs().clone();
    Ok(seq)
}

fn modify_record<F>(r: &VRecord, mask: Option<&[bool]>, f: &mut F) -> Result<VRecord, Error>
where
    F: FnMut(&Value) -> Result<Value, Error>,
{
    let mut out = VRecord::with_capacity(r.len());
    for (i, (name, value)) in r.iter().enumerate() {
        let replacement = if selected(mask, i) {
            f(value)?
        } else {
            value.clone()
        };
        out.insert(name, replacement);
    }
    *out.attrs_mut() = r.attrs().clone();
    Ok(out)
}

fn selected(mask: Option<&[bool]>, index: usize) -> bool {
    mask.is_none_or(|mask| mask.get(index).copied().unwrap_or(false))
}

fn resolve_mask(x: &Value, predicate: Predicate) -> Result<Vec<bool>, Error> {
    match predicate {
        Predicate::Mask(mask) => {
            if mask.len() != x.len() {
                return Err(Error::LengthMismatch {
                    left: x.len(),
                    right: mask.len(),
                });
            }
            Ok(mask)
        }
        Predicate::Func(mut p) => elements(x)?.iter().map(|(_, value)| p(value)).collect(),
    }
}

fn selection_mask(x: &Value, at: &At) -> Result<Vec<bool>, Error> {
    match at {
        At::Names(wanted) => {
            let slot_names: Vec<Name> = match x {
                Value::Record(record) => record.keys().map(|name| Some(name.to_owned())).collect(),
                _ => match x.names() {
                    Some(names) => names.to_vec(),
                    None => return Err(Error::NoNames { kind: x.kind() }),
                },
            };
            Ok(slot_names
                .iter()
                .map(|slot| match slot {
                    Some(name) => wanted.iter().any(|w| w == name),
                    None => false,
                })
                .collect())
        }
        At::Positions(positions) => {
            let has_positive = positions.iter().any(|&p| p > 0);
            let has_negative = positions.iter().any(|&p| p < 0);
            if has_positive && has_negative {
                return Err(Error::MixedSelector);
            }
            let len = x.len();
            if has_negative {
                Ok((1..=len)
                    .map(|i| !positions.contains(&-(i as i64)))
                    .collect())
            } else {
                Ok((1..=len).map(|i| positions.contains(&(i as i64))).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use talon_value::{ValueKind, list};

    fn times_ten(value: &Value) -> Result<Value, Error> {
        Ok(Value::double(value.as_scalar_f64().unwrap_or(f64::NAN) * 10.0))
    }

    fn stringify(value: &Value) -> Result<Value, Error> {
        Ok(Value::string(format!(
            "{}",
            value.as_scalar_f64().unwrap_or(f64::NAN)
        )))
    }

    // -----------------------------------------------------------------
    // modify
    // -----------------------------------------------------------------

    #[test]
    fn modify_preserves_kind_names_and_attrs() {
        let x = Value::Double(VSeq::from_pairs([("a", 1.0), ("b", 2.0)]))
            .with_attr("units", "cm");
        let out = modify(&x, times_ten).unwrap();
        assert!(out.is_double());
        assert_eq!(out.names(), x.names());
        assert_eq!(out.attr("units"), Some(&Value::string("cm")));
        assert_eq!(out.as_scalar_f64(), None); // still length 2
    }

    #[test]
    fn modify_surfaces_incompatible_replacements() {
        let x = Value::from(vec![1.0, 2.0]);
        let err = modify(&x, stringify).unwrap_err();
        assert_eq!(
            err,
            Error::Coerce {
                from: ValueKind::Str,
                to: ValueKind::Double,
            }
        );
    }

    #[test]
    fn modify_of_null_is_null() {
        assert_eq!(modify(&Value::Null, times_ten), Ok(Value::Null));
    }

    // -----------------------------------------------------------------
    // modify_if / modify_at
    // -----------------------------------------------------------------

    #[test]
    fn modify_if_with_predicate_closure() {
        let x = Value::from(vec![1.0, 5.0, 2.0]);
        let big = Predicate::func(|v| Ok(v.as_scalar_f64().is_some_and(|x| x > 2.0)));
        let out = modify_if(&x, big, times_ten).unwrap();
        assert_eq!(out, Value::from(vec![1.0, 50.0, 2.0]));
    }

    #[test]
    fn modify_if_with_mask_checks_length() {
        let x = Value::from(vec![1.0, 2.0]);
        let out = modify_if(&x, Predicate::mask(vec![false, true]), times_ten).unwrap();
        assert_eq!(out, Value::from(vec![1.0, 20.0]));

        let err = modify_if(&x, Predicate::mask(vec![true]), times_ten).unwrap_err();
        assert_eq!(err, Error::LengthMismatch { left: 2, right: 1 });
    }

    #[test]
    fn modify_at_names_requires_names() {
        let x = Value::from(vec![1.0, 2.0]);
        let err = modify_at(&x, At::names(["a"]), times_ten).unwrap_err();
        assert_eq!(
            err,
            Error::NoNames {
                kind: ValueKind::Double,
            }
        );
    }

    #[test]
    fn modify_at_converts_exactly_the_named_fields() {
        let car = list![
            "mpg" => 21.0,
            "cyl" => 6.0,
            "disp" => 160.0,
            "am" => 1.0
        ];
        let out = modify_at(&car, At::names(["cyl", "am"]), stringify).unwrap();
        assert_eq!(
            out,
            list!["mpg" => 21.0, "cyl" => "6", "disp" => 160.0, "am" => "1"]
        );
    }

    #[test]
    fn negative_positions_exclude() {
        let x = Value::from(vec![1.0, 2.0, 3.0]);
        let out = modify_at(&x, At::positions([-2]), times_ten).unwrap();
        assert_eq!(out, Value::from(vec![10.0, 2.0, 30.0]));
    }

    #[test]
    fn mixed_sign_positions_are_an_error() {
        let x = Value::from(vec![1.0, 2.0, 3.0]);
        let err = modify_at(&x, At::positions([1, -2]), times_ten).unwrap_err();
        assert_eq!(err, Error::MixedSelector);
    }

    #[test]
    fn empty_selector_selects_nothing() {
        let x = Value::from(vec![1.0, 2.0]);
        let out = modify_at(&x, At::positions([]), times_ten).unwrap();
        assert_eq!(out, x);
    }

    // -----------------------------------------------------------------
    // modify2 / imodify
    // -----------------------------------------------------------------

    #[test]
    fn modify2_pairs_and_preserves_x_kind() {
        let x = Value::from(vec![1.0, 2.0, 3.0, 4.0]);
        let y = Value::from(vec![10.0, 100.0]);
        let out = modify2(&x, &y, |a, b| {
            Ok(Value::double(
                a.as_scalar_f64().unwrap_or(f64::NAN) * b.as_scalar_f64().unwrap_or(f64::NAN),
            ))
        })
        .unwrap();
        assert_eq!(out, Value::from(vec![10.0, 200.0, 30.0, 400.0]));
    }

    #[test]
    fn modify2_rejects_incompatible_lengths() {
        let x = Value::from(vec![1.0, 2.0, 3.0]);
        let y = Value::from(vec![1.0, 2.0]);
        let err = modify2(&x, &y, |a, _| Ok(a.clone())).unwrap_err();
        assert_eq!(err, Error::LengthMismatch { left: 3, right: 2 });
    }

    #[test]
    fn imodify_supplies_names_or_positions() {
        let x = list!["a" => 1.0, "b" => 2.0];
        let out = imodify(&x, |_, index| Ok(index.clone())).unwrap();
        assert_eq!(out, list!["a" => "a", "b" => "b"]);

        let unnamed = Value::from(vec![5.0, 5.0]);
        let out = imodify(&unnamed, |value, index| {
            Ok(Value::double(
                value.as_scalar_f64().unwrap_or(f64::NAN)
                    + index.as_scalar_i64().unwrap_or(0) as f64,
            ))
        })
        .unwrap();
        assert_eq!(out, Value::from(vec![6.0, 7.0]));
    }

    // -----------------------------------------------------------------
    // modify_depth
    // -----------------------------------------------------------------

    #[test]
    fn depth_zero_is_the_value_itself() {
        let x = list![1.0];
        let out = modify_depth(&x, 0, |v| Ok(Value::int(v.len() as i64))).unwrap();
        assert_eq!(out, Value::int(1));
    }

    #[test]
    fn depth_one_is_plain_modify() {
        let x = list![1.0, 2.0];
        let out = modify_depth(&x, 1, times_ten).unwrap();
        assert_eq!(out, list![10.0, 20.0]);
    }

    #[test]
    fn deeper_levels_recurse_through_lists() {
        let x = list![list![1.0, 2.0], list![3.0]];
        let out = modify_depth(&x, 2, times_ten).unwrap();
        assert_eq!(out, list![list![10.0, 20.0], list![30.0]]);
    }

    #[test]
    fn scalar_leaves_still_have_elements_at_the_next_level() {
        // The scalar 2.0 is a length-1 sequence, so depth 2 reaches
        // its single element without raggedness.
        let x = list![list![1.0], 2.0];
        let out = modify_depth(&x, 2, times_ten).unwrap();
        assert_eq!(out, list![list![10.0], 20.0]);
    }

    #[test]
    fn shallow_leaves_error_unless_ragged() {
        let x = list![list![1.0], 2.0];
        let err = modify_depth(&x, 3, times_ten).unwrap_err();
        assert_eq!(err, Error::InsufficientDepth { depth: 3 });

        let out = modify_depth_ragged(&x, 3, times_ten, true).unwrap();
        assert_eq!(out, list![list![10.0], 20.0]);
    }

    #[test]
    fn negative_depth_counts_up_from_the_leaves() {
        // Depth 4 structure; -1 resolves to level 3, the innermost
        // list's elements.
        let x = list![list![list![1.0]]];
        let out = modify_depth(&x, -1, |v| Ok(Value::int(v.len() as i64))).unwrap();
        assert_eq!(out, list![list![list![1_i64]]]);
    }

    #[test]
    fn negative_depth_below_zero_fails_loudly() {
        let x = list![1.0];
        let err = modify_depth(&x, -7, times_ten).unwrap_err();
        assert_eq!(err, Error::InsufficientDepth { depth: -7 });
    }
}
