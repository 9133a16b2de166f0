//! Left and right folds.

use talon_value::{Error, Value};

use crate::map::elements;

/// Fold `x` left-to-right with `f(acc, elem)`.
///
/// - Empty `x` with no `init` is an [`Error::EmptyReduce`].
/// - Empty `x` with an `init` returns `init`.
/// - A single element with no `init` comes back unchanged; `f` is
///   never called.
/// - Otherwise the accumulator seeds from `init` (or the first
///   element) and folds across the rest.
pub fn reduce<F>(x: &Value, mut f: F, init: Option<Value>) -> Result<Value, Error>
where
    F: FnMut(&Value, &Value) -> Result<Value, Error>,
{
    let mut values = elements(x)?.into_iter().map(|(_, value)| value);
    let mut acc = match init {
        Some(seed) => seed,
        None => match values.next() {
            Some(first) => first,
            None => return Err(Error::EmptyReduce),
        },
    };
    for value in values {
        acc = f(&acc, &value)?;
    }
    Ok(acc)
}

/// The mirror of [`reduce`]: fold right-to-left with `f(elem, acc)`,
/// seeding from `init` at the right end (or from the last element).
pub fn reduce_right<F>(x: &Value, mut f: F, init: Option<Value>) -> Result<Value, Error>
where
    F: FnMut(&Value, &Value) -> Result<Value, Error>,
{
    let mut values = elements(x)?.into_iter().map(|(_, value)| value).rev();
    let mut acc = match init {
        Some(seed) => seed,
        None => match values.next() {
            Some(last) => last,
            None => return Err(Error::EmptyReduce),
        },
    };
    for value in values {
        acc = f(&value, &acc)?;
    }
    Ok(acc)
}

/// Fold `x` left-to-right with a parallel sequence `y` supplying a
/// second argument: `f(acc, x_i, y_i)`.
///
/// `y` must have exactly `len(x) - 1` elements when there is no
/// `init` (one `y` per fold step), or `len(x)` elements when a seed is
/// given; anything else is an [`Error::LengthMismatch`].
pub fn reduce2<F>(x: &Value, y: &Value, mut f: F, init: Option<Value>) -> Result<Value, Error>
where
    F: FnMut(&Value, &Value, &Value) -> Result<Value, Error>,
{
    let xs: Vec<Value> = elements(x)?.into_iter().map(|(_, value)| value).collect();
    let ys: Vec<Value> = elements(y)?.into_iter().map(|(_, value)| value).collect();
    check_paired_length(xs.len(), ys.len(), init.is_some())?;

    let mut values = xs.into_iter();
    let mut acc = match init {
        Some(seed) => seed,
        None => match values.next() {
            Some(first) => first,
            None => return Err(Error::EmptyReduce),
        },
    };
    for (value, second) in values.zip(ys) {
        acc = f(&acc, &value, &second)?;
    }
    Ok(acc)
}

/// The mirror of [`reduce2`]: fold right-to-left with
/// `f(x_i, y_i, acc)`.
pub fn reduce2_right<F>(x: &Value, y: &Value, mut f: F, init: Option<Value>) -> Result<Value, Error>
where
    F: FnMut(&Value, &Value, &Value) -> Result<Value, Error>,
{
    let xs: Vec<Value> = elements(x)?.into_iter().map(|(_, value)| value).collect();
    let ys: Vec<Value> = elements(y)?.into_iter().map(|(_, value)| value).collect();
    check_paired_length(xs.len(), ys.len(), init.is_some())?;

    let mut values = xs.into_iter().rev();
    let mut acc = match init {
        Some(seed) => seed,
        None => match values.next() {
            Some(last) => last,
            None => return Err(Error::EmptyReduce),
        },
    };
    for (value, second) in values.zip(ys.into_iter().rev()) {
        acc = f(&value, &second, &acc)?;
    }
    Ok(acc)
}

fn check_paired_length(x_len: usize, y_len: usize, has_init: bool) -> Result<(), Error> {
    let expected = if has_init {
        x_len
    } else {
        x_len.saturating_sub(1)
    };
    if y_len != expected {
        return Err(Error::LengthMismatch {
            left: expected,
            right: y_len,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use talon_value::list;

    fn add(acc: &Value, value: &Value) -> Result<Value, Error> {
        Ok(Value::double(
            acc.as_scalar_f64().unwrap_or(f64::NAN) + value.as_scalar_f64().unwrap_or(f64::NAN),
        ))
    }

    fn concat(acc: &Value, value: &Value) -> Result<Value, Error> {
        Ok(Value::string(format!(
            "({} {})",
            acc.as_scalar_str().unwrap_or("?"),
            value.as_scalar_str().unwrap_or("?")
        )))
    }

    #[test]
    fn folds_left_to_right() {
        let x = Value::from(vec!["a", "b", "c"]);
        let out = reduce(&x, concat, None).unwrap();
        assert_eq!(out, Value::string("((a b) c)"));
    }

    #[test]
    fn folds_right_to_left_with_mirrored_arguments() {
        let x = Value::from(vec!["a", "b", "c"]);
        let out = reduce_right(&x, concat, None).unwrap();
        assert_eq!(out, Value::string("(a (b c))"));

        let out = reduce_right(&x, concat, Some(Value::string("z"))).unwrap();
        assert_eq!(out, Value::string("(a (b (c z)))"));
    }

    #[test]
    fn empty_input_needs_a_seed() {
        assert_eq!(
            reduce(&list![], add, Some(Value::double(0.0))),
            Ok(Value::double(0.0))
        );
        assert_eq!(reduce(&list![], add, None), Err(Error::EmptyReduce));
    }

    #[test]
    fn single_element_comes_back_untouched() {
        let x = list![7.0];
        let out = reduce(&x, |_, _| Err(Error::custom("must not be called")), None).unwrap();
        assert_eq!(out, Value::double(7.0));
    }

    #[test]
    fn reduce2_threads_the_second_sequence() {
        let x = Value::from(vec![1.0, 2.0, 3.0]);
        let y = Value::from(vec![10.0, 20.0]);
        let out = reduce2(
            &x,
            &y,
            |acc, value, second| {
                Ok(Value::double(
                    acc.as_scalar_f64().unwrap_or(f64::NAN)
                        + value.as_scalar_f64().unwrap_or(f64::NAN)
                        + second.as_scalar_f64().unwrap_or(f64::NAN),
                ))
            },
            None,
        )
        .unwrap();
        // (1+2+10) + 3 + 20
        assert_eq!(out, Value::double(36.0));
    }

    #[test]
    fn reduce2_right_mirrors_direction_and_pairing() {
        let x = Value::from(vec!["a", "b", "c"]);
        let y = Value::from(vec!["1", "2"]);
        let out = reduce2_right(
            &x,
            &y,
            |value, second, acc| {
                Ok(Value::string(format!(
                    "({} {} {})",
                    value.as_scalar_str().unwrap_or("?"),
                    second.as_scalar_str().unwrap_or("?"),
                    acc.as_scalar_str().unwrap_or("?")
                )))
            },
            None,
        )
        .unwrap();
        assert_eq!(out, Value::string("(a 1 (b 2 c))"));
    }

    #[test]
    fn reduce2_checks_pairing_arity() {
        let x = Value::from(vec![1.0, 2.0, 3.0]);
        let y = Value::from(vec![10.0]);
        assert_eq!(
            reduce2(&x, &y, |acc, _, _| Ok(acc.clone()), None),
            Err(Error::LengthMismatch { left: 2, right: 1 })
        );
        assert_eq!(
            reduce2(&x, &y, |acc, _, _| Ok(acc.clone()), Some(Value::double(0.0))),
            Err(Error::LengthMismatch { left: 3, right: 1 })
        );
    }
}
