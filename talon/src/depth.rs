//! Nesting-depth probing.

use talon_value::{Error, Value};

/// How deeply nested a value is.
///
/// `Null` has depth 0; atomic sequences and complex values are leaves
/// at depth 1; lists and records sit one level above their deepest
/// child (an empty list is depth 1). Scopes and accessors are not
/// traversable and cannot be probed.
pub fn nesting_depth(x: &Value) -> Result<usize, Error> {
    match x {
        Value::Null => Ok(0),
        Value::Logical(_) | Value::Int(_) | Value::Double(_) | Value::Str(_)
        | Value::Complex(_) => Ok(1),
        Value::List(s) => {
            let mut deepest = 0;
            for child in s {
                deepest = deepest.max(nesting_depth(child)?);
            }
            Ok(1 + deepest)
        }
        Value::Record(r) => {
            let mut deepest = 0;
            for child in r.values() {
                deepest = deepest.max(nesting_depth(child)?);
            }
            Ok(1 + deepest)
        }
        other => Err(Error::UnsupportedContainer { kind: other.kind() }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use talon_value::list;

    #[test]
    fn leaves_and_nesting() {
        assert_eq!(nesting_depth(&Value::Null), Ok(0));
        assert_eq!(nesting_depth(&Value::double(1.0)), Ok(1));
        assert_eq!(nesting_depth(&list![]), Ok(1));
        assert_eq!(nesting_depth(&list![1.0, 2.0]), Ok(2));
        assert_eq!(nesting_depth(&list![list![list![1.0]], 2.0]), Ok(4));
    }

    #[test]
    fn ragged_structures_report_the_deepest_branch() {
        let x = list![list![1.0], list![list![2.0]]];
        assert_eq!(nesting_depth(&x), Ok(4));
    }
}
