//! Length recycling for paired sequences.

use talon_value::{Error, Value};

/// Pair two sequences to a common length by repeating the shorter
/// one's elements (and names) in order.
///
/// Lengths are compatible when they are equal or one divides the
/// other; zero pairs only with zero or one. Incompatible lengths are
/// an [`Error::LengthMismatch`].
pub fn recycle(x: &Value, y: &Value) -> Result<(Value, Value), Error> {
    let (x_len, y_len) = (x.len(), y.len());
    let common = common_length(x_len, y_len).ok_or(Error::LengthMismatch {
        left: x_len,
        right: y_len,
    })?;
    Ok((recycle_to(x, common)?, recycle_to(y, common)?))
}

fn common_length(a: usize, b: usize) -> Option<usize> {
    if a == b {
        Some(a)
    } else if a == 0 || b == 0 {
        (a <= 1 && b <= 1).then_some(0)
    } else if a % b == 0 {
        Some(a)
    } else if b % a == 0 {
        Some(b)
    } else {
        None
    }
}

fn recycle_to(x: &Value, len: usize) -> Result<Value, Error> {
    if x.len() == len {
        return Ok(x.clone());
    }
    match x {
        Value::Logical(s) => Ok(Value::Logical(s.recycled(len))),
        Value::Int(s) => Ok(Value::Int(s.recycled(len))),
        Value::Double(s) => Ok(Value::Double(s.recycled(len))),
        Value::Str(s) => Ok(Value::Str(s.recycled(len))),
        Value::List(s) => Ok(Value::List(s.recycled(len))),
        other => Err(Error::UnsupportedContainer { kind: other.kind() }),
    }
}
