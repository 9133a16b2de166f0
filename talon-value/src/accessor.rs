//! Accessor closures.

use core::fmt::{self, Debug, Formatter};
use std::rc::Rc;

use crate::error::Error;
use crate::value::Value;

/// The callable shape wrapped by [`VAccessor`].
pub type AccessorFn = dyn Fn(&Value) -> Result<Value, Error>;

/// A unary closure standing in for "index into me".
///
/// Accessors are used as indices: instead of a positional or name
/// lookup, the closure is invoked with the current container and its
/// result becomes the next value. A failure it returns propagates
/// verbatim; it is never converted into an absent result.
///
/// Cloning an accessor shares the underlying closure, and two
/// accessors compare equal only when they share one closure.
#[derive(Clone)]
pub struct VAccessor {
    fun: Rc<AccessorFn>,
}

impl VAccessor {
    /// Wrap a closure as an accessor.
    pub fn new(fun: impl Fn(&Value) -> Result<Value, Error> + 'static) -> Self {
        VAccessor { fun: Rc::new(fun) }
    }

    /// Invoke the accessor with `value` as its sole argument.
    pub fn call(&self, value: &Value) -> Result<Value, Error> {
        (self.fun)(value)
    }
}

impl Debug for VAccessor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("accessor")
    }
}

impl PartialEq for VAccessor {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.fun, &other.fun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_closure_identity() {
        let a = VAccessor::new(|value| Ok(value.clone()));
        let b = a.clone();
        let c = VAccessor::new(|value| Ok(value.clone()));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
