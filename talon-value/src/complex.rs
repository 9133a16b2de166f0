//! The unstructured numeric-pair value.

use core::fmt::{self, Debug, Formatter};

/// An unstructured pair of numeric components.
///
/// `VComplex` is deliberately not a container: it has no element or
/// name structure, so indexing into it or transforming it element-wise
/// is an [`Error::UnsupportedContainer`].
///
/// [`Error::UnsupportedContainer`]: crate::Error::UnsupportedContainer
#[derive(Clone, Copy, PartialEq)]
pub struct VComplex {
    /// Real component.
    pub re: f64,
    /// Imaginary component.
    pub im: f64,
}

impl VComplex {
    /// Create a pair from its two components.
    #[must_use]
    pub fn new(re: f64, im: f64) -> Self {
        VComplex { re, im }
    }
}

impl Debug for VComplex {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let sign = if self.im.is_sign_negative() { "-" } else { "+" };
        write!(f, "{}{sign}{}i", self.re, self.im.abs())
    }
}
