//! Shorthand-to-callable coercion.

use core::fmt::{self, Debug, Formatter};

use talon_value::{Error, VAccessor, Value};

use crate::pluck::pluck;

/// A callable coerced from shorthand.
///
/// Closures and accessors are used as-is; a name, position or index
/// path becomes an extractor that plucks through its argument, with an
/// optional default for absent results. This is the glue that lets the
/// element-wise operations accept "just give me field `x`" without a
/// hand-written closure:
///
/// ```
/// use talon::{as_callable, list, map, Value};
///
/// let rows = list![list!["x" => 1.0], list!["x" => 2.0]];
/// let mut get_x = as_callable("x");
/// let xs = map(&rows, |row| get_x.call(row)).unwrap();
/// assert_eq!(xs, list![1.0, 2.0]);
/// ```
pub struct Mapper {
    kind: MapperKind,
}

enum MapperKind {
    Func(Box<dyn FnMut(&Value) -> Result<Value, Error>>),
    Path {
        indices: Vec<Value>,
        default: Option<Value>,
    },
}

impl Mapper {
    /// Use a closure as-is.
    pub fn func(f: impl FnMut(&Value) -> Result<Value, Error> + 'static) -> Self {
        Mapper {
            kind: MapperKind::Func(Box::new(f)),
        }
    }

    /// An extractor plucking through the given index path.
    pub fn path<I>(indices: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Mapper {
            kind: MapperKind::Path {
                indices: indices.into_iter().map(Into::into).collect(),
                default: None,
            },
        }
    }

    /// Substitute `default` for absent extraction results. No effect
    /// on closure mappers, which have no notion of absence.
    #[must_use]
    pub fn or_default(mut self, default: impl Into<Value>) -> Self {
        if let MapperKind::Path { default: slot, .. } = &mut self.kind {
            *slot = Some(default.into());
        }
        self
    }

    /// Apply the callable to one value.
    pub fn call(&mut self, value: &Value) -> Result<Value, Error> {
        match &mut self.kind {
            MapperKind::Func(f) => f(value),
            MapperKind::Path { indices, default } => {
                let got = pluck(value, indices)?;
                Ok(match (got, default) {
                    (Value::Null, Some(fallback)) => fallback.clone(),
                    (got, _) => got,
                })
            }
        }
    }
}

impl Debug for Mapper {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.kind {
            MapperKind::Func(_) => f.write_str("Mapper::Func(..)"),
            MapperKind::Path { indices, default } => f
                .debug_struct("Mapper::Path")
                .field("indices", indices)
                .field("default", default)
                .finish(),
        }
    }
}

impl From<&str> for Mapper {
    fn from(name: &str) -> Self {
        Mapper::path([Value::string(name)])
    }
}

impl From<String> for Mapper {
    fn from(name: String) -> Self {
        Mapper::path([Value::string(name)])
    }
}

impl From<i64> for Mapper {
    fn from(position: i64) -> Self {
        Mapper::path([Value::int(position)])
    }
}

impl From<Vec<Value>> for Mapper {
    fn from(indices: Vec<Value>) -> Self {
        Mapper::path(indices)
    }
}

impl From<VAccessor> for Mapper {
    fn from(accessor: VAccessor) -> Self {
        Mapper::func(move |value| accessor.call(value))
    }
}

/// Coerce shorthand into a [`Mapper`].
pub fn as_callable(spec: impl Into<Mapper>) -> Mapper {
    spec.into()
}
