//! `talon-value` provides the dynamic container model that the talon
//! operations traverse: a closed tagged [`Value`] type covering
//! ordered sequences (with optional parallel names and attribute
//! side-tables), insertion-ordered records, scope-like objects and
//! accessor closures.
//!
//! # Design
//!
//! - **Closed variant set.** Every container kind is a [`Value`]
//!   variant; operations dispatch on the runtime kind with one
//!   `match`. New kinds are added by extending the enum.
//! - **Homogeneous stores.** Each ordered kind carries a [`VSeq`]
//!   backing store of one element type; writing an element back
//!   re-validates it through the [`Atom`] seam, so a sequence never
//!   changes kind silently.
//! - **Names are structural.** The optional parallel name array is a
//!   field of the store, aligned with positions, not a side map.
//! - **Absence is not an error.** [`Value::Null`] doubles as the
//!   absent result; [`Error`] is reserved for garbled inputs.

#![warn(missing_docs)]

mod accessor;
pub use accessor::{AccessorFn, VAccessor};

mod atom;
pub use atom::Atom;

mod attrs;
pub use attrs::Attrs;

mod complex;
pub use complex::VComplex;

mod error;
pub use error::Error;

mod macros;

mod record;
pub use record::VRecord;

mod scope;
pub use scope::VScope;

mod seq;
pub use seq::{Name, VSeq};

mod value;
pub use value::{Value, ValueKind};
