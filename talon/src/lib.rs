//! Generic traversal, transformation and reduction over dynamic
//! nested containers.
//!
//! `talon` applies the classic functional vocabulary — pluck, reduce,
//! accumulate, modify — uniformly across every container kind of
//! [`talon_value`]: ordered sequences (atomic or list, optionally
//! named), insertion-ordered records, scope-like objects and accessor
//! closures. The operations agree with each other on the awkward
//! cases: garbled indices fail loudly, merely-absent indices resolve
//! to `Null` quietly, and transformations never change a container's
//! kind behind your back.
//!
//! # Example
//!
//! ```
//! use talon::{list, modify_at, pluck, reduce, At, Value};
//!
//! // Deep extraction short-circuits on absence.
//! let x = list!["a" => list![list!["b" => 1.0]]];
//! let got = pluck(&x, &[Value::from("a"), Value::from(1), Value::from("b")]).unwrap();
//! assert_eq!(got, Value::double(1.0));
//! assert!(pluck(&x, &[Value::from("nope")]).unwrap().is_null());
//!
//! // Reduction with an explicit seed.
//! let total = reduce(
//!     &Value::from(vec![1.0, 2.0, 3.0]),
//!     |acc, v| {
//!         Ok(Value::double(
//!             acc.as_scalar_f64().unwrap_or(0.0) + v.as_scalar_f64().unwrap_or(0.0),
//!         ))
//!     },
//!     Some(Value::double(0.0)),
//! )
//! .unwrap();
//! assert_eq!(total, Value::double(6.0));
//!
//! // Kind-preserving selective transformation.
//! let car = list!["mpg" => 21.0, "cyl" => 6.0];
//! let out = modify_at(&car, At::names(["cyl"]), |v| {
//!     Ok(Value::string(format!("{}", v.as_scalar_f64().unwrap_or(0.0))))
//! })
//! .unwrap();
//! assert_eq!(out, list!["mpg" => 21.0, "cyl" => "6"]);
//! ```

#![warn(missing_docs)]

pub use talon_value::*;
pub use talon_value::{list, record};

pub mod access;
pub use access::access_step;

mod accumulate;
pub use accumulate::{accumulate, accumulate_right};

mod depth;
pub use depth::nesting_depth;

mod map;
pub use map::{imap, map, map2, map_chr, map_dbl, map_int, map_lgl};

mod mapper;
pub use mapper::{Mapper, as_callable};

mod modify;
pub use modify::{
    At, Predicate, imodify, modify, modify2, modify_at, modify_depth, modify_depth_ragged,
    modify_if,
};

mod pluck;
pub use pluck::{attr_getter, chuck, pluck, pluck_or};

mod recycle;
pub use recycle::recycle;

mod reduce;
pub use reduce::{reduce, reduce2, reduce2_right, reduce_right};

mod trace;
