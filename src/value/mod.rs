//! A dynamic type to represent any JSON value, and the JSON objects and arrays
//! built from it.

#[macro_use]
mod macros;
pub mod array;
mod container;
mod convert;
mod from;
mod keys;
pub mod object;
mod partial_eq;
mod ser;
mod stringify;
mod var;

#[doc(inline)]
pub use self::array::{Array, SharedArray};
#[doc(hidden)]
pub use self::convert::Converted;
#[doc(inline)]
pub use self::convert::{Convert, Kind, Policy, Timestamp};
#[doc(inline)]
pub use self::object::{Object, SharedObject};
#[doc(inline)]
pub use self::stringify::{
    stringify, stringify_with, to_string, to_string_pretty, to_writer, to_writer_pretty,
};
#[doc(inline)]
pub use self::var::{Var, VarType};
