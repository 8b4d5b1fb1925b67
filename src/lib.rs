//! A JSON object container with sorted or insertion-ordered keys, built on a
//! dynamically-typed [`Var`] value.
//!
//! ```
//! use sonic_var::{array, Object, Var};
//!
//! let mut obj = Object::with_insertion_order();
//! obj.set("name", "sonic");
//! obj.set("tags", array!["json", "var"]);
//!
//! assert_eq!(obj.to_json_string(0).unwrap(), r#"{"name":"sonic","tags":["json","var"]}"#);
//! assert_eq!(obj.opt_value("port", 8080), 8080);
//! assert!(Var::from(obj).convert::<bool>().unwrap());
//! ```

#[macro_use]
mod trace;

mod error;
mod util;

pub mod format;
pub mod value;
pub mod writer;

pub use crate::error::*;
pub use crate::value::*;
pub use crate::writer::{to_bytes, WriterExt};
