use std::fmt::{self, Debug, Display};

use faststr::FastStr;

use super::{
    array::SharedArray,
    container,
    convert::Convert,
    object::SharedObject,
};
use crate::error::{Error, Result};

/// VarType is the runtime type tag of a [`Var`].
///
/// # Examples
/// ```
/// use sonic_var::{Object, Var, VarType};
///
/// assert_eq!(Var::from(1).var_type(), VarType::Int);
/// assert_eq!(Var::from(Object::new()).var_type(), VarType::Object);
/// assert_eq!(Var::default().var_type(), VarType::Empty);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[repr(u8)]
pub enum VarType {
    Empty = 0,
    Bool = 1,
    Int = 2,
    UInt = 3,
    Float = 4,
    Char = 5,
    String = 6,
    Array = 7,
    Object = 8,
}

impl Display for VarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VarType::Empty => "Empty",
            VarType::Bool => "Bool",
            VarType::Int => "Int",
            VarType::UInt => "UInt",
            VarType::Float => "Float",
            VarType::Char => "Char",
            VarType::String => "String",
            VarType::Array => "Array",
            VarType::Object => "Object",
        };
        f.write_str(name)
    }
}

/// A dynamically-typed value: empty, a primitive, a string, or a shared handle
/// to an [`Object`](super::Object) or [`Array`](super::Array).
///
/// An empty `Var` stands for JSON `null`. Cloning a `Var` that holds a
/// container clones the handle, so both `Var`s refer to the same container.
///
/// # Examples
/// ```
/// use sonic_var::{Object, Var};
///
/// let mut obj = Object::new();
/// obj.set("answer", 42);
///
/// let var = Var::from(obj);
/// assert!(var.convert::<bool>().unwrap());
/// assert!(var.convert::<i32>().unwrap_err().is_bad_cast());
/// ```
#[derive(Clone, Default)]
pub enum Var {
    #[default]
    Empty,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Char(char),
    String(FastStr),
    Array(SharedArray),
    Object(SharedObject),
}

impl Var {
    /// Returns the runtime type tag.
    #[inline]
    pub fn var_type(&self) -> VarType {
        match self {
            Var::Empty => VarType::Empty,
            Var::Bool(_) => VarType::Bool,
            Var::Int(_) => VarType::Int,
            Var::UInt(_) => VarType::UInt,
            Var::Float(_) => VarType::Float,
            Var::Char(_) => VarType::Char,
            Var::String(_) => VarType::String,
            Var::Array(_) => VarType::Array,
            Var::Object(_) => VarType::Object,
        }
    }

    /// Returns true if the `Var` holds nothing. Empty values are written as `null`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Var::Empty)
    }

    #[inline]
    pub fn is_boolean(&self) -> bool {
        matches!(self, Var::Bool(_))
    }

    /// Returns true for signed and unsigned integers.
    #[inline]
    pub fn is_integer(&self) -> bool {
        matches!(self, Var::Int(_) | Var::UInt(_))
    }

    /// Returns true for signed integers and floats.
    #[inline]
    pub fn is_signed(&self) -> bool {
        matches!(self, Var::Int(_) | Var::Float(_))
    }

    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Var::Int(_) | Var::UInt(_) | Var::Float(_))
    }

    #[inline]
    pub fn is_string(&self) -> bool {
        matches!(self, Var::String(_))
    }

    /// Returns true only for an [`Array`](super::Array) handle.
    #[inline]
    pub fn is_array(&self) -> bool {
        matches!(self, Var::Array(_))
    }

    /// Returns true only for an [`Object`](super::Object) handle.
    #[inline]
    pub fn is_object(&self) -> bool {
        matches!(self, Var::Object(_))
    }

    /// Returns the object handle if the `Var` holds one.
    #[inline]
    pub fn as_object(&self) -> Option<&SharedObject> {
        match self {
            Var::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Returns the array handle if the `Var` holds one.
    #[inline]
    pub fn as_array(&self) -> Option<&SharedArray> {
        match self {
            Var::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Returns the string if the `Var` holds one. No conversion is performed.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Var::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Converts the held value to `T`.
    ///
    /// Scalars follow the usual numeric and textual rules. Objects and arrays
    /// only convert to `bool` (non-empty) and `String` (indented JSON text);
    /// date and time kinds are reported as not implemented and every other
    /// kind as a bad cast. Converting an empty value always fails.
    ///
    /// # Examples
    /// ```
    /// use sonic_var::{Category, Var};
    ///
    /// assert_eq!(Var::from("12").convert::<u8>().unwrap(), 12);
    /// assert_eq!(Var::from(300).convert::<u8>().unwrap_err().classify(), Category::Range);
    /// assert!(Var::default().convert::<bool>().unwrap_err().is_access());
    /// ```
    pub fn convert<T: Convert>(&self) -> Result<T> {
        let result = self.try_convert();
        if result.is_err() && (self.is_array() || self.is_object()) {
            trace!(var_type = %self.var_type(), kind = %T::KIND, "rejected conversion");
        }
        result
    }

    /// Like [`Var::convert`], without reporting rejected conversions. Used by
    /// the `opt_value` accessors, which swallow failures.
    #[inline]
    pub(crate) fn try_convert<T: Convert>(&self) -> Result<T> {
        match self {
            Var::Empty => Err(Error::empty(T::KIND)),
            Var::Array(a) => container::convert(&*a.borrow()),
            Var::Object(o) => container::convert(&*o.borrow()),
            scalar => T::from_scalar(scalar),
        }
    }
}

impl Debug for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Var::Empty => f.write_str("Empty"),
            Var::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Var::Int(i) => f.debug_tuple("Int").field(i).finish(),
            Var::UInt(u) => f.debug_tuple("UInt").field(u).finish(),
            Var::Float(n) => f.debug_tuple("Float").field(n).finish(),
            Var::Char(c) => f.debug_tuple("Char").field(c).finish(),
            Var::String(s) => f.debug_tuple("String").field(&s.as_str()).finish(),
            Var::Array(a) => Debug::fmt(a, f),
            Var::Object(o) => Debug::fmt(o, f),
        }
    }
}

impl Display for Var {
    /// Writes the compact JSON text of the value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = super::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}
