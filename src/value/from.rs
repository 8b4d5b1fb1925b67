use std::borrow::Cow;

use faststr::FastStr;

use super::{
    array::{Array, SharedArray},
    object::{Object, SharedObject},
    var::Var,
};

macro_rules! impl_from_integer {
    ($variant:ident as $repr:ident: $($ty:ident),*) => {
        $(
            impl From<$ty> for Var {
                #[inline]
                fn from(val: $ty) -> Self {
                    Var::$variant(val as $repr)
                }
            }
        )*
    };
}

impl_from_integer!(Int as i64: i8, i16, i32, i64, isize);
impl_from_integer!(UInt as u64: u8, u16, u32, u64, usize);

impl From<bool> for Var {
    #[inline]
    fn from(val: bool) -> Self {
        Var::Bool(val)
    }
}

impl From<f32> for Var {
    #[inline]
    fn from(val: f32) -> Self {
        Var::Float(val as f64)
    }
}

impl From<f64> for Var {
    /// Convert a float to a `Var`. Non-finite floats are kept and written as
    /// `null`.
    #[inline]
    fn from(val: f64) -> Self {
        Var::Float(val)
    }
}

impl From<char> for Var {
    #[inline]
    fn from(val: char) -> Self {
        Var::Char(val)
    }
}

impl From<&str> for Var {
    /// Convert a string slice to a string `Var`. The string is copied.
    #[inline]
    fn from(val: &str) -> Self {
        Var::String(FastStr::new(val))
    }
}

impl From<&String> for Var {
    #[inline]
    fn from(val: &String) -> Self {
        Var::String(FastStr::new(val))
    }
}

impl From<String> for Var {
    #[inline]
    fn from(val: String) -> Self {
        Var::String(FastStr::from(val))
    }
}

impl<'a> From<Cow<'a, str>> for Var {
    #[inline]
    fn from(val: Cow<'a, str>) -> Self {
        match val {
            Cow::Borrowed(s) => s.into(),
            Cow::Owned(s) => s.into(),
        }
    }
}

impl From<FastStr> for Var {
    #[inline]
    fn from(val: FastStr) -> Self {
        Var::String(val)
    }
}

impl From<&FastStr> for Var {
    #[inline]
    fn from(val: &FastStr) -> Self {
        Var::String(val.clone())
    }
}

impl From<Object> for Var {
    /// Moves the object into a new shared handle.
    #[inline]
    fn from(val: Object) -> Self {
        Var::Object(SharedObject::new(val))
    }
}

impl From<SharedObject> for Var {
    #[inline]
    fn from(val: SharedObject) -> Self {
        Var::Object(val)
    }
}

impl From<&SharedObject> for Var {
    #[inline]
    fn from(val: &SharedObject) -> Self {
        Var::Object(val.clone())
    }
}

impl From<Array> for Var {
    /// Moves the array into a new shared handle.
    #[inline]
    fn from(val: Array) -> Self {
        Var::Array(SharedArray::new(val))
    }
}

impl From<SharedArray> for Var {
    #[inline]
    fn from(val: SharedArray) -> Self {
        Var::Array(val)
    }
}

impl From<&SharedArray> for Var {
    #[inline]
    fn from(val: &SharedArray) -> Self {
        Var::Array(val.clone())
    }
}

impl<T: Into<Var>> From<Vec<T>> for Var {
    /// Convert a `Vec` to an array `Var`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sonic_var::Var;
    ///
    /// let var = Var::from(vec![1, 2]);
    /// assert_eq!(var.as_array().unwrap().borrow().size(), 2);
    /// ```
    #[inline]
    fn from(val: Vec<T>) -> Self {
        val.into_iter().collect::<Array>().into()
    }
}

impl<T: Into<Var>> From<Option<T>> for Var {
    /// `None` converts to an empty `Var`.
    #[inline]
    fn from(val: Option<T>) -> Self {
        match val {
            Some(v) => v.into(),
            None => Var::Empty,
        }
    }
}

impl From<()> for Var {
    #[inline]
    fn from(_: ()) -> Self {
        Var::Empty
    }
}

impl<T: Into<Var>> FromIterator<T> for Var {
    /// Collects the items into an array `Var`.
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().collect::<Array>().into()
    }
}
