//! Conversion adapter for objects and arrays held by a [`Var`](super::Var).

use super::{
    convert::{Convert, Converted, Policy},
    VarType,
};
use crate::error::{Error, Result};

/// A container payload of a `Var`.
pub(crate) trait Container {
    const VAR_TYPE: VarType;

    fn size(&self) -> usize;

    /// The JSON text of the container, indented by `indent` spaces per level.
    fn to_json_string(&self, indent: usize) -> Result<String>;
}

/// Answers a conversion request on a container with the fixed policy of the
/// target kind. Never logs; callers that propagate the error report it.
pub(crate) fn convert<C: Container, T: Convert>(container: &C) -> Result<T> {
    let kind = T::KIND;
    let converted = match kind.container_policy() {
        Policy::Truthiness => Converted::Bool(container.size() > 0),
        Policy::Stringify => Converted::Text(container.to_json_string(2)?),
        Policy::BadCast => return Err(Error::bad_cast(C::VAR_TYPE, kind)),
        Policy::NotImplemented => return Err(Error::not_implemented(C::VAR_TYPE, kind)),
    };
    T::from_converted(converted).ok_or_else(|| Error::bad_cast(C::VAR_TYPE, kind))
}

#[cfg(test)]
mod test {
    use chrono::{DateTime, NaiveDateTime, Utc};

    use crate::{array, object, Array, Category, Object, Timestamp, Var};

    macro_rules! test_rejected_kinds {
        ($($ty:ident),*) => {
            paste::paste! {
                $(
                    #[test]
                    fn [<test_object_to_ $ty _is_bad_cast>]() {
                        let var = Var::from(object! {"a": 1});
                        let err = var.convert::<$ty>().unwrap_err();
                        assert_eq!(err.classify(), Category::BadCast);

                        let var = Var::from(array![1]);
                        assert!(var.convert::<$ty>().unwrap_err().is_bad_cast());
                    }
                )*
            }
        };
    }

    test_rejected_kinds!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, char);

    #[test]
    fn test_object_to_bool() {
        assert!(!Var::from(Object::new()).convert::<bool>().unwrap());
        assert!(Var::from(object! {"a": 1}).convert::<bool>().unwrap());
        assert!(!Var::from(Array::new()).convert::<bool>().unwrap());
        assert!(Var::from(array![Var::Empty]).convert::<bool>().unwrap());
    }

    #[test]
    fn test_object_to_string() {
        let mut obj = Object::sorted();
        obj.set("b", "x");
        obj.set("a", 1);
        let expect = obj.to_json_string(2).unwrap();
        assert_eq!(expect, "{\n  \"a\" : 1,\n  \"b\" : \"x\"\n}");
        assert_eq!(Var::from(obj).convert::<String>().unwrap(), expect);
    }

    #[test]
    fn test_object_to_temporal_is_not_implemented() {
        let var = Var::from(object! {"a": 1});
        assert!(var.convert::<DateTime<Utc>>().unwrap_err().is_not_implemented());
        assert!(var.convert::<NaiveDateTime>().unwrap_err().is_not_implemented());
        assert!(var.convert::<Timestamp>().unwrap_err().is_not_implemented());

        let var = Var::from(Array::new());
        assert!(var.convert::<Timestamp>().unwrap_err().is_not_implemented());
    }
}
