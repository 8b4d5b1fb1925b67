use faststr::FastStr;

use super::var::Var;

impl PartialEq for Var {
    /// Structural equality. Containers are equal if they are the same handle
    /// or hold equal contents; integers compare by value across signedness.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Var::Empty, Var::Empty) => true,
            (Var::Bool(a), Var::Bool(b)) => a == b,
            (Var::Int(a), _) => eq_i64(other, *a),
            (Var::UInt(a), _) => eq_u64(other, *a),
            (Var::Float(a), Var::Float(b)) => a == b,
            (Var::Char(a), Var::Char(b)) => a == b,
            (Var::String(a), Var::String(b)) => a == b,
            (Var::Array(a), Var::Array(b)) => a == b,
            (Var::Object(a), Var::Object(b)) => a == b,
            _ => false,
        }
    }
}

#[inline]
fn eq_i64(value: &Var, other: i64) -> bool {
    match value {
        Var::Int(i) => *i == other,
        Var::UInt(u) => u64::try_from(other).map_or(false, |o| *u == o),
        _ => false,
    }
}

#[inline]
fn eq_u64(value: &Var, other: u64) -> bool {
    match value {
        Var::UInt(u) => *u == other,
        Var::Int(i) => u64::try_from(*i).map_or(false, |i| i == other),
        _ => false,
    }
}

#[inline]
fn eq_f64(value: &Var, other: f64) -> bool {
    matches!(value, Var::Float(f) if *f == other)
}

#[inline]
fn eq_bool(value: &Var, other: bool) -> bool {
    matches!(value, Var::Bool(b) if *b == other)
}

#[inline]
fn eq_char(value: &Var, other: char) -> bool {
    matches!(value, Var::Char(c) if *c == other)
}

#[inline]
fn eq_str(value: &Var, other: &str) -> bool {
    value.as_str().map_or(false, |s| s == other)
}

macro_rules! impl_numeric_eq {
    ($($eq:ident [$($ty:ty)*])*) => {
        $($(
            impl PartialEq<$ty> for Var {
                #[inline]
                fn eq(&self, other: &$ty) -> bool {
                    $eq(self, *other as _)
                }
            }

            impl PartialEq<Var> for $ty {
                #[inline]
                fn eq(&self, other: &Var) -> bool {
                    $eq(other, *self as _)
                }
            }

            impl PartialEq<$ty> for &Var {
                #[inline]
                fn eq(&self, other: &$ty) -> bool {
                    $eq(*self, *other as _)
                }
            }
        )*)*
    }
}

impl_numeric_eq! {
    eq_i64[i8 i16 i32 i64 isize]
    eq_u64[u8 u16 u32 u64 usize]
    eq_f64[f32 f64]
    eq_bool[bool]
    eq_char[char]
}

macro_rules! impl_str_eq {
    ($($ty:ty)*) => {
        $(
            impl PartialEq<$ty> for Var {
                #[inline]
                fn eq(&self, other: &$ty) -> bool {
                    let s: &str = other.as_ref();
                    eq_str(self, s)
                }
            }

            impl PartialEq<Var> for $ty {
                #[inline]
                fn eq(&self, other: &Var) -> bool {
                    let s: &str = self.as_ref();
                    eq_str(other, s)
                }
            }
        )*
    }
}

impl_str_eq!(str String FastStr);

impl PartialEq<&str> for Var {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        eq_str(self, other)
    }
}

impl PartialEq<Var> for &str {
    #[inline]
    fn eq(&self, other: &Var) -> bool {
        eq_str(other, self)
    }
}

#[cfg(test)]
mod test {
    use crate::{array, object, Var};

    #[test]
    fn test_var_eq() {
        assert_eq!(Var::from(1), 1u8);
        assert_eq!(Var::from(1u64), Var::from(1i32));
        assert_ne!(Var::from(-1), Var::from(u64::MAX));
        assert_ne!(Var::from(1), Var::from(1.0));
        assert_eq!(Var::from(0.5), 0.5);
        assert_eq!(Var::from("a"), "a");
        assert_eq!(Var::from("a"), String::from("a"));
        assert_eq!("a", Var::from("a"));
        assert_ne!(Var::from('a'), "a");
        assert_eq!(Var::from('a'), 'a');
        assert_eq!(Var::Empty, Var::default());
        assert_ne!(Var::Empty, false);
    }

    #[test]
    fn test_container_eq() {
        assert_eq!(Var::from(array![1, "a"]), Var::from(array![1, "a"]));
        assert_ne!(Var::from(array![1]), Var::from(array![1, 2]));
        assert_eq!(Var::from(object! {"k": 1}), Var::from(object! {"k": 1}));
        assert_ne!(Var::from(object! {"k": 1}), Var::from(array![1]));

        let shared = Var::from(object! {});
        assert_eq!(shared, shared.clone());
    }
}
