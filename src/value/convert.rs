//! Conversion of a [`Var`] into a fixed set of target kinds.

use std::{
    fmt::{self, Display},
    num::IntErrorKind,
    str::FromStr,
};

use chrono::{DateTime, NaiveDateTime, Utc};
use faststr::FastStr;

use super::var::Var;
use crate::{
    error::{Error, Result},
    util::private::Sealed,
};

/// The closed set of kinds a [`Var`] can be converted to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Kind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    Char,
    String,
    DateTime,
    LocalDateTime,
    Timestamp,
}

impl Kind {
    /// Returns true for the integer and floating point kinds.
    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            Kind::I8
                | Kind::I16
                | Kind::I32
                | Kind::I64
                | Kind::U8
                | Kind::U16
                | Kind::U32
                | Kind::U64
                | Kind::F32
                | Kind::F64
        )
    }

    /// Returns true for the date and time kinds.
    pub const fn is_temporal(self) -> bool {
        matches!(self, Kind::DateTime | Kind::LocalDateTime | Kind::Timestamp)
    }

    /// How an object or array payload answers a conversion to this kind.
    ///
    /// # Examples
    /// ```
    /// use sonic_var::{Kind, Policy};
    ///
    /// assert_eq!(Kind::Bool.container_policy(), Policy::Truthiness);
    /// assert_eq!(Kind::U16.container_policy(), Policy::BadCast);
    /// assert_eq!(Kind::Timestamp.container_policy(), Policy::NotImplemented);
    /// ```
    pub const fn container_policy(self) -> Policy {
        match self {
            Kind::Bool => Policy::Truthiness,
            Kind::String => Policy::Stringify,
            Kind::DateTime | Kind::LocalDateTime | Kind::Timestamp => Policy::NotImplemented,
            Kind::I8
            | Kind::I16
            | Kind::I32
            | Kind::I64
            | Kind::U8
            | Kind::U16
            | Kind::U32
            | Kind::U64
            | Kind::F32
            | Kind::F64
            | Kind::Char => Policy::BadCast,
        }
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Kind::Bool => "bool",
            Kind::I8 => "i8",
            Kind::I16 => "i16",
            Kind::I32 => "i32",
            Kind::I64 => "i64",
            Kind::U8 => "u8",
            Kind::U16 => "u16",
            Kind::U32 => "u32",
            Kind::U64 => "u64",
            Kind::F32 => "f32",
            Kind::F64 => "f64",
            Kind::Char => "char",
            Kind::String => "String",
            Kind::DateTime => "DateTime",
            Kind::LocalDateTime => "LocalDateTime",
            Kind::Timestamp => "Timestamp",
        };
        f.write_str(name)
    }
}

/// The answer of a container payload to a conversion request.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Policy {
    /// Converts to `true` iff the container is not empty.
    Truthiness,
    /// Converts to the 2-space indented JSON text of the container.
    Stringify,
    /// Fails with [`Category::BadCast`](crate::Category::BadCast).
    BadCast,
    /// Fails with [`Category::NotImplemented`](crate::Category::NotImplemented).
    NotImplemented,
}

/// The successful outcome of a container conversion.
#[doc(hidden)]
pub enum Converted {
    Bool(bool),
    Text(String),
}

/// A type a [`Var`] can be converted to. The set of implementors is closed.
pub trait Convert: Sized + Sealed {
    /// The tag of this target.
    const KIND: Kind;

    /// Converts a scalar payload. Never called with an empty value or a container.
    #[doc(hidden)]
    fn from_scalar(var: &Var) -> Result<Self>;

    /// Accepts the outcome of a container conversion, if this target can hold it.
    #[doc(hidden)]
    #[inline]
    fn from_converted(_converted: Converted) -> Option<Self> {
        None
    }
}

/// Microseconds since the Unix epoch.
///
/// # Examples
/// ```
/// use sonic_var::{Timestamp, Var};
///
/// let ts: Timestamp = Var::from("1970-01-01T00:00:01Z").convert().unwrap();
/// assert_eq!(ts.micros(), 1_000_000);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct Timestamp(i64);

impl Timestamp {
    #[inline]
    pub const fn from_micros(micros: i64) -> Self {
        Timestamp(micros)
    }

    #[inline]
    pub const fn micros(self) -> i64 {
        self.0
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Timestamp(dt.timestamp_micros())
    }
}

#[cold]
fn bad_cast(var: &Var, to: Kind) -> Error {
    Error::bad_cast(var.var_type(), to)
}

fn parse_int<T>(s: &str, kind: Kind) -> Result<T>
where
    T: FromStr<Err = std::num::ParseIntError>,
{
    s.parse::<T>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Error::out_of_range(kind),
        _ => Error::syntax(kind),
    })
}

fn parse_float(s: &str, kind: Kind) -> Result<f64> {
    s.parse::<f64>().map_err(|_| Error::syntax(kind))
}

fn to_integer<T>(var: &Var, kind: Kind) -> Result<T>
where
    T: TryFrom<i128> + FromStr<Err = std::num::ParseIntError>,
{
    let wide: i128 = match var {
        Var::Bool(b) => *b as i128,
        Var::Int(i) => *i as i128,
        Var::UInt(u) => *u as i128,
        Var::Float(f) => {
            if !f.is_finite() {
                return Err(Error::out_of_range(kind));
            }
            // saturates, and a saturated value never fits a 64-bit target
            f.trunc() as i128
        }
        Var::Char(c) => *c as u32 as i128,
        Var::String(s) => return parse_int(s.as_str(), kind),
        _ => return Err(bad_cast(var, kind)),
    };
    T::try_from(wide).map_err(|_| Error::out_of_range(kind))
}

macro_rules! impl_convert_integer {
    ($($ty:ident => $kind:ident),*) => {
        $(
            impl Convert for $ty {
                const KIND: Kind = Kind::$kind;

                #[inline]
                fn from_scalar(var: &Var) -> Result<Self> {
                    to_integer(var, Kind::$kind)
                }
            }
        )*
    };
}

impl_convert_integer!(
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64
);

impl Convert for bool {
    const KIND: Kind = Kind::Bool;

    fn from_scalar(var: &Var) -> Result<Self> {
        Ok(match var {
            Var::Bool(b) => *b,
            Var::Int(i) => *i != 0,
            Var::UInt(u) => *u != 0,
            Var::Float(f) => *f != 0.0,
            Var::Char(c) => *c != '\0',
            Var::String(s) => {
                let s = s.as_str();
                !(s.is_empty() || s == "0" || s.eq_ignore_ascii_case("false"))
            }
            _ => return Err(bad_cast(var, Kind::Bool)),
        })
    }

    #[inline]
    fn from_converted(converted: Converted) -> Option<Self> {
        match converted {
            Converted::Bool(b) => Some(b),
            Converted::Text(_) => None,
        }
    }
}

impl Convert for f64 {
    const KIND: Kind = Kind::F64;

    fn from_scalar(var: &Var) -> Result<Self> {
        Ok(match var {
            Var::Bool(b) => *b as u8 as f64,
            Var::Int(i) => *i as f64,
            Var::UInt(u) => *u as f64,
            Var::Float(f) => *f,
            Var::Char(c) => *c as u32 as f64,
            Var::String(s) => parse_float(s.as_str(), Kind::F64)?,
            _ => return Err(bad_cast(var, Kind::F64)),
        })
    }
}

impl Convert for f32 {
    const KIND: Kind = Kind::F32;

    fn from_scalar(var: &Var) -> Result<Self> {
        let wide = match var {
            Var::String(s) => parse_float(s.as_str(), Kind::F32)?,
            Var::Empty | Var::Array(_) | Var::Object(_) => return Err(bad_cast(var, Kind::F32)),
            other => f64::from_scalar(other)?,
        };
        if wide.is_finite() && wide.abs() > f32::MAX as f64 {
            return Err(Error::out_of_range(Kind::F32));
        }
        Ok(wide as f32)
    }
}

impl Convert for char {
    const KIND: Kind = Kind::Char;

    fn from_scalar(var: &Var) -> Result<Self> {
        let code = match var {
            Var::Char(c) => return Ok(*c),
            Var::String(s) => return Ok(s.as_str().chars().next().unwrap_or('\0')),
            Var::Bool(b) => *b as u32,
            Var::Int(_) | Var::UInt(_) | Var::Float(_) => to_integer::<u32>(var, Kind::Char)?,
            _ => return Err(bad_cast(var, Kind::Char)),
        };
        char::from_u32(code).ok_or_else(|| Error::out_of_range(Kind::Char))
    }
}

impl Convert for String {
    const KIND: Kind = Kind::String;

    fn from_scalar(var: &Var) -> Result<Self> {
        Ok(match var {
            Var::Bool(b) => if *b { "true" } else { "false" }.to_string(),
            Var::Int(i) => itoa::Buffer::new().format(*i).to_string(),
            Var::UInt(u) => itoa::Buffer::new().format(*u).to_string(),
            Var::Float(f) if f.is_finite() => ryu::Buffer::new().format_finite(*f).to_string(),
            Var::Float(f) => f.to_string(),
            Var::Char(c) => c.to_string(),
            Var::String(s) => s.to_string(),
            _ => return Err(bad_cast(var, Kind::String)),
        })
    }

    #[inline]
    fn from_converted(converted: Converted) -> Option<Self> {
        match converted {
            Converted::Text(s) => Some(s),
            Converted::Bool(_) => None,
        }
    }
}

impl Convert for FastStr {
    const KIND: Kind = Kind::String;

    fn from_scalar(var: &Var) -> Result<Self> {
        match var {
            Var::String(s) => Ok(s.clone()),
            other => String::from_scalar(other).map(FastStr::from),
        }
    }

    #[inline]
    fn from_converted(converted: Converted) -> Option<Self> {
        String::from_converted(converted).map(FastStr::from)
    }
}

fn parse_rfc3339(var: &Var, kind: Kind) -> Result<DateTime<Utc>> {
    match var {
        Var::String(s) => DateTime::parse_from_rfc3339(s.as_str())
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|_| Error::syntax(kind)),
        _ => Err(bad_cast(var, kind)),
    }
}

impl Convert for DateTime<Utc> {
    const KIND: Kind = Kind::DateTime;

    fn from_scalar(var: &Var) -> Result<Self> {
        parse_rfc3339(var, Kind::DateTime)
    }
}

impl Convert for NaiveDateTime {
    const KIND: Kind = Kind::LocalDateTime;

    fn from_scalar(var: &Var) -> Result<Self> {
        let s = match var {
            Var::String(s) => s.as_str(),
            _ => return Err(bad_cast(var, Kind::LocalDateTime)),
        };
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
            .or_else(|_| DateTime::parse_from_rfc3339(s).map(|dt| dt.naive_local()))
            .map_err(|_| Error::syntax(Kind::LocalDateTime))
    }
}

impl Convert for Timestamp {
    const KIND: Kind = Kind::Timestamp;

    fn from_scalar(var: &Var) -> Result<Self> {
        parse_rfc3339(var, Kind::Timestamp).map(Timestamp::from)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Category;

    macro_rules! assert_category {
        ($var:expr, $ty:ty, $cat:ident) => {
            assert_eq!(
                Var::from($var).convert::<$ty>().unwrap_err().classify(),
                Category::$cat,
                "{:?} as {}",
                $var,
                stringify!($ty)
            );
        };
    }

    #[test]
    fn test_integer_conversions() {
        assert_eq!(Var::from(true).convert::<i32>().unwrap(), 1);
        assert_eq!(Var::from(-5).convert::<i8>().unwrap(), -5);
        assert_eq!(Var::from(255u64).convert::<u8>().unwrap(), 255);
        assert_eq!(Var::from(3.9).convert::<i64>().unwrap(), 3);
        assert_eq!(Var::from(-3.9).convert::<i16>().unwrap(), -3);
        assert_eq!(Var::from('A').convert::<u32>().unwrap(), 65);
        assert_eq!(Var::from("-42").convert::<i64>().unwrap(), -42);
        assert_eq!(
            Var::from(u64::MAX).convert::<u64>().unwrap(),
            u64::MAX
        );

        assert_category!(256, u8, Range);
        assert_category!(-1, u64, Range);
        assert_category!(u64::MAX, i64, Range);
        assert_category!(f64::NAN, i32, Range);
        assert_category!(1e30, u64, Range);
        assert_category!("abc", i32, Syntax);
        assert_category!("", i32, Syntax);
        assert_category!("99999999999", i32, Range);
    }

    #[test]
    fn test_bool_conversions() {
        assert!(Var::from(2).convert::<bool>().unwrap());
        assert!(!Var::from(0u8).convert::<bool>().unwrap());
        assert!(!Var::from(0.0).convert::<bool>().unwrap());
        assert!(!Var::from('\0').convert::<bool>().unwrap());
        assert!(!Var::from("").convert::<bool>().unwrap());
        assert!(!Var::from("0").convert::<bool>().unwrap());
        assert!(!Var::from("FALSE").convert::<bool>().unwrap());
        assert!(Var::from("yes").convert::<bool>().unwrap());
    }

    #[test]
    fn test_float_conversions() {
        assert_eq!(Var::from(2).convert::<f64>().unwrap(), 2.0);
        assert_eq!(Var::from("2.5").convert::<f64>().unwrap(), 2.5);
        assert_eq!(Var::from(0.5).convert::<f32>().unwrap(), 0.5f32);
        assert_category!(1e300, f32, Range);
        assert_category!("x1", f64, Syntax);
    }

    #[test]
    fn test_char_and_string_conversions() {
        assert_eq!(Var::from(97).convert::<char>().unwrap(), 'a');
        assert_eq!(Var::from("xyz").convert::<char>().unwrap(), 'x');
        assert_eq!(Var::from("").convert::<char>().unwrap(), '\0');
        assert_category!(0xD800, char, Range);

        assert_eq!(Var::from(false).convert::<String>().unwrap(), "false");
        assert_eq!(Var::from(-7).convert::<String>().unwrap(), "-7");
        assert_eq!(Var::from(1.5).convert::<String>().unwrap(), "1.5");
        assert_eq!(Var::from('c').convert::<String>().unwrap(), "c");
        assert_eq!(Var::from("s").convert::<FastStr>().unwrap().as_str(), "s");
    }

    #[test]
    fn test_temporal_conversions() {
        let dt: DateTime<Utc> = Var::from("2024-02-29T12:30:00+02:00").convert().unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-02-29T10:30:00+00:00");

        let local: NaiveDateTime = Var::from("2024-02-29T12:30:00.25").convert().unwrap();
        assert_eq!(local.to_string(), "2024-02-29 12:30:00.250");

        let ts: Timestamp = Var::from("1970-01-01T00:00:00.000002Z").convert().unwrap();
        assert_eq!(ts, Timestamp::from_micros(2));

        assert_category!("yesterday", Timestamp, Syntax);
        assert_category!(1700000000, Timestamp, BadCast);
        assert_category!(true, NaiveDateTime, BadCast);
    }

    #[test]
    fn test_container_policy_table() {
        for kind in [Kind::I8, Kind::U64, Kind::F32, Kind::F64, Kind::Char] {
            assert_eq!(kind.container_policy(), Policy::BadCast);
        }
        for kind in [Kind::DateTime, Kind::LocalDateTime, Kind::Timestamp] {
            assert!(kind.is_temporal());
            assert_eq!(kind.container_policy(), Policy::NotImplemented);
        }
        assert_eq!(Kind::String.container_policy(), Policy::Stringify);
        assert!(Kind::U8.is_numeric());
        assert!(!Kind::Char.is_numeric());
    }
}
