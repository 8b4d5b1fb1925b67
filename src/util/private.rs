use faststr::FastStr;

use crate::value::Timestamp;

// Prevent users from adding conversion targets outside of sonic-var.
pub trait Sealed {}
impl Sealed for bool {}
impl Sealed for i8 {}
impl Sealed for i16 {}
impl Sealed for i32 {}
impl Sealed for i64 {}
impl Sealed for u8 {}
impl Sealed for u16 {}
impl Sealed for u32 {}
impl Sealed for u64 {}
impl Sealed for f32 {}
impl Sealed for f64 {}
impl Sealed for char {}
impl Sealed for String {}
impl Sealed for FastStr {}
impl Sealed for chrono::DateTime<chrono::Utc> {}
impl Sealed for chrono::NaiveDateTime {}
impl Sealed for Timestamp {}
