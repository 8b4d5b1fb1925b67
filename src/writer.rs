use bytes::{buf::Writer, BufMut, Bytes, BytesMut};

use crate::{format::Formatter, value::Var, Result};

/// A sink that JSON text can be stringified into, and that can hand out the
/// finished buffer.
pub trait WriterExt: std::io::Write {
    type Output;

    /// Consumes the writer and returns the written bytes.
    fn finish(self) -> Self::Output;
}

impl WriterExt for Vec<u8> {
    type Output = Vec<u8>;

    #[inline]
    fn finish(self) -> Vec<u8> {
        self
    }
}

impl WriterExt for Writer<BytesMut> {
    type Output = Bytes;

    #[inline]
    fn finish(self) -> Bytes {
        self.into_inner().freeze()
    }
}

/// Stringifies `var` into the writer `W` created from `writer` and returns the
/// finished output.
pub(crate) fn stringify_into<W, F>(
    mut writer: W,
    var: &Var,
    formatter: &mut F,
    indent: usize,
) -> Result<W::Output>
where
    W: WriterExt,
    F: Formatter,
{
    crate::value::stringify_with(var, &mut writer, formatter, indent, -1)?;
    Ok(writer.finish())
}

/// Stringifies `var` into a `Bytes` buffer.
///
/// # Examples
/// ```
/// use sonic_var::{object, to_bytes};
///
/// let obj = object! {"a": 1};
/// let bytes = to_bytes(&obj.into(), 0).unwrap();
/// assert_eq!(&bytes[..], br#"{"a":1}"#);
/// ```
pub fn to_bytes(var: &Var, indent: usize) -> Result<Bytes> {
    let writer = BytesMut::with_capacity(128).writer();
    stringify_into(writer, var, &mut crate::format::DefaultFormatter, indent)
}
