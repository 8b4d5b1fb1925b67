//! Formatter for the scalar leaves of JSON text.

use std::io::{self, Write};

use crate::util::string::{format_string, format_string_ascii};

/// This trait abstracts away serializing the JSON leaf values, which allows the
/// user to choose how strings are escaped. The structure of objects and arrays
/// (braces, separators, indentation) is written by the containers themselves.
pub trait Formatter {
    /// Writes a `null` value to the specified writer.
    #[inline]
    fn write_null<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b"null")
    }

    /// Writes a `true` or `false` value to the specified writer.
    #[inline]
    fn write_bool<W>(&mut self, writer: &mut W, value: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if value {
            writer.write_all(b"true")
        } else {
            writer.write_all(b"false")
        }
    }

    /// Writes an integer value like `-123` to the specified writer.
    #[inline]
    fn write_i64<W>(&mut self, writer: &mut W, value: i64) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let mut buffer = itoa::Buffer::new();
        let s = buffer.format(value);
        writer.write_all(s.as_bytes())
    }

    /// Writes an integer value like `123` to the specified writer.
    #[inline]
    fn write_u64<W>(&mut self, writer: &mut W, value: u64) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let mut buffer = itoa::Buffer::new();
        let s = buffer.format(value);
        writer.write_all(s.as_bytes())
    }

    /// Writes a floating point value like `-31.26e+12` to the specified writer.
    /// NaN and infinities have no JSON representation and are written as `null`.
    #[inline]
    fn write_f64<W>(&mut self, writer: &mut W, value: f64) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if !value.is_finite() {
            return self.write_null(writer);
        }
        let mut buffer = ryu::Buffer::new();
        let s = buffer.format_finite(value);
        writer.write_all(s.as_bytes())
    }

    /// Writes a string as JSON string to the specified writer. Will escape the
    /// string if necessary.
    #[inline]
    fn write_string<W>(&mut self, writer: &mut W, value: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let mut buf = Vec::with_capacity(value.len() + 2);
        format_string(value, &mut buf, true);
        writer.write_all(&buf)
    }

    /// Writes an object key. Keys are escaped like any other string.
    #[inline]
    fn write_key<W>(&mut self, writer: &mut W, key: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.write_string(writer, key)
    }

    /// Writes `n` spaces of indentation.
    #[inline]
    fn write_indent<W>(&mut self, writer: &mut W, n: usize) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        const SPACES: [u8; 32] = [b' '; 32];
        let mut n = n;
        while n > 0 {
            let chunk = n.min(SPACES.len());
            writer.write_all(&SPACES[..chunk])?;
            n -= chunk;
        }
        Ok(())
    }
}

/// This structure writes strings with the minimal escaping required by JSON.
#[derive(Clone, Debug, Default)]
pub struct DefaultFormatter;

impl Formatter for DefaultFormatter {}

/// This structure escapes every non-ASCII character as `\uXXXX`, so the output
/// is pure ASCII.
#[derive(Clone, Debug, Default)]
pub struct AsciiFormatter;

impl Formatter for AsciiFormatter {
    #[inline]
    fn write_string<W>(&mut self, writer: &mut W, value: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let mut buf = Vec::with_capacity(value.len() + 2);
        format_string_ascii(value, &mut buf, true);
        writer.write_all(&buf)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_formatter() {
        let mut out = Vec::new();
        let mut f = DefaultFormatter;
        f.write_null(&mut out).unwrap();
        f.write_bool(&mut out, true).unwrap();
        f.write_i64(&mut out, -12).unwrap();
        f.write_u64(&mut out, u64::MAX).unwrap();
        f.write_f64(&mut out, 1.5).unwrap();
        f.write_f64(&mut out, f64::NAN).unwrap();
        f.write_string(&mut out, "é\"").unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "nulltrue-12184467440737095516151.5null\"é\\\"\""
        );
    }

    #[test]
    fn test_indent() {
        let mut out = Vec::new();
        DefaultFormatter.write_indent(&mut out, 0).unwrap();
        assert!(out.is_empty());
        DefaultFormatter.write_indent(&mut out, 70).unwrap();
        assert_eq!(out.len(), 70);
        assert!(out.iter().all(|b| *b == b' '));
    }

    #[test]
    fn test_ascii_formatter() {
        let mut out = Vec::new();
        AsciiFormatter.write_key(&mut out, "ключ").unwrap();
        assert_eq!(out, br#""\u043a\u043b\u044e\u0447""#);
    }
}
