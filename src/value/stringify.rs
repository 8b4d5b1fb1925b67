//! Writes a [`Var`] as JSON text.

use std::io::Write;

use super::var::Var;
use crate::{
    error::Result,
    format::{DefaultFormatter, Formatter},
    writer::{stringify_into, WriterExt},
};

/// Resolves the per-level step of a container. A negative step means the
/// indentation is also the step.
#[inline]
pub(crate) fn member_step(indent: usize, step: isize) -> usize {
    if step < 0 {
        indent
    } else {
        step as usize
    }
}

#[inline]
pub(crate) fn begin_container<W>(out: &mut W, open: &[u8], indent: usize) -> Result<()>
where
    W: ?Sized + Write,
{
    out.write_all(open)?;
    if indent > 0 {
        out.write_all(b"\n")?;
    }
    Ok(())
}

#[inline]
pub(crate) fn end_member<W>(out: &mut W, last: bool, step: usize) -> Result<()>
where
    W: ?Sized + Write,
{
    if !last {
        out.write_all(b",")?;
    }
    if step > 0 {
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// Writes the closing bracket one step to the left of the members.
#[inline]
pub(crate) fn end_container<W, F>(
    out: &mut W,
    formatter: &mut F,
    close: &[u8],
    indent: usize,
    step: usize,
) -> Result<()>
where
    W: ?Sized + Write,
    F: Formatter,
{
    formatter.write_indent(out, indent.saturating_sub(step))?;
    out.write_all(close)?;
    Ok(())
}

/// Writes `var` as JSON text, writing the leaf values with `formatter`.
///
/// `indent` and `step` have the meaning of [`Object::stringify`](super::Object::stringify).
/// Empty values are written as `null`, characters as one-character strings.
pub fn stringify_with<W, F>(
    var: &Var,
    out: &mut W,
    formatter: &mut F,
    indent: usize,
    step: isize,
) -> Result<()>
where
    W: ?Sized + Write,
    F: Formatter,
{
    match var {
        Var::Empty => formatter.write_null(out)?,
        Var::Bool(b) => formatter.write_bool(out, *b)?,
        Var::Int(i) => formatter.write_i64(out, *i)?,
        Var::UInt(u) => formatter.write_u64(out, *u)?,
        Var::Float(f) => formatter.write_f64(out, *f)?,
        Var::Char(c) => formatter.write_string(out, c.encode_utf8(&mut [0u8; 4]))?,
        Var::String(s) => formatter.write_string(out, s.as_str())?,
        Var::Array(a) => return a.borrow().stringify_with(out, formatter, indent, step),
        Var::Object(o) => return o.borrow().stringify_with(out, formatter, indent, step),
    }
    Ok(())
}

/// Writes `var` as JSON text with the default formatter.
///
/// # Examples
/// ```
/// use sonic_var::{array, stringify, Var};
///
/// let mut out = Vec::new();
/// stringify(&Var::from(array![1, "a"]), &mut out, 0, -1).unwrap();
/// assert_eq!(out, br#"[1,"a"]"#);
/// ```
#[inline]
pub fn stringify<W>(var: &Var, out: &mut W, indent: usize, step: isize) -> Result<()>
where
    W: ?Sized + Write,
{
    stringify_with(var, out, &mut DefaultFormatter, indent, step)
}

/// Serialize a `Var` as a compact JSON string.
#[inline]
pub fn to_string(var: &Var) -> Result<String> {
    to_string_with_indent(var, 0)
}

/// Serialize a `Var` as a JSON string, indented two spaces per level.
///
/// # Examples
/// ```
/// use sonic_var::{object, to_string_pretty, Var};
///
/// let var = Var::from(object! {"a": 1});
/// assert_eq!(to_string_pretty(&var).unwrap(), "{\n  \"a\" : 1\n}");
/// ```
#[inline]
pub fn to_string_pretty(var: &Var) -> Result<String> {
    to_string_with_indent(var, 2)
}

fn to_string_with_indent(var: &Var, indent: usize) -> Result<String> {
    let vec = stringify_into(Vec::with_capacity(128), var, &mut DefaultFormatter, indent)?;
    // the formatters only write valid UTF-8
    let string = unsafe { String::from_utf8_unchecked(vec) };
    Ok(string)
}

/// Serialize a `Var` as compact JSON text into the I/O stream.
#[inline]
pub fn to_writer<W: Write>(mut writer: W, var: &Var) -> Result<()> {
    stringify(var, &mut writer, 0, -1)
}

/// Serialize a `Var` as JSON text into the I/O stream, indented two spaces per level.
#[inline]
pub fn to_writer_pretty<W: Write>(mut writer: W, var: &Var) -> Result<()> {
    stringify(var, &mut writer, 2, -1)
}
