/// The escaped form of every byte: `(length, bytes)`. A length of zero means the
/// byte is written as is.
pub const QUOTE_TAB: [(u8, [u8; 8]); 256] = build_quote_tab();

/// Non-zero for the bytes that must be escaped inside a JSON string.
pub const NEED_ESCAPED: [u8; 256] = build_need_escaped();

const HEX: &[u8; 16] = b"0123456789abcdef";

const fn build_quote_tab() -> [(u8, [u8; 8]); 256] {
    let mut tab = [(0u8, [0u8; 8]); 256];
    let mut ch = 0;
    while ch < 0x20 {
        tab[ch] = (
            6,
            [b'\\', b'u', b'0', b'0', HEX[ch >> 4], HEX[ch & 0xf], 0, 0],
        );
        ch += 1;
    }
    tab[0x08] = (2, *b"\\b\0\0\0\0\0\0");
    tab[0x09] = (2, *b"\\t\0\0\0\0\0\0");
    tab[0x0a] = (2, *b"\\n\0\0\0\0\0\0");
    tab[0x0c] = (2, *b"\\f\0\0\0\0\0\0");
    tab[0x0d] = (2, *b"\\r\0\0\0\0\0\0");
    tab[b'"' as usize] = (2, *b"\\\"\0\0\0\0\0\0");
    tab[b'\\' as usize] = (2, *b"\\\\\0\0\0\0\0\0");
    tab
}

const fn build_need_escaped() -> [u8; 256] {
    let tab = build_quote_tab();
    let mut out = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        out[i] = (tab[i].0 != 0) as u8;
        i += 1;
    }
    out
}

#[inline(always)]
fn escape_byte(ch: u8, dst: &mut Vec<u8>) {
    let (cnt, buf) = &QUOTE_TAB[ch as usize];
    dst.extend_from_slice(&buf[..*cnt as usize]);
}

#[inline]
fn escape_utf16(unit: u16, dst: &mut Vec<u8>) {
    dst.extend_from_slice(&[
        b'\\',
        b'u',
        HEX[(unit >> 12) as usize & 0xf],
        HEX[(unit >> 8) as usize & 0xf],
        HEX[(unit >> 4) as usize & 0xf],
        HEX[unit as usize & 0xf],
    ]);
}

/// Appends `value` as a JSON string to `dst`. Only quotes, backslashes and
/// control characters are escaped. If `need_quote` is `false`, the string is
/// written without the surrounding quotes.
#[inline]
pub fn format_string(value: &str, dst: &mut Vec<u8>, need_quote: bool) {
    let bytes = value.as_bytes();
    dst.reserve(bytes.len() + 2);
    if need_quote {
        dst.push(b'"');
    }

    let mut start = 0;
    for (i, &ch) in bytes.iter().enumerate() {
        if NEED_ESCAPED[ch as usize] == 0 {
            continue;
        }
        dst.extend_from_slice(&bytes[start..i]);
        escape_byte(ch, dst);
        start = i + 1;
    }
    dst.extend_from_slice(&bytes[start..]);

    if need_quote {
        dst.push(b'"');
    }
}

/// Like [`format_string`], but every non-ASCII character is escaped as `\uXXXX`,
/// using a surrogate pair for characters outside the BMP.
pub fn format_string_ascii(value: &str, dst: &mut Vec<u8>, need_quote: bool) {
    let bytes = value.as_bytes();
    dst.reserve(bytes.len() + 2);
    if need_quote {
        dst.push(b'"');
    }

    let mut start = 0;
    for (i, ch) in value.char_indices() {
        if ch.is_ascii() && NEED_ESCAPED[ch as usize] == 0 {
            continue;
        }
        dst.extend_from_slice(&bytes[start..i]);
        if ch.is_ascii() {
            escape_byte(ch as u8, dst);
        } else {
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                escape_utf16(*unit, dst);
            }
        }
        start = i + ch.len_utf8();
    }
    dst.extend_from_slice(&bytes[start..]);

    if need_quote {
        dst.push(b'"');
    }
}
