//! Escaping raw bytes into a single-line C string literal
//!
//! Printable ASCII (`' '` through `'~'`) passes through unchanged, except for
//! `\` and `"`.  Those two, plus newline and tab, get the usual short escapes;
//! every other byte becomes a two-digit lowercase `\xNN` escape.
use std::io::Write;

/// How a single byte is written into the literal
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Escape {
    /// Written as-is
    Literal(u8),
    /// Written as a backslash followed by the given character
    Short(u8),
    /// Written as `\x` followed by two lowercase hex digits
    Hex(u8),
}

impl Escape {
    /// Classifies a byte
    pub const fn of(b: u8) -> Self {
        match b {
            b'\n' => Escape::Short(b'n'),
            b'\t' => Escape::Short(b't'),
            b'\\' | b'"' => Escape::Short(b),
            b' '..=b'~' => Escape::Literal(b),
            _ => Escape::Hex(b),
        }
    }
}

/// Writes `bytes` to `out` as the body of a string literal (without quotes)
pub fn write_escaped<W: Write>(
    bytes: &[u8],
    out: &mut W,
) -> std::io::Result<()> {
    // Copy runs of literal bytes in one go
    let mut start = 0;
    for (i, &b) in bytes.iter().enumerate() {
        match Escape::of(b) {
            Escape::Literal(_) => continue,
            Escape::Short(c) => {
                out.write_all(&bytes[start..i])?;
                out.write_all(&[b'\\', c])?;
            }
            Escape::Hex(h) => {
                out.write_all(&bytes[start..i])?;
                write!(out, "\\x{h:02x}")?;
            }
        }
        start = i + 1;
    }
    out.write_all(&bytes[start..])
}

/// Returns `bytes` as the body of a string literal (without quotes)
pub fn escape(bytes: &[u8]) -> String {
    let mut out = Vec::with_capacity(bytes.len());
    // Writing to a `Vec` can't fail
    let _ = write_escaped(bytes, &mut out);
    // Escaped output is pure ASCII, so each byte is one `char`
    out.into_iter().map(char::from).collect()
}
