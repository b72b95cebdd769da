//! Visible escapes for terminal output embedded in Markdown.
//!
//! Terminal renderings are mostly control sequences, which would vanish in a
//! code fence. [`encode_visible`] spells every control byte and invisible
//! character out as a backslash escape while keeping line breaks, so the
//! fence shows the sample line by line with its escape codes readable.

use std::fmt::Write;

/// Escape `bytes` so that the result has no control or otherwise invisible
/// characters besides `\n`.
///
/// Invalid UTF-8 is kept as `\xNN` escapes, one per byte.
pub fn encode_visible(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        for c in chunk.valid().chars() {
            push_char(&mut out, c);
        }
        for byte in chunk.invalid() {
            push_byte(&mut out, *byte);
        }
    }
    out
}

fn push_char(out: &mut String, c: char) {
    match c {
        '\n' => out.push('\n'),
        '\\' => out.push_str("\\\\"),
        '"' => out.push_str("\\\""),
        '\x07' => out.push_str("\\a"),
        '\x08' => out.push_str("\\b"),
        '\x0c' => out.push_str("\\f"),
        '\r' => out.push_str("\\r"),
        '\t' => out.push_str("\\t"),
        '\x0b' => out.push_str("\\v"),
        c if c.is_ascii_control() => push_byte(out, c as u8),
        c if !is_printable(c) => {
            let code = c as u32;
            // Writing into a String cannot fail.
            let _ = if code <= 0xffff {
                write!(out, "\\u{code:04x}")
            } else {
                write!(out, "\\U{code:08x}")
            };
        }
        c => out.push(c),
    }
}

/// False for characters that render as nothing or as blank space other than
/// the ASCII space: controls, separators, format characters, private use and
/// noncharacters.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    if c.is_control() || c.is_whitespace() {
        return false;
    }
    let code = c as u32;
    !matches!(
        code,
        0x00ad
            | 0x0600..=0x0605
            | 0x061c
            | 0x06dd
            | 0x070f
            | 0x08e2
            | 0x180e
            | 0x200b..=0x200f
            | 0x202a..=0x202e
            | 0x2060..=0x2064
            | 0x2066..=0x206f
            | 0xe000..=0xf8ff
            | 0xfdd0..=0xfdef
            | 0xfeff
            | 0xfff9..=0xfffb
            | 0x110bd
            | 0x110cd
            | 0x1bca0..=0x1bca3
            | 0x1d173..=0x1d17a
            | 0xe0001
            | 0xe0020..=0xe007f
            | 0xf0000..=0x10ffff
    ) && code & 0xfffe != 0xfffe
}

fn push_byte(out: &mut String, byte: u8) {
    let _ = write!(out, "\\x{byte:02x}");
}

/// Undo [`encode_visible`].
///
/// Malformed escapes are copied through as written.
#[cfg(test)]
pub fn decode_visible(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    let mut rest = text;

    while let Some(index) = rest.find('\\') {
        out.extend_from_slice(&rest.as_bytes()[..index]);
        rest = &rest[index..];

        let (decoded, consumed) = decode_escape(rest);
        match decoded {
            Some(bytes) => out.extend_from_slice(&bytes),
            None => out.extend_from_slice(&rest.as_bytes()[..consumed]),
        }
        rest = &rest[consumed..];
    }
    out.extend_from_slice(rest.as_bytes());
    out
}

/// Decode the escape at the start of `text`, which begins with a backslash.
///
/// Returns the decoded bytes, or `None` for a malformed escape, along with
/// how many bytes of `text` were looked at.
#[cfg(test)]
fn decode_escape(text: &str) -> (Option<Vec<u8>>, usize) {
    let Some(kind) = text[1..].chars().next() else {
        return (None, 1);
    };

    let simple = match kind {
        '\\' => Some(b'\\'),
        '"' => Some(b'"'),
        'a' => Some(b'\x07'),
        'b' => Some(b'\x08'),
        'f' => Some(b'\x0c'),
        'n' => Some(b'\n'),
        'r' => Some(b'\r'),
        't' => Some(b'\t'),
        'v' => Some(b'\x0b'),
        _ => None,
    };
    if let Some(byte) = simple {
        return (Some(vec![byte]), 2);
    }

    let digits = match kind {
        'x' => 2,
        'u' => 4,
        'U' => 8,
        _ => return (None, 1 + kind.len_utf8()),
    };

    let end = 2 + digits;
    let Some(hex) = text.get(2..end) else {
        return (None, 2);
    };
    let Ok(code) = u32::from_str_radix(hex, 16) else {
        return (None, 2);
    };
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return (None, 2);
    }

    if kind == 'x' {
        // Raw byte, possibly not valid UTF-8 on its own.
        return (Some(vec![code as u8]), end);
    }
    match char::from_u32(code) {
        Some(c) => (Some(c.to_string().into_bytes()), end),
        None => (None, 2),
    }
}
