//! HTML escaping utilities.
//!
//! Fast-path optimized: scans for the first escapable character with
//! memchr, then bulk-copies the segments between escapes.

use memchr::{memchr, memchr2, memchr3};

/// Lookup table for escapable characters in text content.
/// `"` is escaped too so text can be reused inside attribute values.
const TEXT_ESCAPE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    table[b'<' as usize] = true;
    table[b'>' as usize] = true;
    table[b'&' as usize] = true;
    table[b'"' as usize] = true;
    table
};

/// Lookup table for escapable characters in attributes.
const ATTR_ESCAPE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    table[b'<' as usize] = true;
    table[b'>' as usize] = true;
    table[b'&' as usize] = true;
    table[b'"' as usize] = true;
    table[b'\'' as usize] = true;
    table
};

/// Escape HTML text content into `out`.
///
/// Escapes `<`, `>`, `&` and `"`.
///
/// # Example
/// ```
/// use linemark::escape::escape_text_into;
///
/// let mut out = String::new();
/// escape_text_into(&mut out, "<script>");
/// assert_eq!(out, "&lt;script&gt;");
/// ```
#[inline]
pub fn escape_text_into(out: &mut String, input: &str) {
    match first_text_escape(input.as_bytes()) {
        Some(pos) => escape_from(out, input, pos, &TEXT_ESCAPE_TABLE),
        None => out.push_str(input),
    }
}

/// Escape an HTML attribute value into `out`.
///
/// Escapes `<`, `>`, `&`, `"` and `'`.
#[inline]
pub fn escape_attr_into(out: &mut String, input: &str) {
    match first_attr_escape(input.as_bytes()) {
        Some(pos) => escape_from(out, input, pos, &ATTR_ESCAPE_TABLE),
        None => out.push_str(input),
    }
}

/// Escape `input`, copying the clean prefix `..first` verbatim.
///
/// All escapable bytes are ASCII, so every split point is a char boundary.
fn escape_from(out: &mut String, input: &str, first: usize, table: &[bool; 256]) {
    let bytes = input.as_bytes();
    out.reserve(input.len() + input.len() / 8);
    out.push_str(&input[..first]);

    let mut pos = first;
    while pos < bytes.len() {
        let scan_start = pos;
        while pos < bytes.len() && !table[bytes[pos] as usize] {
            pos += 1;
        }
        if pos > scan_start {
            out.push_str(&input[scan_start..pos]);
        }

        if pos < bytes.len() {
            out.push_str(match bytes[pos] {
                b'<' => "&lt;",
                b'>' => "&gt;",
                b'&' => "&amp;",
                b'"' => "&quot;",
                _ => "&#39;",
            });
            pos += 1;
        }
    }
}

/// Escape text content into a new `String`.
///
/// Prefer `escape_text_into` to reuse buffers.
pub fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + input.len() / 8);
    escape_text_into(&mut out, input);
    out
}

#[inline]
fn first_text_escape(input: &[u8]) -> Option<usize> {
    let a = memchr3(b'<', b'>', b'&', input);
    let b = memchr(b'"', input);
    min_opt(a, b)
}

#[inline]
fn first_attr_escape(input: &[u8]) -> Option<usize> {
    let a = memchr3(b'<', b'>', b'&', input);
    let b = memchr2(b'"', b'\'', input);
    min_opt(a, b)
}

#[inline]
fn min_opt(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, None) => a,
        (None, b) => b,
    }
}
