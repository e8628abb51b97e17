//! Line classification.
//!
//! Each trimmed line gets exactly one [`LineKind`]. The rules are checked in
//! order and the first match wins:
//!
//! 1. empty line: [`LineKind::Blank`]
//! 2. first line, shorter than [`TITLE_MAX_LEN`] UTF-16 units and not
//!    starting with a numbered-period marker: [`LineKind::Title`]
//! 3. leading digits with an optional period: [`LineKind::ListItem`]
//! 4. anything else: [`LineKind::Paragraph`]
//!
//! The predicates below expect trimmed input (no leading or trailing
//! whitespace), which is what the scanner hands out.

use std::ops;

use crate::Range;
use crate::range::{is_line_terminator, is_whitespace};
use crate::scan::Line;

/// A first line must be strictly shorter than this (in UTF-16 code units)
/// to become the title.
pub const TITLE_MAX_LEN: usize = 50;

/// Classification of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Empty after trimming.
    Blank,
    /// Document title (only ever the first line).
    Title(Range),
    /// Numbered line; the range covers the text after the number marker.
    ListItem(Range),
    /// Any other line.
    Paragraph(Range),
}

/// True when the trimmed line has no content.
#[inline]
pub fn is_blank(line: &str) -> bool {
    line.is_empty()
}

/// Number of ASCII digits (`0`-`9`) at the start of `line`.
#[inline]
fn digit_prefix_len(line: &str) -> usize {
    line.bytes().take_while(u8::is_ascii_digit).count()
}

/// True when `line` starts with one or more ASCII digits immediately
/// followed by a period, e.g. `"1."`, `"42.foo"`.
///
/// `"1 apple"` and `".5"` do not qualify.
#[inline]
pub fn starts_with_numbered_period(line: &str) -> bool {
    let digits = digit_prefix_len(line);
    digits > 0 && line.as_bytes().get(digits) == Some(&b'.')
}

/// True when the line at `index` qualifies as the document title: it is
/// line 0, shorter than [`TITLE_MAX_LEN`], and does not start with a
/// numbered-period marker.
///
/// Length is counted in UTF-16 code units: characters outside the Basic
/// Multilingual Plane, such as most emoji, count twice.
#[inline]
pub fn is_title_candidate(line: &str, index: usize) -> bool {
    index == 0 && utf16_len_below(line, TITLE_MAX_LEN) && !starts_with_numbered_period(line)
}

/// True when `line` is shorter than `limit` UTF-16 code units.
///
/// Stops counting at the limit, so long lines are not walked to the end.
#[inline]
fn utf16_len_below(line: &str, limit: usize) -> bool {
    let mut len = 0;
    for c in line.chars() {
        len += c.len_utf16();
        if len >= limit {
            return false;
        }
    }
    true
}

/// Byte span of the item text of a numbered line, or `None` when the line
/// is not a list item.
///
/// A list item is: one or more ASCII digits, an optional period, optional
/// whitespace, then at least one more character of item text. The marker
/// always yields back enough characters to leave non-empty item text:
///
/// - `"1. apple"` and `"1 apple"` give `"apple"`
/// - `"1."` gives `"."` (the period becomes the text)
/// - `"123"` gives `"3"` (the last digit becomes the text)
/// - `"7"` is not a list item
///
/// Item text ends at the first `\r`, U+2028 or U+2029.
pub fn list_item_span(line: &str) -> Option<ops::Range<usize>> {
    let start = item_text_start(line)?;
    let text = &line[start..];
    let len = text.find(is_line_terminator).unwrap_or(text.len());
    Some(start..start + len)
}

fn item_text_start(line: &str) -> Option<usize> {
    let digits = digit_prefix_len(line);
    if digits == 0 {
        return None;
    }

    let rest = &line[digits..];
    if rest.is_empty() {
        // Only digits: the last one is the item text.
        return (digits >= 2).then(|| digits - 1);
    }

    let marker_end = if rest.len() > 1 && rest.starts_with('.') {
        digits + 1
    } else {
        digits
    };

    let body = &line[marker_end..];
    let text = body.trim_start_matches(is_whitespace);
    if !text.is_empty() {
        return Some(line.len() - text.len());
    }

    // Whitespace-only remainder (untrimmed input): the text is the last
    // character that can start one, else the marker gives characters back.
    match body.char_indices().rev().find(|&(_, c)| !is_line_terminator(c)) {
        Some((i, _)) => Some(marker_end + i),
        None if marker_end > digits => Some(digits),
        None => (digits >= 2).then(|| digits - 1),
    }
}

/// Item text of a numbered line, if `line` is one.
///
/// # Example
/// ```
/// use linemark::classify::list_item_content;
///
/// assert_eq!(list_item_content("3. Buy milk"), Some("Buy milk"));
/// assert_eq!(list_item_content("1 no period"), Some("no period"));
/// assert_eq!(list_item_content("Buy milk"), None);
/// ```
#[inline]
pub fn list_item_content(line: &str) -> Option<&str> {
    list_item_span(line).map(|span| &line[span])
}

/// Classify one scanned line of `input`.
pub fn classify(input: &str, line: &Line) -> LineKind {
    let text = line.content.as_str(input);

    if is_blank(text) {
        LineKind::Blank
    } else if is_title_candidate(text, line.index) {
        LineKind::Title(line.content)
    } else if let Some(span) = list_item_span(text) {
        LineKind::ListItem(line.content.slice(span))
    } else {
        LineKind::Paragraph(line.content)
    }
}
