//! Compact byte ranges into the input text.
//!
//! Every line, title, item and paragraph is referenced by a `Range` instead
//! of an owned string, so one formatting pass allocates only for output.
//! Offsets are `u32`; inputs are limited to 4GB.

/// Byte range into the input text.
///
/// Ranges produced by the scanner and classifier always lie on UTF-8
/// character boundaries, so slicing a `&str` with them never panics.
///
/// # Example
/// ```
/// use linemark::Range;
///
/// let input = "  Hello  ";
/// let range = Range::new(2, 7);
/// assert_eq!(range.as_str(input), "Hello");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Range {
    pub start: u32,
    pub end: u32,
}

const _: () = assert!(std::mem::size_of::<Range>() == 8);

impl Range {
    /// Create a new range.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Create a range from usize offsets.
    ///
    /// # Panics
    /// Panics in debug mode if an offset exceeds `u32::MAX`.
    #[inline]
    pub fn from_usize(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        debug_assert!(end <= u32::MAX as usize);
        Self {
            start: start as u32,
            end: end as u32,
        }
    }

    /// The text this range refers to.
    #[inline]
    pub fn as_str<'a>(&self, input: &'a str) -> &'a str {
        &input[self.start as usize..self.end as usize]
    }

    /// Length in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Shrink the range so it excludes leading and trailing whitespace.
    ///
    /// Whitespace is whatever [`is_whitespace`] accepts. An all-whitespace
    /// range collapses to an empty range at its end.
    pub fn trim(&self, input: &str) -> Self {
        let text = self.as_str(input);
        let leading = text.len() - text.trim_start_matches(is_whitespace).len();
        let trimmed = text.trim_matches(is_whitespace);
        let start = self.start as usize + leading;
        Self::from_usize(start, start + trimmed.len())
    }

    /// The sub-range `offsets`, given relative to this range's start.
    ///
    /// Both offsets must land on character boundaries.
    #[inline]
    pub fn slice(&self, offsets: std::ops::Range<usize>) -> Self {
        debug_assert!(offsets.end <= self.len() as usize);
        let base = self.start as usize;
        Self::from_usize(base + offsets.start, base + offsets.end)
    }
}

/// Whitespace stripped from line edges and skipped after a list marker.
///
/// Unicode `White_Space` minus NEL (U+0085), plus the byte order mark
/// (U+FEFF), so a BOM at the start of a file never reaches the output.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    match c {
        '\u{FEFF}' => true,
        '\u{85}' => false,
        c => c.is_whitespace(),
    }
}

/// Characters that end a list item's text: `\r`, LINE SEPARATOR and
/// PARAGRAPH SEPARATOR. `\n` never appears inside a scanned line.
#[inline]
pub fn is_line_terminator(c: char) -> bool {
    matches!(c, '\r' | '\u{2028}' | '\u{2029}')
}
