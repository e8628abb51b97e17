//! Line scanner.
//!
//! Splits the input on `\n` and trims every line. Every segment counts as a
//! line: `"a\n"` is two lines, the second one blank, and `"a\r\nb"` yields
//! `"a"` and `"b"` because the `\r` is trimmed away.

use memchr::memchr;

use crate::Range;

/// One input line after trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    /// Zero-based line number.
    pub index: usize,
    /// Trimmed content of the line.
    pub content: Range,
}

/// Iterator over the trimmed lines of an input text.
///
/// # Example
/// ```
/// use linemark::scan::LineScanner;
///
/// let input = "  one \n\ntwo";
/// let lines: Vec<&str> = LineScanner::new(input)
///     .map(|line| line.content.as_str(input))
///     .collect();
/// assert_eq!(lines, ["one", "", "two"]);
/// ```
#[derive(Debug, Clone)]
pub struct LineScanner<'a> {
    input: &'a str,
    pos: usize,
    index: usize,
    done: bool,
}

impl<'a> LineScanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            index: 0,
            done: false,
        }
    }

    /// Number of lines yielded so far.
    #[inline]
    pub fn lines_read(&self) -> usize {
        self.index
    }
}

impl Iterator for LineScanner<'_> {
    type Item = Line;

    fn next(&mut self) -> Option<Line> {
        if self.done {
            return None;
        }

        let rest = &self.input.as_bytes()[self.pos..];
        let (end, next_pos) = match memchr(b'\n', rest) {
            Some(nl) => (self.pos + nl, self.pos + nl + 1),
            None => {
                // The last segment is a line even when empty.
                self.done = true;
                (self.input.len(), self.input.len())
            }
        };

        let line = Line {
            index: self.index,
            content: Range::from_usize(self.pos, end).trim(self.input),
        };
        self.pos = next_pos;
        self.index += 1;
        Some(line)
    }
}
