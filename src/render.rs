//! HTML output writer.
//!
//! Block markup is indented to sit inside the document's content `<div>`:
//! blocks get eight spaces, list items twelve. Headings, paragraphs and
//! lists are followed by an empty line; breaks are not.

use crate::block::BlockEvent;
use crate::{Options, escape};

const BLOCK_INDENT: &str = "        ";
const ITEM_INDENT: &str = "            ";

/// HTML output writer with a pre-allocated, reusable buffer.
///
/// # Example
/// ```
/// use linemark::HtmlWriter;
///
/// let mut writer = HtmlWriter::with_capacity_for(64);
/// writer.paragraph_start();
/// writer.write_escaped_text("Fish & Chips");
/// writer.paragraph_end();
///
/// assert_eq!(writer.into_string(), "        <p>Fish &amp; Chips</p>\n\n");
/// ```
#[derive(Debug, Default)]
pub struct HtmlWriter {
    out: String,
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self {
            out: String::with_capacity(1024),
        }
    }

    /// Create with capacity based on the expected input size.
    ///
    /// Tags and indentation add roughly half again on top of the text.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self {
            out: String::with_capacity(input_len + input_len / 2 + 64),
        }
    }

    /// Write a string without escaping.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.out.push_str(s);
    }

    /// Write text with HTML escaping (for text content).
    #[inline]
    pub fn write_escaped_text(&mut self, text: &str) {
        escape::escape_text_into(&mut self.out, text);
    }

    /// Write an attribute value with full escaping (including quotes).
    #[inline]
    pub fn write_escaped_attr(&mut self, attr: &str) {
        escape::escape_attr_into(&mut self.out, attr);
    }

    /// Write line content, escaped unless `raw` is set.
    #[inline]
    pub fn write_content(&mut self, text: &str, raw: bool) {
        if raw {
            self.write_str(text);
        } else {
            self.write_escaped_text(text);
        }
    }

    /// Current output length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.out.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Clear output for reuse (keeps capacity).
    #[inline]
    pub fn clear(&mut self) {
        self.out.clear();
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Take ownership of the output.
    #[inline]
    pub fn into_string(self) -> String {
        self.out
    }

    /// Mutable access to the internal buffer.
    ///
    /// Use with caution - allows bypassing escaping.
    #[inline]
    pub fn buffer_mut(&mut self) -> &mut String {
        &mut self.out
    }

    // --- Block elements ---

    /// Write heading start: `<h2>`
    #[inline]
    pub fn heading_start(&mut self) {
        self.write_str(BLOCK_INDENT);
        self.write_str("<h2>");
    }

    /// Write heading end: `</h2>\n\n`
    #[inline]
    pub fn heading_end(&mut self) {
        self.write_str("</h2>\n\n");
    }

    /// Write paragraph start: `<p>`
    #[inline]
    pub fn paragraph_start(&mut self) {
        self.write_str(BLOCK_INDENT);
        self.write_str("<p>");
    }

    /// Write paragraph end: `</p>\n\n`
    #[inline]
    pub fn paragraph_end(&mut self) {
        self.write_str("</p>\n\n");
    }

    /// Write a line break: `<br>\n`
    #[inline]
    pub fn line_break(&mut self) {
        self.write_str(BLOCK_INDENT);
        self.write_str("<br>\n");
    }

    /// Write list start: `<ol>\n`, or `<ol start="N">\n` when `start` is not 1.
    #[inline]
    pub fn ol_start(&mut self, start: u32) {
        self.write_str(BLOCK_INDENT);
        if start > 1 {
            self.write_str("<ol start=\"");
            self.write_u32(start);
            self.write_str("\">\n");
        } else {
            self.write_str("<ol>\n");
        }
    }

    /// Write list end: `</ol>\n\n`
    #[inline]
    pub fn ol_end(&mut self) {
        self.write_str(BLOCK_INDENT);
        self.write_str("</ol>\n\n");
    }

    /// Write list item start: `<li>`
    #[inline]
    pub fn li_start(&mut self) {
        self.write_str(ITEM_INDENT);
        self.write_str("<li>");
    }

    /// Write list item end: `</li>\n`
    #[inline]
    pub fn li_end(&mut self) {
        self.write_str("</li>\n");
    }

    /// Write a u32 as decimal.
    fn write_u32(&mut self, mut n: u32) {
        if n == 0 {
            self.out.push('0');
            return;
        }

        let mut buf = [0u8; 10]; // Max digits for u32
        let mut i = buf.len();

        while n > 0 {
            i -= 1;
            buf[i] = b'0' + (n % 10) as u8;
            n /= 10;
        }

        for &digit in &buf[i..] {
            self.out.push(char::from(digit));
        }
    }
}

/// Render block events to `writer`, resolving ranges against `input`.
pub fn render_events(input: &str, events: &[BlockEvent], writer: &mut HtmlWriter, options: &Options) {
    let raw = options.allow_html;

    for event in events {
        match *event {
            BlockEvent::Heading(range) => {
                writer.heading_start();
                writer.write_content(range.as_str(input), raw);
                writer.heading_end();
            }
            BlockEvent::ListStart { start } => writer.ol_start(start),
            BlockEvent::ListItem(range) => {
                writer.li_start();
                writer.write_content(range.as_str(input), raw);
                writer.li_end();
            }
            BlockEvent::ListEnd => writer.ol_end(),
            BlockEvent::Paragraph(range) => {
                writer.paragraph_start();
                writer.write_content(range.as_str(input), raw);
                writer.paragraph_end();
            }
            BlockEvent::Break => writer.line_break(),
        }
    }
}
