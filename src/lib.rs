//! linemark: plain text to HTML document formatter
//!
//! Turns unstructured text into a small, self-contained HTML document:
//! - a short first line becomes the `<h2>` title
//! - runs of numbered lines become `<ol>` lists whose numbering continues
//!   across interruptions
//! - blank lines become `<br>` markers
//! - every other line becomes its own `<p>`
//!
//! # Design
//! - Single left-to-right pass over the lines, no backtracking
//! - Events carry ranges into the input; only the output is allocated
//! - No state survives a call, so repeated calls never influence each other

pub mod block;
pub mod classify;
pub mod config;
pub mod document;
pub mod error;
pub mod escape;
pub mod range;
pub mod render;
pub mod scan;

use log::debug;

// Re-export primary types
pub use block::{BlockEvent, BlockParser, ListRun};
pub use classify::LineKind;
pub use config::Options;
pub use document::extract_body;
pub use error::{Error, Result};
pub use range::Range;
pub use render::HtmlWriter;

/// Format plain text into a complete HTML document.
///
/// Empty or whitespace-only input yields an empty string: there is nothing
/// to render, so no document shell is produced either.
///
/// # Example
/// ```
/// let html = linemark::format("Groceries\n1. Milk\n2. Eggs");
/// assert!(html.contains("<h2>Groceries</h2>"));
/// assert!(html.contains("<li>Milk</li>"));
/// assert!(linemark::format("  \n\t").is_empty());
/// ```
pub fn format(text: &str) -> String {
    format_with_options(text, &Options::default())
}

/// Format plain text into a complete HTML document with options.
pub fn format_with_options(text: &str, options: &Options) -> String {
    let mut writer = HtmlWriter::with_capacity_for(text.len());
    render_to_writer(text, &mut writer, options, true);
    writer.into_string()
}

/// Format plain text into a provided buffer.
///
/// The buffer is cleared first and keeps its capacity, so formatting on
/// every keystroke can reuse one allocation.
pub fn format_into(text: &str, out: &mut String) {
    format_into_with_options(text, out, &Options::default());
}

/// Format plain text into a provided buffer with options.
pub fn format_into_with_options(text: &str, out: &mut String, options: &Options) {
    out.clear();
    let mut writer = HtmlWriter::default();
    std::mem::swap(writer.buffer_mut(), out);
    render_to_writer(text, &mut writer, options, true);
    std::mem::swap(writer.buffer_mut(), out);
}

/// Format plain text into the block markup only, without the document shell.
///
/// This is what a live preview shows; it equals the document's content
/// region.
pub fn format_body(text: &str, options: &Options) -> String {
    let mut writer = HtmlWriter::with_capacity_for(text.len());
    render_to_writer(text, &mut writer, options, false);
    writer.into_string()
}

/// Parse `input` into block events and render them.
fn render_to_writer(input: &str, writer: &mut HtmlWriter, options: &Options, shell: bool) {
    if input.chars().all(range::is_whitespace) {
        debug!("input is blank, nothing to format");
        return;
    }

    let mut parser = BlockParser::new(input);
    let mut events = Vec::with_capacity((input.len() / 16).max(16));
    parser.parse(&mut events);

    let line_count = parser.line_count();
    let start_len = writer.len();
    if shell {
        document::write_document_start(writer, &options.document_title);
    }
    render::render_events(input, &events, writer, options);
    if shell {
        document::write_document_end(writer);
    }

    debug!(
        "formatted {} lines ({} bytes) into {} bytes of markup",
        line_count,
        input.len(),
        writer.len() - start_len
    );
}
