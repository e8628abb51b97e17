//! Block assembly for plain text.
//!
//! The block parser walks the input line by line and produces a flat event
//! stream:
//! - Headings (the title line)
//! - Ordered lists built from runs of numbered lines
//! - Paragraphs, one per line
//! - Breaks, one per blank line

mod event;
mod list;
mod parser;

pub use event::BlockEvent;
pub use list::ListRun;
pub use parser::BlockParser;
