//! Block-level event types.

use crate::Range;

/// Events emitted by the block parser, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockEvent {
    /// The document title.
    Heading(Range),

    /// Start of an ordered list.
    ListStart {
        /// Ordinal of the first item. Continues across interrupted lists,
        /// so it is 1 only for the first list of a document.
        start: u32,
    },
    /// One list item.
    ListItem(Range),
    /// End of an ordered list.
    ListEnd,

    /// A single-line paragraph.
    Paragraph(Range),

    /// A blank input line.
    Break,
}
