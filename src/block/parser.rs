//! Block parser implementation.

use log::trace;

use super::event::BlockEvent;
use super::list::ListRun;
use crate::classify::{LineKind, classify};
use crate::scan::LineScanner;

/// Single-pass block parser.
///
/// Classifies each line and emits events as it goes; only numbered lines
/// are buffered, until something other than a list item shows up.
pub struct BlockParser<'a> {
    /// Input text.
    input: &'a str,
    /// Line source.
    lines: LineScanner<'a>,
    /// The list being accumulated.
    list: ListRun,
}

impl<'a> BlockParser<'a> {
    /// Create a new block parser.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            lines: LineScanner::new(input),
            list: ListRun::new(),
        }
    }

    /// Parse all lines and collect events.
    pub fn parse(&mut self, events: &mut Vec<BlockEvent>) {
        while let Some(line) = self.lines.next() {
            let kind = classify(self.input, &line);
            trace!("line {}: {:?}", line.index, kind);
            self.process(kind, events);
        }

        // Close a list that runs to the end of input.
        self.list.flush(events);
    }

    /// Number of lines processed so far.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.lines_read()
    }

    fn process(&mut self, kind: LineKind, events: &mut Vec<BlockEvent>) {
        match kind {
            LineKind::Blank => {
                self.list.flush(events);
                events.push(BlockEvent::Break);
            }
            LineKind::Title(range) => {
                events.push(BlockEvent::Heading(range));
            }
            LineKind::ListItem(range) => {
                self.list.push(range, events);
            }
            LineKind::Paragraph(range) => {
                if self.list.is_active() {
                    self.list.flush(events);
                }
                events.push(BlockEvent::Paragraph(range));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> Vec<BlockEvent> {
        let mut parser = BlockParser::new(input);
        let mut events = Vec::new();
        parser.parse(&mut events);
        events
    }

    fn get_text<'a>(input: &'a str, event: &BlockEvent) -> &'a str {
        match event {
            BlockEvent::Heading(r) | BlockEvent::ListItem(r) | BlockEvent::Paragraph(r) => {
                r.as_str(input)
            }
            _ => panic!("Expected text-carrying event, got {event:?}"),
        }
    }

    #[test]
    fn test_empty_input() {
        // A lone empty line is still a blank line.
        assert_eq!(parse(""), [BlockEvent::Break]);
    }

    #[test]
    fn test_line_count() {
        let mut parser = BlockParser::new("Title\n1. a\n\nText\n");
        let mut events = Vec::new();
        assert_eq!(parser.line_count(), 0);
        parser.parse(&mut events);
        assert_eq!(parser.line_count(), 5);
    }

    #[test]
    fn test_title_only() {
        let input = "Hello";
        let events = parse(input);
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], BlockEvent::Heading(_)));
        assert_eq!(get_text(input, &events[0]), "Hello");
    }

    #[test]
    fn test_paragraphs() {
        let input = "Title\nOne\nTwo";
        let events = parse(input);
        assert_eq!(events.len(), 3);
        assert!(matches!(events[1], BlockEvent::Paragraph(_)));
        assert_eq!(get_text(input, &events[1]), "One");
        assert_eq!(get_text(input, &events[2]), "Two");
    }

    #[test]
    fn test_blank_lines_are_breaks() {
        let events = parse("Title\n\n\nText");
        assert_eq!(events[1], BlockEvent::Break);
        assert_eq!(events[2], BlockEvent::Break);
        assert!(matches!(events[3], BlockEvent::Paragraph(_)));
    }

    #[test]
    fn test_list_at_end_of_input() {
        let input = "1. a\n2. b";
        let events = parse(input);
        assert_eq!(events.len(), 4);
        assert_eq!(events[0], BlockEvent::ListStart { start: 1 });
        assert_eq!(get_text(input, &events[1]), "a");
        assert_eq!(get_text(input, &events[2]), "b");
        assert_eq!(events[3], BlockEvent::ListEnd);
    }

    #[test]
    fn test_list_closed_by_blank() {
        let events = parse("1. a\n\n");
        assert_eq!(events[0], BlockEvent::ListStart { start: 1 });
        assert_eq!(events[2], BlockEvent::ListEnd);
        assert_eq!(events[3], BlockEvent::Break);
        assert_eq!(events[4], BlockEvent::Break);
        assert_eq!(events.len(), 5);
    }

    #[test]
    fn test_list_closed_by_paragraph() {
        let input = "Title\n1. a\nafter";
        let events = parse(input);
        assert_eq!(events[1], BlockEvent::ListStart { start: 1 });
        assert_eq!(events[3], BlockEvent::ListEnd);
        assert_eq!(get_text(input, &events[4]), "after");
    }

    #[test]
    fn test_resumed_list_continues_numbering() {
        let input = "1. a\n2. b\n\nhello\n3. c";
        let events = parse(input);
        assert_eq!(
            events,
            [
                BlockEvent::ListStart { start: 1 },
                BlockEvent::ListItem(crate::Range::new(3, 4)),
                BlockEvent::ListItem(crate::Range::new(8, 9)),
                BlockEvent::ListEnd,
                BlockEvent::Break,
                BlockEvent::Paragraph(crate::Range::new(11, 16)),
                BlockEvent::ListStart { start: 3 },
                BlockEvent::ListItem(crate::Range::new(20, 21)),
                BlockEvent::ListEnd,
            ]
        );
    }

    #[test]
    fn test_numbering_ignores_literal_numbers() {
        let events = parse("7. a\n\n1. b\n9. c\n\n1. d");
        let starts: Vec<u32> = events
            .iter()
            .filter_map(|e| match e {
                BlockEvent::ListStart { start } => Some(*start),
                _ => None,
            })
            .collect();
        assert_eq!(starts, [1, 2, 4]);
    }

    #[test]
    fn test_numbered_title_lookalike_joins_list() {
        // "1 apple" on line 0 is the title; "2 pear" starts the list.
        let input = "1 apple\n2 pear";
        let events = parse(input);
        assert!(matches!(events[0], BlockEvent::Heading(_)));
        assert_eq!(events[1], BlockEvent::ListStart { start: 1 });
        assert_eq!(get_text(input, &events[2]), "pear");
    }

    #[test]
    fn test_parsers_are_independent() {
        let input = "1. a\n\n2. b";
        let first = parse(input);
        let second = parse(input);
        assert_eq!(first, second);
        assert_eq!(first[4], BlockEvent::ListStart { start: 2 });
    }
}
