//! Ordered list accumulation.

use log::debug;
use smallvec::SmallVec;

use super::event::BlockEvent;
use crate::Range;

/// Buffer for the numbered lines of the list currently being built.
///
/// Items collect until [`flush`](Self::flush) turns them into one
/// `ListStart`, `ListItem`..., `ListEnd` sequence. `next_start` counts every
/// item flushed so far plus one and never goes back, so a list that resumes
/// after a paragraph or blank line continues the numbering.
#[derive(Debug, Clone)]
pub struct ListRun {
    items: SmallVec<[Range; 8]>,
    next_start: u32,
    active: bool,
}

impl Default for ListRun {
    fn default() -> Self {
        Self::new()
    }
}

impl ListRun {
    pub fn new() -> Self {
        Self {
            items: SmallVec::new(),
            next_start: 1,
            active: false,
        }
    }

    /// Whether the previous line was a list item.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Number of buffered items.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Ordinal the next flushed list will start at.
    #[inline]
    pub fn next_start(&self) -> u32 {
        self.next_start
    }

    /// Add an item, opening a new run if none is active.
    pub fn push(&mut self, item: Range, events: &mut Vec<BlockEvent>) {
        if !self.active {
            // A run that was never closed cannot merge with this one.
            self.flush(events);
            self.active = true;
        }
        self.items.push(item);
    }

    /// Emit the buffered items as one list and close the run.
    ///
    /// Does nothing but deactivate when the buffer is empty.
    pub fn flush(&mut self, events: &mut Vec<BlockEvent>) {
        self.active = false;
        if self.items.is_empty() {
            return;
        }

        debug!(
            "flushing list: {} items starting at {}",
            self.items.len(),
            self.next_start
        );

        events.reserve(self.items.len() + 2);
        events.push(BlockEvent::ListStart {
            start: self.next_start,
        });
        events.extend(self.items.iter().map(|&item| BlockEvent::ListItem(item)));
        events.push(BlockEvent::ListEnd);

        let flushed = u32::try_from(self.items.len()).unwrap_or(u32::MAX);
        self.next_start = self.next_start.saturating_add(flushed);
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(n: u32) -> Range {
        Range::new(n, n + 1)
    }

    #[test]
    fn test_new_run_is_empty() {
        let run = ListRun::new();
        assert!(run.is_empty());
        assert!(!run.is_active());
        assert_eq!(run.next_start(), 1);
    }

    #[test]
    fn test_push_activates() {
        let mut run = ListRun::new();
        let mut events = Vec::new();
        run.push(item(0), &mut events);
        run.push(item(2), &mut events);
        assert!(run.is_active());
        assert_eq!(run.len(), 2);
        assert!(events.is_empty());
    }

    #[test]
    fn test_flush_emits_list() {
        let mut run = ListRun::new();
        let mut events = Vec::new();
        run.push(item(0), &mut events);
        run.push(item(2), &mut events);
        run.flush(&mut events);

        assert_eq!(
            events,
            [
                BlockEvent::ListStart { start: 1 },
                BlockEvent::ListItem(item(0)),
                BlockEvent::ListItem(item(2)),
                BlockEvent::ListEnd,
            ]
        );
        assert!(run.is_empty());
        assert!(!run.is_active());
        assert_eq!(run.next_start(), 3);
    }

    #[test]
    fn test_flush_empty_is_noop() {
        let mut run = ListRun::new();
        let mut events = Vec::new();
        run.flush(&mut events);
        assert!(events.is_empty());
        assert_eq!(run.next_start(), 1);
    }

    #[test]
    fn test_numbering_continues() {
        let mut run = ListRun::new();
        let mut events = Vec::new();
        run.push(item(0), &mut events);
        run.push(item(1), &mut events);
        run.flush(&mut events);
        events.clear();

        run.push(item(5), &mut events);
        run.flush(&mut events);
        assert_eq!(events[0], BlockEvent::ListStart { start: 3 });
        assert_eq!(run.next_start(), 4);
    }

    #[test]
    fn test_spills_past_inline_capacity() {
        let mut run = ListRun::new();
        let mut events = Vec::new();
        for n in 0..20 {
            run.push(item(n), &mut events);
        }
        run.flush(&mut events);
        assert_eq!(events.len(), 22);
        assert_eq!(run.next_start(), 21);
    }
}
