//! Shared message log primitives for CLI and future UIs.
use std::collections::VecDeque;

/// Severity level for UI messages produced from dispatched commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageLevel {
    Info,
    /// A command was ignored (stale id, no active combat).
    Warning,
    Error,
    /// A verdict announcement.
    Result,
}

/// Snapshot of a single message entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageEntry {
    /// Position in the log since the session began.
    pub sequence: u64,
    pub text: String,
    pub level: MessageLevel,
}

/// Bounded log of messages displayed to the user; oldest entries drop first.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<MessageEntry>,
    capacity: usize,
    next_sequence: u64,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let bounded_capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(bounded_capacity),
            capacity: bounded_capacity,
            next_sequence: 1,
        }
    }

    pub fn push(&mut self, text: impl Into<String>, level: MessageLevel) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(MessageEntry {
            sequence: self.next_sequence,
            text: text.into(),
            level,
        });
        self.next_sequence += 1;
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.push(text, MessageLevel::Info);
    }

    /// Newest first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter().rev().take(limit)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<&MessageEntry> {
        self.entries.back()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_oldest_beyond_capacity() {
        let mut log = MessageLog::new(2);
        log.info("one");
        log.info("two");
        log.push("three", MessageLevel::Warning);

        let texts: Vec<_> = log.recent(10).map(|entry| entry.text.as_str()).collect();
        assert_eq!(texts, vec!["three", "two"]);
        assert_eq!(log.latest().map(|entry| entry.sequence), Some(3));
    }

    #[test]
    fn zero_capacity_keeps_one_entry() {
        let mut log = MessageLog::new(0);
        log.info("a");
        log.info("b");
        assert_eq!(log.len(), 1);
    }
}
