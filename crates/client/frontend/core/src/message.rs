//! Shared message log primitives for CLI and future UIs.
use std::collections::VecDeque;

/// Display style of a message.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageLevel {
    Info,
    /// Combat narration aimed at the player's foes.
    Attack,
    /// Narration of harm done to the player.
    Danger,
    /// An action could not be carried out.
    Impossible,
    Warning,
}

/// Snapshot of a single message entry.
///
/// Consecutive identical messages stack into one entry with a repeat count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageEntry {
    pub text: String,
    pub level: MessageLevel,
    pub count: u32,
}

impl MessageEntry {
    pub fn new(text: impl Into<String>, level: MessageLevel) -> Self {
        Self {
            text: text.into(),
            level,
            count: 1,
        }
    }

    /// Text as shown to the player, with a repeat suffix when stacked.
    pub fn full_text(&self) -> String {
        if self.count > 1 {
            format!("{} (x{})", self.text, self.count)
        } else {
            self.text.clone()
        }
    }

    /// Wraps [`Self::full_text`] to `width` columns.
    pub fn wrapped(&self, width: usize) -> Vec<String> {
        textwrap::wrap(&self.full_text(), width.max(1))
            .into_iter()
            .map(|line| line.into_owned())
            .collect()
    }
}

/// Bounded buffer of messages displayed to the player, oldest first.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<MessageEntry>,
    capacity: usize,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let bounded_capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(bounded_capacity),
            capacity: bounded_capacity,
        }
    }

    /// Appends a message, stacking it onto the newest entry when text and level match.
    pub fn add_message(&mut self, text: impl Into<String>, level: MessageLevel) {
        let text = text.into();
        if let Some(last) = self.entries.back_mut() {
            if last.text == text && last.level == level {
                last.count += 1;
                return;
            }
        }
        self.push(MessageEntry::new(text, level));
    }

    pub fn push(&mut self, entry: MessageEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn push_text(&mut self, message: impl Into<String>) {
        self.add_message(message, MessageLevel::Info);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&MessageEntry> {
        self.entries.get(index)
    }

    /// Newest first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter().rev().take(limit)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &MessageEntry> {
        self.entries.iter()
    }

    /// Entries `0..=last`, oldest first. Empty when `last` is `None`.
    pub fn up_to(&self, last: Option<usize>) -> impl DoubleEndedIterator<Item = &MessageEntry> {
        let end = last.map_or(0, |index| (index + 1).min(self.entries.len()));
        self.entries.range(..end)
    }
}
