//! The ordered list of entries shown for the current session.

use crate::{Message, Role};

/// One transcript row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    Message(Message),
    /// Error-styled row; never sent to the backend.
    Error(String),
}

impl Entry {
    pub fn user(text: impl Into<String>) -> Self {
        Self::Message(Message::user(text))
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::Message(Message::assistant(text))
    }

    pub fn role(&self) -> Option<Role> {
        match self {
            Self::Message(m) => Some(m.role),
            Self::Error(_) => None,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Message(m) => &m.text,
            Self::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Append-only between resets; insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    entries: Vec<Entry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Swap in a backend-supplied transcript.
    pub fn replace(&mut self, messages: Vec<Message>) {
        self.entries = messages.into_iter().map(Entry::Message).collect();
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&Entry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_error()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_preserves_order() {
        let mut t = Transcript::new();
        t.push(Entry::user("a"));
        t.push(Entry::assistant("b"));
        t.push(Entry::Error("c".into()));
        let texts: Vec<_> = t.entries().iter().map(Entry::text).collect();
        assert_eq!(texts, ["a", "b", "c"]);
        assert_eq!(t.error_count(), 1);
    }

    #[test]
    fn replace_drops_local_entries() {
        let mut t = Transcript::new();
        t.push(Entry::user("local"));
        t.push(Entry::Error("oops".into()));
        t.replace(vec![Message::user("q"), Message::assistant("a")]);
        assert_eq!(t.len(), 2);
        assert_eq!(t.error_count(), 0);
        assert_eq!(t.last().and_then(Entry::role), Some(Role::Assistant));
    }

    #[test]
    fn clear_empties() {
        let mut t = Transcript::new();
        t.push(Entry::user("a"));
        t.clear();
        assert!(t.is_empty());
    }
}
