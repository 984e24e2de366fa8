//! Plain terminal rendering of the transcript.

use std::io::Write;

use parley_client::{Entry, Role, TranscriptView};

/// Writes transcript rows as `who> text` lines.
pub struct TerminalView<W: Write> {
    out: W,
    typing: bool,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self { out, typing: false }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) {
        // A closed stdout is not worth crashing over.
        let _ = writeln!(self.out, "{text}");
        let _ = self.out.flush();
    }
}

fn label(entry: &Entry) -> &'static str {
    match entry.role() {
        Some(Role::User) => "you",
        Some(Role::Assistant) => "assistant",
        None => "error",
    }
}

impl<W: Write> TranscriptView for TerminalView<W> {
    fn render(&mut self, entry: &Entry) {
        let text = format!("{}> {}", label(entry), entry.text());
        self.line(&text);
    }

    fn replace(&mut self, entries: &[Entry]) {
        self.line("--- transcript ---");
        for entry in entries {
            self.render(entry);
        }
    }

    fn pending(&mut self, in_flight: usize) {
        let typing = in_flight > 0;
        if typing && !self.typing {
            self.line("assistant is typing...");
        }
        self.typing = typing;
    }

    fn clear(&mut self) {
        self.line("--- new conversation ---");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(f: impl FnOnce(&mut TerminalView<Vec<u8>>)) -> String {
        let mut view = TerminalView::new(Vec::new());
        f(&mut view);
        String::from_utf8(view.into_inner()).unwrap()
    }

    #[test]
    fn labels_each_role() {
        let out = rendered(|v| {
            v.render(&Entry::user("hello"));
            v.render(&Entry::assistant("hi there"));
            v.render(&Entry::Error("An error occurred. Please try again.".into()));
        });
        assert_eq!(
            out,
            "you> hello\nassistant> hi there\nerror> An error occurred. Please try again.\n"
        );
    }

    #[test]
    fn typing_indicator_shows_once_per_busy_period() {
        let out = rendered(|v| {
            v.pending(1);
            v.pending(2);
            v.pending(1);
            v.pending(0);
            v.pending(1);
        });
        assert_eq!(out.matches("typing").count(), 2);
    }
}
