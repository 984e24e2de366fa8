//! Rendering seam between the session client and whatever displays it.

use crate::transcript::Entry;

/// Receives transcript updates as they happen.
///
/// Only `render` is required; the rest default to no-ops so simple views
/// stay small.
pub trait TranscriptView {
    /// A single entry was appended.
    fn render(&mut self, entry: &Entry);

    /// The whole transcript was swapped for a backend-supplied one.
    fn replace(&mut self, entries: &[Entry]) {
        for entry in entries {
            self.render(entry);
        }
    }

    /// Number of exchanges awaiting a reply changed. Drives a typing indicator.
    fn pending(&mut self, _in_flight: usize) {}

    /// The session was reset.
    fn clear(&mut self) {}
}

/// Headless view.
impl TranscriptView for () {
    fn render(&mut self, _entry: &Entry) {}
}
