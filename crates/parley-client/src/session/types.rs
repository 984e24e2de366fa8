//! Submission outcomes and the in-flight counter guard.

use std::cell::{Cell, RefCell};

use crate::view::TranscriptView;
use crate::ExchangeError;

/// Text of the error entry appended when an exchange fails.
pub const ERROR_TEXT: &str = "An error occurred. Please try again.";

/// What a call to `submit` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Input was blank; nothing was sent or rendered.
    Ignored,
    /// The backend answered and the reply was rendered.
    Replied,
    /// The exchange failed and an error entry was rendered.
    Failed(ExchangeError),
}

/// Counts an exchange as in flight for as long as it lives, notifying the
/// view on entry and on drop so the typing indicator is never left on.
pub(crate) struct InFlightGuard<'a, V: TranscriptView> {
    count: &'a Cell<usize>,
    view: &'a RefCell<V>,
}

impl<'a, V: TranscriptView> InFlightGuard<'a, V> {
    pub(crate) fn enter(count: &'a Cell<usize>, view: &'a RefCell<V>) -> Self {
        let n = count.get() + 1;
        count.set(n);
        if let Ok(mut view) = view.try_borrow_mut() {
            view.pending(n);
        }
        Self { count, view }
    }
}

impl<V: TranscriptView> Drop for InFlightGuard<'_, V> {
    fn drop(&mut self) {
        let n = self.count.get().saturating_sub(1);
        self.count.set(n);
        if let Ok(mut view) = self.view.try_borrow_mut() {
            view.pending(n);
        }
    }
}
