//! Session client struct, session-id bookkeeping and reset.

use std::cell::{Cell, Ref, RefCell};

use parley_common::SessionId;
use tracing::{debug, info, warn};

use crate::store::{SessionStore, StoreError};
use crate::transcript::{Entry, Transcript};
use crate::view::TranscriptView;
use crate::ExchangeTransport;

/// Default key the session id is stored under.
pub const DEFAULT_STORAGE_KEY: &str = "thread_id";

/// One conversation as seen from the client.
///
/// All state lives behind `Cell`/`RefCell` so `submit` takes `&self` and
/// several submissions can be awaited at once on a single task. No borrow
/// is ever held across an `.await`.
pub struct ConversationSessionClient<T, S, V> {
    pub(super) transport: T,
    pub(super) store: S,
    pub(super) storage_key: String,
    pub(super) transcript: RefCell<Transcript>,
    pub(super) view: RefCell<V>,
    pub(super) in_flight: Cell<usize>,
    /// Adopted id the store refused to persist.
    pub(super) unsaved: RefCell<Option<SessionId>>,
}

impl<T, S, V> ConversationSessionClient<T, S, V>
where
    T: ExchangeTransport,
    S: SessionStore,
    V: TranscriptView,
{
    pub fn new(transport: T, store: S, view: V) -> Self {
        Self {
            transport,
            store,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            transcript: RefCell::new(Transcript::new()),
            view: RefCell::new(view),
            in_flight: Cell::new(0),
            unsaved: RefCell::new(None),
        }
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    /// Forget the held session id and the transcript.
    ///
    /// Called once at startup so an id from a previous run never leaks
    /// into this one.
    pub fn reset(&self) -> Result<(), StoreError> {
        self.transcript.borrow_mut().clear();
        self.view.borrow_mut().clear();
        self.unsaved.borrow_mut().take();
        self.store.clear(&self.storage_key)?;
        debug!(key = %self.storage_key, "session reset");
        Ok(())
    }

    /// The session id currently held, if any.
    ///
    /// Falls back to the in-memory copy when the store could not keep it.
    pub fn session_id(&self) -> Option<SessionId> {
        let stored = match self.store.get(&self.storage_key) {
            Ok(Some(raw)) => match SessionId::parse(raw) {
                Ok(id) => Some(id),
                Err(e) => {
                    warn!("ignoring stored session id: {e}");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!("failed to read session id: {e}");
                None
            }
        };
        stored.or_else(|| self.unsaved.borrow().clone())
    }

    /// Snapshot of the transcript.
    pub fn transcript(&self) -> Transcript {
        self.transcript.borrow().clone()
    }

    /// Number of exchanges awaiting a reply.
    pub fn in_flight(&self) -> usize {
        self.in_flight.get()
    }

    pub fn view(&self) -> Ref<'_, V> {
        self.view.borrow()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Store `offered` unless an id is already held. Held ids are never replaced.
    ///
    /// If the store rejects the write the id is kept in memory, so the rest of
    /// this run still continues the backend thread.
    pub(super) fn adopt_session_id(&self, offered: Option<SessionId>) {
        let Some(offered) = offered else {
            return;
        };
        if let Some(held) = self.session_id() {
            if held != offered {
                warn!(held = %held, offered = %offered, "backend sent a different session id, keeping the held one");
            }
            return;
        }
        match self.store.set(&self.storage_key, offered.as_str()) {
            Ok(()) => info!(session = %offered, "session established"),
            Err(e) => {
                warn!(session = %offered, "failed to store session id, holding it in memory: {e}");
                *self.unsaved.borrow_mut() = Some(offered);
            }
        }
    }

    pub(super) fn append(&self, entry: Entry) {
        self.view.borrow_mut().render(&entry);
        self.transcript.borrow_mut().push(entry);
    }
}
