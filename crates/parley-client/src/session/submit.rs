//! Async submit for ConversationSessionClient.

use tracing::{debug, warn};

use crate::store::SessionStore;
use crate::transcript::Entry;
use crate::view::TranscriptView;
use crate::{ExchangeRequest, ExchangeTransport, Reply};

use super::client::ConversationSessionClient;
use super::types::{InFlightGuard, Submission, ERROR_TEXT};

impl<T, S, V> ConversationSessionClient<T, S, V>
where
    T: ExchangeTransport,
    S: SessionStore,
    V: TranscriptView,
{
    /// Send one user message.
    ///
    /// The user entry is rendered before anything is awaited. On success the
    /// reply is rendered and a first session id is stored; on failure exactly
    /// one error entry is rendered and the session is left alone. Nothing is
    /// retried.
    pub async fn submit(&self, text: &str) -> Submission {
        let Some(request) = ExchangeRequest::new(text, self.session_id()) else {
            debug!("ignoring blank submission");
            return Submission::Ignored;
        };

        self.append(Entry::user(request.message.clone()));

        let outcome = {
            let _guard = InFlightGuard::enter(&self.in_flight, &self.view);
            self.transport.exchange(&request).await
        };

        match outcome {
            Ok(response) => {
                self.adopt_session_id(response.session_id);
                match response.reply {
                    Reply::Text(text) => self.append(Entry::assistant(text)),
                    Reply::Transcript(messages) => {
                        let mut transcript = self.transcript.borrow_mut();
                        transcript.replace(messages);
                        self.view.borrow_mut().replace(transcript.entries());
                    }
                }
                Submission::Replied
            }
            Err(e) => {
                warn!(error = %e, "exchange failed");
                self.append(Entry::Error(ERROR_TEXT.to_string()));
                Submission::Failed(e)
            }
        }
    }
}
