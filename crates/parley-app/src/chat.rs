//! Interactive chat loop.
//!
//! Reads lines from stdin and submits each one without waiting for earlier
//! replies, so several exchanges can be in flight at once. Replies are
//! rendered in the order they arrive.

use futures_util::stream::{FuturesUnordered, StreamExt};
use parley_client::{
    ConversationSessionClient, ExchangeTransport, SessionStore, Submission, TranscriptView,
};
use parley_common::ParleyError;
use tokio::io::{self as io, AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info, warn};

/// One line of user input, interpreted.
#[derive(Debug, PartialEq, Eq)]
pub enum Input<'a> {
    Say(&'a str),
    Reset,
    Quit,
}

impl<'a> Input<'a> {
    pub fn parse(line: &'a str) -> Self {
        match line.trim() {
            "/quit" | "/exit" => Input::Quit,
            "/reset" => Input::Reset,
            _ => Input::Say(line),
        }
    }
}

/// Drive `client` from `input` until EOF, `/quit` or a read failure, then
/// wait for outstanding replies.
pub async fn run<T, S, V, R>(
    client: &ConversationSessionClient<T, S, V>,
    input: R,
) -> Result<(), ParleyError>
where
    T: ExchangeTransport,
    S: SessionStore,
    V: TranscriptView,
    R: AsyncBufRead + Unpin,
{
    let submit = move |text: String| async move { client.submit(&text).await };
    let mut in_flight = FuturesUnordered::new();
    let mut lines = input.lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let line = match line {
                    Ok(Some(line)) => line,
                    Ok(None) => {
                        debug!("input closed");
                        break;
                    }
                    // The undecodable line has been consumed; keep reading.
                    Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                        warn!("skipping unreadable input line: {e}");
                        continue;
                    }
                    Err(e) => {
                        warn!("input failed, finishing outstanding replies: {e}");
                        break;
                    }
                };
                match Input::parse(&line) {
                    Input::Quit => break,
                    Input::Reset => {
                        client
                            .reset()
                            .map_err(|e| ParleyError::Store(e.to_string()))?;
                        info!("conversation reset");
                    }
                    Input::Say(text) => in_flight.push(submit(text.to_string())),
                }
            }
            Some(outcome) = in_flight.next(), if !in_flight.is_empty() => {
                log_outcome(&outcome);
            }
        }
    }

    while let Some(outcome) = in_flight.next().await {
        log_outcome(&outcome);
    }
    Ok(())
}

fn log_outcome(outcome: &Submission) {
    match outcome {
        Submission::Failed(e) => warn!("message not delivered: {e}"),
        Submission::Replied => debug!("reply rendered"),
        Submission::Ignored => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use parley_client::{
        Entry, ExchangeError, ExchangeRequest, ExchangeResponse, MemoryStore, Reply,
    };
    use parley_common::SessionId;
    use std::sync::Mutex;

    #[test]
    fn parses_commands() {
        assert_eq!(Input::parse("/quit"), Input::Quit);
        assert_eq!(Input::parse("  /exit "), Input::Quit);
        assert_eq!(Input::parse("/reset"), Input::Reset);
        assert_eq!(Input::parse("hello"), Input::Say("hello"));
    }

    /// Echoes the message back and hands out one session id.
    #[derive(Default)]
    struct EchoTransport {
        sent: Mutex<Vec<ExchangeRequest>>,
    }

    #[async_trait]
    impl ExchangeTransport for EchoTransport {
        async fn exchange(
            &self,
            request: &ExchangeRequest,
        ) -> Result<ExchangeResponse, ExchangeError> {
            self.sent.lock().unwrap().push(request.clone());
            Ok(ExchangeResponse {
                session_id: SessionId::parse("abc").ok(),
                reply: Reply::Text(format!("echo: {}", request.message)),
            })
        }
    }

    #[tokio::test]
    async fn runs_until_eof_and_drains_replies() {
        let client =
            ConversationSessionClient::new(EchoTransport::default(), MemoryStore::new(), ());
        let input: &[u8] = b"hello\n\n   \nhow are you\n";

        run(&client, input).await.unwrap();

        let transcript = client.transcript();
        let texts: Vec<_> = transcript.entries().iter().map(Entry::text).collect();
        assert_eq!(texts.len(), 4);
        assert!(texts.contains(&"echo: hello"));
        assert!(texts.contains(&"echo: how are you"));
        assert_eq!(client.session_id().unwrap().as_str(), "abc");
    }

    /// Takes a few scheduler turns before echoing, so replies are still
    /// outstanding when input runs out.
    #[derive(Default)]
    struct SlowTransport {
        inner: EchoTransport,
    }

    #[async_trait]
    impl ExchangeTransport for SlowTransport {
        async fn exchange(
            &self,
            request: &ExchangeRequest,
        ) -> Result<ExchangeResponse, ExchangeError> {
            for _ in 0..20 {
                tokio::task::yield_now().await;
            }
            self.inner.exchange(request).await
        }
    }

    #[tokio::test]
    async fn undecodable_line_does_not_drop_pending_replies() {
        let client =
            ConversationSessionClient::new(SlowTransport::default(), MemoryStore::new(), ());
        let input: &[u8] = b"hello\n\xff\xfe\nafter\n";

        run(&client, input).await.unwrap();

        let transcript = client.transcript();
        let entries = transcript.entries();
        assert!(entries.contains(&Entry::user("hello")));
        assert!(entries.contains(&Entry::assistant("echo: hello")));
        let users = entries
            .iter()
            .filter(|e| e.role() == Some(parley_client::Role::User))
            .count();
        let answers = entries.len() - users;
        assert_eq!(users, answers);
        assert_eq!(client.in_flight(), 0);
    }

    #[tokio::test]
    async fn quit_stops_reading() {
        let client =
            ConversationSessionClient::new(EchoTransport::default(), MemoryStore::new(), ());
        let input: &[u8] = b"/quit\nnever sent\n";

        run(&client, input).await.unwrap();
        assert!(client.transcript().is_empty());
    }

    #[tokio::test]
    async fn reset_command_clears_session() {
        let client =
            ConversationSessionClient::new(EchoTransport::default(), MemoryStore::new(), ());
        let input: &[u8] = b"hello\n";
        run(&client, input).await.unwrap();
        assert!(client.session_id().is_some());

        let input: &[u8] = b"/reset\n";
        run(&client, input).await.unwrap();
        assert!(client.session_id().is_none());
        assert!(client.transcript().is_empty());
    }
}
