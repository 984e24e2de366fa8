//! Conversation session management.
//!
//! A `ConversationSessionClient` owns the transcript and the held session id
//! for one conversation, echoes user input before the network answers, and
//! turns every transport failure into a single error entry.

mod client;
mod submit;
mod types;


pub use client::{ConversationSessionClient, DEFAULT_STORAGE_KEY};
pub use types::{Submission, ERROR_TEXT};
