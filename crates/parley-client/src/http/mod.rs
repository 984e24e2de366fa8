//! JSON exchange over HTTP.
//!
//! Implements `ExchangeTransport` by POSTing `{message, thread_id}` style
//! bodies to the chat endpoint. Field names and the reply shape come from
//! `WireFormat`.

mod api;
mod client;
mod config;


pub use client::HttpTransport;
pub use config::{ReplyShape, WireFormat};
