//! promptrun: send one prompt to a model through a local proxy
//! and print the reply.
//!
//! The whole run is configure → call → report. Every failure is
//! caught at [`client::PromptRunner::execute`] and printed as a
//! single `Error: ...` line.

pub mod error;
pub mod config;
pub mod providers;
pub mod request;
pub mod client;

pub use client::{format_outcome, Outcome, PromptRunner, PROGRESS_LINE};
pub use config::RunnerConfig;
pub use error::Error;
pub use request::{ChatMessage, ContentBlock, MessagesRequest, MessagesResponse, Role};
