//! Model API clients

pub mod anthropic;

pub use anthropic::MessagesClient;
