//! Output payloads shared by command handlers.

pub mod output;
