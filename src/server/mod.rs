//! Listening socket and per-connection task dispatch.

pub mod listener;

pub use listener::{Server, ServerHandle};
