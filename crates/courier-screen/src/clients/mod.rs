//! Typed clients for the actors in this crate.

pub mod screen_client;

pub use screen_client::*;
