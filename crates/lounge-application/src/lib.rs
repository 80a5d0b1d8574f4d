//! Application layer for Lounge: the session state store and the
//! watch-party controller layered on top of it.

pub mod store;
mod store_test;
pub mod watch_party;

pub use store::{SessionState, SessionStore};
pub use watch_party::WatchParty;
