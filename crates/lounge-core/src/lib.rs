//! Domain layer for Lounge: catalog models, personal collections, the page
//! router, watch-party room types, and the trait seams the rest of the
//! application is wired through.

pub mod catalog;
pub mod clock;
pub mod error;
pub mod ids;
pub mod library;
pub mod media;
pub mod nav;
pub mod room;
pub mod user;

// Re-export common error type
pub use error::LoungeError;
