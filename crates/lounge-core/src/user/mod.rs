//! User domain module.

mod model;
mod service;

pub use model::UserProfile;
pub use service::{DefaultUserService, UserService};
