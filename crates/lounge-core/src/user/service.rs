//! User service for retrieving the current user's profile.
//!
//! There is exactly one user per process; this trait exists so the shell can
//! source the nickname from configuration while tests use a constant.

use super::model::UserProfile;

/// Service for retrieving user information.
pub trait UserService: Send + Sync {
    /// Returns the current user's display name.
    fn get_user_name(&self) -> String {
        self.get_user_profile().nickname
    }

    /// Returns the complete user profile.
    fn get_user_profile(&self) -> UserProfile;
}

/// Default implementation that returns a constant profile.
///
/// Suitable for tests and for running without a configuration file.
#[derive(Debug, Clone, Default)]
pub struct DefaultUserService;

impl UserService for DefaultUserService {
    fn get_user_profile(&self) -> UserProfile {
        UserProfile::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_service_returns_default_profile() {
        let service = DefaultUserService;
        assert_eq!(service.get_user_name(), "You");
        assert_eq!(service.get_user_profile().avatar, "🎯");
    }
}
