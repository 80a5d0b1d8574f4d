//! Configuration service implementation.
//!
//! Loads the shell configuration from `~/.config/lounge/config.toml`. A
//! missing file yields the defaults; a malformed file is a serialization
//! error surfaced to the caller.

use lounge_core::error::Result;
use lounge_core::user::{UserProfile, UserService};
use crate::paths::LoungePaths;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// `[user]` section of config.toml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSection {
    pub nickname: String,
    pub avatar: String,
}

impl Default for UserSection {
    fn default() -> Self {
        let profile = UserProfile::default();
        Self {
            nickname: profile.nickname,
            avatar: profile.avatar,
        }
    }
}

/// `[shell]` section of config.toml.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellSection {
    /// Splash screen duration in milliseconds
    pub splash_ms: u64,
    /// Skip the splash screen entirely
    pub skip_splash: bool,
    /// Default tracing filter, overridable by `--log-filter` and `LOUNGE_LOG`
    pub log_filter: String,
}

impl Default for ShellSection {
    fn default() -> Self {
        Self {
            splash_ms: 2000,
            skip_splash: false,
            log_filter: "info".to_string(),
        }
    }
}

/// Root configuration for the shell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub user: UserSection,
    pub shell: ShellSection,
}

/// Configuration service that loads and caches the shell configuration.
///
/// The file is read once on first access and cached; `invalidate_cache`
/// forces a reload.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: Option<PathBuf>,
    /// Cached configuration loaded from file.
    /// Uses RwLock for thread-safe lazy loading.
    config: Arc<RwLock<Option<ShellConfig>>>,
}

impl ConfigService {
    /// Creates a ConfigService reading from the default location.
    pub fn new() -> Self {
        Self {
            path: None,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Creates a ConfigService reading from a custom path.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            path: Some(path),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the configuration, loading from file if not cached.
    ///
    /// A missing file yields `ShellConfig::default()`; a malformed file is
    /// an error.
    pub fn get_config(&self) -> Result<ShellConfig> {
        {
            let read_lock = self.config.read().unwrap();
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let loaded = self.load_config()?;

        {
            let mut write_lock = self.config.write().unwrap();
            *write_lock = Some(loaded.clone());
        }

        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap();
        *write_lock = None;
    }

    fn load_config(&self) -> Result<ShellConfig> {
        let path = match &self.path {
            Some(path) => path.clone(),
            None => match LoungePaths::config_file() {
                Ok(path) => path,
                Err(_) => {
                    tracing::warn!("config dir unavailable, using defaults");
                    return Ok(ShellConfig::default());
                }
            },
        };

        if !path.exists() {
            return Ok(ShellConfig::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

/// UserService backed by the configuration file.
#[derive(Debug, Clone)]
pub struct ConfigBasedUserService {
    config: ConfigService,
}

impl ConfigBasedUserService {
    pub fn new(config: ConfigService) -> Self {
        Self { config }
    }
}

impl UserService for ConfigBasedUserService {
    fn get_user_profile(&self) -> UserProfile {
        let config = self.config.get_config().unwrap_or_default();
        UserProfile {
            nickname: config.user.nickname,
            avatar: config.user.avatar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = ConfigService::with_path(dir.path().join("config.toml"));
        let config = service.get_config().unwrap();
        assert_eq!(config, ShellConfig::default());
        assert_eq!(config.shell.splash_ms, 2000);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "[user]\nnickname = \"Ravi\"").unwrap();

        let service = ConfigService::with_path(path);
        let config = service.get_config().unwrap();
        assert_eq!(config.user.nickname, "Ravi");
        assert_eq!(config.user.avatar, "🎯");
        assert!(!config.shell.skip_splash);
    }

    #[test]
    fn malformed_file_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[shell\nsplash_ms = what").unwrap();

        let service = ConfigService::with_path(path);
        let err = service.get_config().unwrap_err();
        assert!(err.is_serialization());
    }

    #[test]
    fn cache_survives_file_change_until_invalidated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[user]\nnickname = \"Ravi\"\n").unwrap();

        let service = ConfigService::with_path(path.clone());
        assert_eq!(service.get_config().unwrap().user.nickname, "Ravi");

        std::fs::write(&path, "[user]\nnickname = \"Asha\"\n").unwrap();
        assert_eq!(service.get_config().unwrap().user.nickname, "Ravi");

        service.invalidate_cache();
        assert_eq!(service.get_config().unwrap().user.nickname, "Asha");
    }

    #[test]
    fn user_service_reads_profile_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[user]\nnickname = \"Asha\"\navatar = \"🎬\"\n").unwrap();

        let service = ConfigBasedUserService::new(ConfigService::with_path(path));
        let profile = service.get_user_profile();
        assert_eq!(profile.nickname, "Asha");
        assert_eq!(profile.avatar, "🎬");
    }
}
