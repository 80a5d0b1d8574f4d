//! Infrastructure layer for Lounge: the static catalog, production id/clock/
//! avatar sources, the simulated capture device, and configuration loading.

pub mod capture;
pub mod config;
pub mod paths;
pub mod sources;
pub mod static_catalog;

pub use capture::SimulatedCapture;
pub use config::{ConfigBasedUserService, ConfigService, ShellConfig};
pub use sources::{RandomAvatarPicker, SystemClock, UuidIdSource};
pub use static_catalog::StaticCatalog;
