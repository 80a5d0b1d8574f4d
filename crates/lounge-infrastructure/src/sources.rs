//! Production implementations of the id, clock, and avatar seams.

use lounge_core::clock::Clock;
use lounge_core::ids::{AvatarPicker, IdSource};
use rand::Rng;
use uuid::Uuid;

/// Generates UUID v4 identifiers.
#[derive(Debug, Clone, Default)]
pub struct UuidIdSource;

impl IdSource for UuidIdSource {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// RFC 3339 timestamps from the system clock.
#[derive(Debug, Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_rfc3339(&self) -> String {
        chrono::Utc::now().to_rfc3339()
    }
}

/// Uniform random pick from the avatar pool.
#[derive(Debug, Clone, Default)]
pub struct RandomAvatarPicker;

impl AvatarPicker for RandomAvatarPicker {
    fn pick(&self, pool: &[&str]) -> String {
        let index = rand::thread_rng().gen_range(0..pool.len());
        pool[index].to_string()
    }
}
