//! Ledge Runner - An endless side-scrolling platformer
//!
//! Core modules:
//! - `sim`: Simulation (body physics, collisions, world generation, tick loop)
//! - `tuning`: Data-driven game balance
//! - `highscores`: In-memory leaderboard for the process lifetime
//! - `snapshot`: Read-only view handed to the presentation layer

pub mod error;
pub mod highscores;
pub mod sim;
pub mod snapshot;
pub mod tuning;

pub use error::ConfigError;
pub use highscores::HighScores;
pub use snapshot::{RectInstance, Snapshot};
pub use tuning::{Bounds, Tuning};

/// Game configuration constants
///
/// These are the defaults `Tuning::default()` is built from.
pub mod consts {
    /// Nominal simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the stepper will account for (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Viewport dimensions
    pub const VIEWPORT_WIDTH: f32 = 980.0;
    pub const VIEWPORT_HEIGHT: f32 = 560.0;

    /// Body movement
    pub const GRAVITY: f32 = 2000.0;
    pub const PLAYER_SPEED: f32 = 280.0;
    pub const PLAYER_ACCEL: f32 = 2000.0;
    pub const PLAYER_JUMP_VELOCITY: f32 = 750.0;
    pub const MAX_FALL_SPEED: f32 = 2000.0;
    pub const PLAYER_WIDTH: f32 = 36.0;
    pub const PLAYER_HEIGHT: f32 = 52.0;
    pub const SPAWN_X: f32 = 120.0;
    pub const SPAWN_Y: f32 = VIEWPORT_HEIGHT - 180.0;

    /// Ground platform under the spawn point
    pub const GROUND_X: f32 = -1000.0;
    pub const GROUND_Y: f32 = VIEWPORT_HEIGHT - 40.0;
    pub const GROUND_WIDTH: f32 = 1500.0;
    pub const GROUND_HEIGHT: f32 = 80.0;

    /// Generated platforms
    pub const PLATFORM_HEIGHT: f32 = 20.0;
    pub const PLATFORM_MIN_WIDTH: f32 = 60.0;
    pub const PLATFORM_MAX_WIDTH: f32 = 300.0;
    pub const PLATFORM_MIN_GAP: f32 = 60.0;
    pub const PLATFORM_MAX_GAP: f32 = 120.0;
    pub const PLATFORM_MIN_Y: f32 = 120.0;
    pub const PLATFORM_MAX_Y: f32 = VIEWPORT_HEIGHT - 60.0;
    pub const PLATFORM_MAX_STEP: f32 = 120.0;
    /// Previous-platform height assumed when the world is empty
    pub const FALLBACK_LAST_Y: f32 = VIEWPORT_HEIGHT - 200.0;

    /// Generation window
    pub const GEN_AHEAD: f32 = VIEWPORT_WIDTH * 2.0;
    pub const CLEANUP_BEHIND: f32 = 600.0;

    /// Temporary platforms
    pub const TEMP_PLATFORM_CHANCE: f64 = 0.15;
    pub const TEMP_PLATFORM_LIFETIME: f32 = 5.0;
    /// Decay timer is pre-loaded with this much time when a platform spawns
    pub const TEMP_PLATFORM_TIMER_START: f32 = 2.0;

    /// Round end
    pub const DEATH_Y: f32 = VIEWPORT_HEIGHT + 400.0;
    /// Where a side collision parks the body (well past `DEATH_Y`)
    pub const LATERAL_DEATH_Y: f32 = VIEWPORT_HEIGHT + 1000.0;

    /// Camera
    pub const CAMERA_LEAD: f32 = 0.3;
    pub const CAMERA_SMOOTH_RATE: f32 = 8.0;

    /// Score: one point per this many units travelled
    pub const SCORE_UNIT: f32 = 10.0;
}

/// Mix a run seed with a round index into a new seed
#[inline]
pub fn round_seed(seed: u64, round: u32) -> u64 {
    (round as u64).wrapping_mul(2654435761).wrapping_add(seed)
}

/// Move `current` toward `target` by at most `max_delta`, never past it
#[inline]
pub fn approach(current: f32, target: f32, max_delta: f32) -> f32 {
    if current < target {
        (current + max_delta).min(target)
    } else if current > target {
        (current - max_delta).max(target)
    } else {
        current
    }
}
