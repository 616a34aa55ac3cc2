//! Simulation module
//!
//! All gameplay logic lives here. This module must stay deterministic:
//! - Seeded RNG only (one per round, derived from the session seed)
//! - Stable iteration order (platforms in generation order)
//! - No rendering, input-device or platform dependencies

pub mod autopilot;
pub mod body;
pub mod camera;
pub mod collision;
pub mod platform;
pub mod rect;
pub mod state;
pub mod stepper;
pub mod tick;
pub mod world;

pub use autopilot::Autopilot;
pub use body::Body;
pub use camera::Camera;
pub use collision::{CollisionResult, resolve_collisions};
pub use platform::Platform;
pub use rect::Rect;
pub use state::{GameEvent, GamePhase, GameState};
pub use stepper::Stepper;
pub use tick::{TickInput, tick};
pub use world::{LifecycleReport, World};
