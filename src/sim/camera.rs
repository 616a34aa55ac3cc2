//! Horizontal follow camera

use serde::{Deserialize, Serialize};

/// Scrolling x offset that eases toward a target
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Camera {
    pub x: f32,
}

impl Camera {
    pub fn new(x: f32) -> Self {
        Self { x }
    }

    /// Exponential smoothing toward `target`; a blend factor of 1 snaps
    pub fn follow(&mut self, target: f32, dt: f32, rate: f32) {
        let blend = (rate * dt).min(1.0);
        self.x += (target - self.x) * blend;
    }
}
