//! The player-controlled body

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::approach;
use crate::tuning::Tuning;

/// How far above and below its box the body counts as touching a surface
pub const CONTACT_SKIN: f32 = 1.0;

/// Player body: a box with velocity, integrated under gravity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Top-left corner
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    /// Set by the vertical collision pass when landing
    pub on_ground: bool,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            size,
            on_ground: false,
        }
    }

    /// Body at the configured spawn point, at rest
    pub fn spawn(tuning: &Tuning) -> Self {
        Self::new(
            Vec2::new(tuning.spawn_x, tuning.spawn_y),
            Vec2::new(tuning.player_width, tuning.player_height),
        )
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Box used to decide which platforms the body is touching
    ///
    /// Resting on a platform leaves the body edge-to-edge with it, which the
    /// strict overlap test does not count, so the box is grown vertically.
    pub fn contact_rect(&self) -> Rect {
        Rect {
            pos: self.pos - Vec2::new(0.0, CONTACT_SKIN),
            size: self.size + Vec2::new(0.0, 2.0 * CONTACT_SKIN),
        }
    }

    /// Steer horizontal velocity toward the input target at bounded acceleration
    ///
    /// Left and right held together cancel to a zero target.
    pub fn apply_input(&mut self, move_left: bool, move_right: bool, dt: f32, tuning: &Tuning) {
        let mut target_vx = 0.0;
        if move_left {
            target_vx -= tuning.player_speed;
        }
        if move_right {
            target_vx += tuning.player_speed;
        }
        self.vel.x = approach(self.vel.x, target_vx, tuning.player_accel * dt);
    }

    /// Start a jump if standing on something. Returns whether the jump happened.
    pub fn jump(&mut self, tuning: &Tuning) -> bool {
        if !self.on_ground {
            return false;
        }
        self.vel.y = -tuning.jump_velocity;
        self.on_ground = false;
        true
    }

    /// Apply gravity (capped at max fall speed) and move by velocity
    pub fn integrate(&mut self, dt: f32, tuning: &Tuning) {
        self.vel.y = (self.vel.y + tuning.gravity * dt).min(tuning.max_fall_speed);
        self.pos += self.vel * dt;
    }
}
