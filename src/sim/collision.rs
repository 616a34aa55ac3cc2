//! Axis-separated collision resolution between the body and platforms
//!
//! Vertical motion is resolved first (landing / ceiling bump), then the
//! horizontal step is swept. Touching a platform from the side is fatal:
//! there is no wall sliding or push-back.

use glam::Vec2;

use super::body::Body;
use super::platform::Platform;
use crate::tuning::Tuning;

/// Vertical slack ignored by the side-hit box, so a body resting exactly on
/// a platform top is not read as running into it after float rounding.
pub const SIDE_HIT_SKIN: f32 = 1e-3;

/// What happened during one resolution step
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionResult {
    /// Id of the platform the body came to rest on (last one wins)
    pub landed_on: Option<u32>,
    /// Id of the platform the body hit its head on (last one wins)
    pub bumped: Option<u32>,
    /// Id of the first platform hit from the side
    pub side_hit: Option<u32>,
}

impl CollisionResult {
    pub fn lateral_death(&self) -> bool {
        self.side_hit.is_some()
    }
}

/// Resolve one tick of body motion against `platforms` in stored order
///
/// Vertical pass: the body box is swept `vel.y * dt` ahead. Every overlapping
/// platform snaps the box against itself (top edge when falling, bottom edge
/// when rising) and zeroes `vel.y`. The direction is taken from `vel.y` at the
/// start of the pass, so when several platforms overlap the last one in
/// iteration order determines the final position.
///
/// Horizontal pass: the box is swept `vel.x * dt` ahead. Any overlap parks
/// the body at `lateral_death_y`; `vel.x` is left as is.
pub fn resolve_collisions(
    body: &mut Body,
    platforms: &[Platform],
    dt: f32,
    tuning: &Tuning,
) -> CollisionResult {
    let mut result = CollisionResult::default();

    // Vertical
    let falling = body.vel.y > 0.0;
    let rising = body.vel.y < 0.0;
    let mut swept = body.rect().translated(Vec2::new(0.0, body.vel.y * dt));
    body.on_ground = false;

    for platform in platforms {
        if !swept.overlaps(&platform.rect) {
            continue;
        }
        if falling {
            swept.pos.y = platform.rect.top() - swept.size.y;
            body.on_ground = true;
            result.landed_on = Some(platform.id);
        } else if rising {
            swept.pos.y = platform.rect.bottom();
            result.bumped = Some(platform.id);
        }
        body.vel.y = 0.0;
        body.pos.y = swept.pos.y;
    }

    // Horizontal
    let mut side_box = swept.translated(Vec2::new(body.vel.x * dt, SIDE_HIT_SKIN));
    side_box.size.y -= 2.0 * SIDE_HIT_SKIN;
    if let Some(hit) = platforms.iter().find(|p| side_box.overlaps(&p.rect)) {
        log::debug!(
            "Side hit on platform {} at x={:.1}, body parked below the world",
            hit.id,
            body.pos.x
        );
        body.pos.y = tuning.lateral_death_y;
        result.side_hit = Some(hit.id);
    }

    result
}
