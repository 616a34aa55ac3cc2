//! Read-only view of a tick for the presentation layer
//!
//! Renderers, HUDs and audio read this; they never touch `GameState` directly.

use bytemuck::{Pod, Zeroable};
use serde::Serialize;

use crate::sim::{GamePhase, GameState, Rect};

/// Instance kinds understood by renderers
pub mod kinds {
    pub const BODY: u32 = 0;
    pub const PLATFORM: u32 = 1;
    pub const TEMPORARY: u32 = 2;
    pub const TEMPORARY_ACTIVE: u32 = 3;
}

/// One camera-relative rectangle for instanced drawing
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct RectInstance {
    /// x, y, w, h in screen space
    pub rect: [f32; 4],
    pub kind: u32,
}

impl RectInstance {
    pub fn new(rect: &Rect, camera_x: f32, kind: u32) -> Self {
        Self {
            rect: [rect.pos.x - camera_x, rect.pos.y, rect.size.x, rect.size.y],
            kind,
        }
    }
}

/// A platform as the presentation layer sees it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformView {
    pub id: u32,
    pub rect: Rect,
    pub temporary: bool,
    pub activated: bool,
    /// Seconds until an activated temporary platform disappears
    pub remaining: Option<f32>,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub round: u32,
    pub phase: GamePhase,
    pub alive: bool,
    pub score: i64,
    pub highscore: i64,
    pub camera_x: f32,
    pub body: Rect,
    pub on_ground: bool,
    /// Platforms overlapping the viewport, in world order
    pub platforms: Vec<PlatformView>,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        let tuning = &state.tuning;
        let view_min = state.camera.x;
        let view_max = state.camera.x + tuning.viewport_width;

        let platforms = state
            .world
            .platforms_between(view_min, view_max)
            .map(|p| PlatformView {
                id: p.id,
                rect: p.rect,
                temporary: p.temporary,
                activated: p.activated,
                remaining: (p.temporary && p.activated)
                    .then(|| (tuning.temp_platform_lifetime - p.timer).max(0.0)),
            })
            .collect();

        Self {
            round: state.round,
            phase: state.phase,
            alive: state.is_alive(),
            score: state.score,
            highscore: state.highscore(),
            camera_x: state.camera.x,
            body: state.body.rect(),
            on_ground: state.body.on_ground,
            platforms,
        }
    }

    /// Camera-relative instances: visible platforms first, body last
    pub fn instances(&self) -> Vec<RectInstance> {
        let mut out = Vec::with_capacity(self.platforms.len() + 1);
        for p in &self.platforms {
            let kind = match (p.temporary, p.activated) {
                (false, _) => kinds::PLATFORM,
                (true, false) => kinds::TEMPORARY,
                (true, true) => kinds::TEMPORARY_ACTIVE,
            };
            out.push(RectInstance::new(&p.rect, self.camera_x, kind));
        }
        out.push(RectInstance::new(&self.body, self.camera_x, kinds::BODY));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::{TickInput, tick};
    use crate::tuning::Tuning;

    #[test]
    fn test_capture_fresh_round() {
        let state = GameState::new(Tuning::default(), 1).expect("valid");
        let snap = Snapshot::capture(&state);
        assert!(snap.alive);
        assert_eq!(snap.round, 1);
        assert_eq!(snap.score, 0);
        assert_eq!(snap.platforms.len(), 1);
        assert_eq!(snap.platforms[0].id, 0);
        assert_eq!(snap.body.pos.x, SPAWN_X);
    }

    #[test]
    fn test_only_visible_platforms_listed() {
        let mut state = GameState::new(Tuning::default(), 8).expect("valid");
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(state.world.frontier() > state.camera.x + VIEWPORT_WIDTH);

        let snap = Snapshot::capture(&state);
        assert!(snap.platforms.len() < state.world.len());
        for p in &snap.platforms {
            assert!(p.rect.right() > snap.camera_x);
            assert!(p.rect.left() < snap.camera_x + VIEWPORT_WIDTH);
        }
    }

    #[test]
    fn test_instances_are_camera_relative() {
        let mut state = GameState::new(Tuning::default(), 1).expect("valid");
        state.camera.x = 100.0;
        let snap = Snapshot::capture(&state);
        let instances = snap.instances();
        let body = instances.last().expect("body instance");
        assert_eq!(body.kind, kinds::BODY);
        assert_eq!(body.rect[0], SPAWN_X - 100.0);

        let bytes: &[u8] = bytemuck::cast_slice(&instances);
        assert_eq!(bytes.len(), instances.len() * std::mem::size_of::<RectInstance>());
    }

    #[test]
    fn test_snapshot_serializes() {
        let state = GameState::new(Tuning::default(), 1).expect("valid");
        let json = serde_json::to_string(&Snapshot::capture(&state)).expect("serializable");
        assert!(json.contains("\"phase\":\"Playing\""));
        assert!(json.contains("\"score\":0"));
    }
}
